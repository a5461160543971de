use super::common::load_cases;
use jsoncompare::{CompareConfig, Comparator};
use serde_json::Value;

#[derive(Debug, serde::Deserialize)]
struct CompareCase {
    name: String,
    id: String,
    #[serde(default)]
    order_sensitive: bool,
    expected: Value,
    actual: Value,
    result: String,
    outcomes: Option<usize>,
    mismatches: Option<usize>,
    #[serde(default)]
    mentions: Vec<String>,
}

fn check_case(case: &CompareCase) -> Result<(), String> {
    let config = CompareConfig::default().with_order_sensitive(case.order_sensitive);
    let comparator = Comparator::new(config);

    let report = match comparator.report(&case.expected, &case.actual) {
        Ok(report) => report,
        Err(e) if case.result == "type_mismatch" => {
            return if e.to_string().contains("unable to compare") {
                Ok(())
            } else {
                Err(format!("unexpected error text: {}", e))
            };
        }
        Err(e) => return Err(format!("unexpected type mismatch: {}", e)),
    };

    let expected_match = match case.result.as_str() {
        "matched" => true,
        "not_matched" => false,
        other => return Err(format!("expected {}, got a report", other)),
    };
    if report.matched != expected_match {
        return Err(format!(
            "expected matched={}, got {:?}",
            expected_match, report
        ));
    }
    if report.matched != report.mismatches.is_empty() {
        return Err("verdict disagrees with mismatch list".to_string());
    }
    if let Some(n) = case.outcomes
        && report.outcomes.len() != n
    {
        return Err(format!("expected {} outcomes, got {:?}", n, report.outcomes));
    }
    if let Some(n) = case.mismatches
        && report.mismatches.len() != n
    {
        let messages: Vec<String> = report.messages().collect();
        return Err(format!("expected {} mismatches, got {:?}", n, messages));
    }
    for needle in &case.mentions {
        if !report.messages().any(|m| m.contains(needle.as_str())) {
            let messages: Vec<String> = report.messages().collect();
            return Err(format!("no message mentions {:?}: {:?}", needle, messages));
        }
    }
    Ok(())
}

#[test]
fn compare_suite() {
    let cases: Vec<CompareCase> = load_cases("compare.yaml");

    let mut passed = 0;
    let mut failed = 0;

    for case in &cases {
        match check_case(case) {
            Ok(()) => passed += 1,
            Err(reason) => {
                eprintln!("  FAIL [{}] {}: {}", case.id, case.name, reason);
                failed += 1;
            }
        }
    }

    eprintln!(
        "\ncompare: {} passed, {} failed out of {} total",
        passed,
        failed,
        cases.len()
    );
    assert!(!cases.is_empty(), "compare suite is empty");
    assert_eq!(failed, 0, "{} compare tests failed", failed);
}

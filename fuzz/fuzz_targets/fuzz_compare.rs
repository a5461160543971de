#![no_main]

use jsoncompare::{CompareConfig, Comparator};
use libfuzzer_sys::fuzz_target;

// Input: `<expected json>\0<actual json>`; the first byte picks the order mode.
fuzz_target!(|data: &[u8]| {
    let Some((&mode, rest)) = data.split_first() else {
        return;
    };
    let Some(split) = rest.iter().position(|b| *b == 0) else {
        return;
    };
    let (Ok(expected), Ok(actual)) = (
        serde_json::from_slice::<serde_json::Value>(&rest[..split]),
        serde_json::from_slice::<serde_json::Value>(&rest[split + 1..]),
    ) else {
        return;
    };

    let comparator = Comparator::new(CompareConfig::default().with_order_sensitive(mode & 1 == 1));
    let first = comparator.report(&expected, &actual);
    if let Ok(report) = &first {
        assert_eq!(report.matched, report.outcomes.iter().all(|ok| *ok));
    }
    // Same inputs, same verdict and diagnostics.
    assert_eq!(first, comparator.report(&expected, &actual));
    // Everything contains itself.
    if expected.is_array() || expected.is_object() {
        assert!(comparator.compare(&expected, &expected).unwrap_or(false));
    }
});

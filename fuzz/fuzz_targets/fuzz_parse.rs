#![no_main]

use jsoncompare::parse::{parse_json, parse_yaml};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let _ = parse_json(&s);
    let _ = parse_yaml(&s);
});

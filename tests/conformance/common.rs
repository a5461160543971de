use std::path::PathBuf;

pub fn conformance_dir() -> PathBuf {
    std::env::var("JSONCOMPARE_CONFORMANCE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data"))
}

/// Load a case file, failing loudly if it is missing.
pub fn load_cases<T: serde::de::DeserializeOwned>(filename: &str) -> Vec<T> {
    let path = conformance_dir().join(filename);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {:?}: {}", path, e));
    serde_saphyr::from_str(&content).unwrap_or_else(|e| panic!("invalid {:?}: {}", path, e))
}

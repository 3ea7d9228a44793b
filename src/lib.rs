//! Shared fixtures for the workspace-level integration tests.

use serde::Deserialize;

/// Contents of `tests/testdata/sequences_golden.json`.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub cases: Vec<GoldenCase>,
}

/// One known sequence, or one request that must be rejected.
#[derive(Debug, Deserialize)]
pub struct GoldenCase {
    pub name: String,
    pub kind: String,
    pub first_term: f64,
    pub step: f64,
    pub term_count: i64,
    #[serde(default)]
    pub terms: Option<Vec<f64>>,
    #[serde(default)]
    pub sum: Option<f64>,
    #[serde(default)]
    pub csv_filename: Option<String>,
    /// Expected error message for rejected requests.
    #[serde(default)]
    pub error: Option<String>,
}

/// Parse golden data from JSON text.
pub fn parse_golden(json: &str) -> serde_json::Result<GoldenData> {
    serde_json::from_str(json)
}

/// Load the golden file shipped with the workspace.
pub fn load_golden() -> std::io::Result<GoldenData> {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/sequences_golden.json"
    );
    let text = std::fs::read_to_string(path)?;
    parse_golden(&text).map_err(std::io::Error::other)
}

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the `vignette_demo` tool.
#[derive(Debug, Deserialize)]
pub struct VignetteDemoConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Optional destination for the per-stage timing report.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<VignetteDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::VignetteDemoConfig;

    #[test]
    fn parses_minimal_config() {
        let config: VignetteDemoConfig =
            serde_json::from_str(r#"{"input": "in.png", "output": "out.png"}"#).unwrap();
        assert_eq!(config.input.to_str(), Some("in.png"));
        assert!(config.report_json.is_none());
    }
}

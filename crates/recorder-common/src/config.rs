use serde::{Deserialize, Serialize};

/// Page global the host sets before loading the recorder to override defaults.
pub const CONFIG_GLOBAL: &str = "__RECORDER_CONFIG__";

/// Page global holding the recorder's wasm exports (`install`, `uninstall`,
/// `isInstalled`) once the host has loaded it.
pub const EXPORTS_GLOBAL: &str = "__RECORDER__";

/// Settings for the in-page recorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecorderConfig {
    #[serde(default)]
    pub overlay: OverlayConfig,
    /// Maximum number of characters of `textContent` kept for clicks.
    #[serde(default = "default_text_limit")]
    pub text_limit: usize,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            overlay: OverlayConfig::default(),
            text_limit: default_text_limit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    #[serde(default = "default_element_id")]
    pub element_id: String,
    #[serde(default = "default_title")]
    pub title: String,
    /// Entries kept below the title before the oldest is evicted.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            element_id: default_element_id(),
            title: default_title(),
            capacity: default_capacity(),
        }
    }
}

fn default_text_limit() -> usize {
    50
}

fn default_element_id() -> String {
    "recorder-overlay-log".to_string()
}

fn default_title() -> String {
    "錄製中".to_string()
}

fn default_capacity() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: RecorderConfig =
            serde_json::from_str(r#"{"overlay":{"capacity":3}}"#).unwrap();
        assert_eq!(config.overlay.capacity, 3);
        assert_eq!(config.overlay.element_id, "recorder-overlay-log");
        assert_eq!(config.text_limit, 50);
    }
}

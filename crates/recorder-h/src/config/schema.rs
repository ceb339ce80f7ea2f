use recorder_common::RecorderConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub browser: BrowserSettings,
    #[serde(default)]
    pub bundle: BundleSettings,
    #[serde(default)]
    pub recorder: RecorderConfig,
}

impl HostConfig {
    /// Applies `CHROME_BIN`, `RECORDER_USER_DATA_DIR` and `RECORDER_BUNDLE_DIR`.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(bin) = non_empty("CHROME_BIN") {
            self.browser.chrome_bin = Some(PathBuf::from(bin));
        }
        if let Some(dir) = non_empty("RECORDER_USER_DATA_DIR") {
            self.browser.user_data_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = non_empty("RECORDER_BUNDLE_DIR") {
            self.bundle.dir = PathBuf::from(dir);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserSettings {
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub chrome_bin: Option<PathBuf>,
    /// Profile directory. A throwaway one is created when unset.
    #[serde(default)]
    pub user_data_dir: Option<PathBuf>,
}

/// Location of the `wasm-bindgen --target no-modules` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSettings {
    #[serde(default = "default_bundle_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_bundle_name")]
    pub name: String,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            dir: default_bundle_dir(),
            name: default_bundle_name(),
        }
    }
}

fn default_bundle_dir() -> PathBuf {
    PathBuf::from("pkg")
}

fn default_bundle_name() -> String {
    "recorder_wasm".to_string()
}

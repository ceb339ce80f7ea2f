use crate::config::schema::BundleSettings;
use crate::error::HostError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use recorder_common::config::{CONFIG_GLOBAL, EXPORTS_GLOBAL};
use recorder_common::RecorderConfig;
use std::path::{Path, PathBuf};

/// Compiled in-page recorder: wasm-bindgen glue plus the wasm module.
#[derive(Debug, Clone)]
pub struct RecorderBundle {
    glue_js: String,
    wasm: Vec<u8>,
}

impl RecorderBundle {
    pub fn new(glue_js: String, wasm: Vec<u8>) -> Self {
        Self { glue_js, wasm }
    }

    /// Reads `<dir>/<name>.js` and `<dir>/<name>_bg.wasm`.
    pub async fn load(settings: &BundleSettings) -> Result<Self, HostError> {
        let (js_path, wasm_path) = Self::paths(&settings.dir, &settings.name);

        let glue_js = tokio::fs::read_to_string(&js_path)
            .await
            .map_err(|source| HostError::Bundle {
                path: js_path.clone(),
                source,
            })?;
        let wasm = tokio::fs::read(&wasm_path)
            .await
            .map_err(|source| HostError::Bundle {
                path: wasm_path.clone(),
                source,
            })?;

        tracing::info!(
            "Loaded recorder bundle {} ({} bytes of wasm)",
            js_path.display(),
            wasm.len()
        );
        Ok(Self::new(glue_js, wasm))
    }

    pub fn paths(dir: &Path, name: &str) -> (PathBuf, PathBuf) {
        (
            dir.join(format!("{}.js", name)),
            dir.join(format!("{}_bg.wasm", name)),
        )
    }

    /// Expression that publishes the config, instantiates the module and
    /// resolves once the recorder's start function has run.
    ///
    /// The glue's `wasm_bindgen` binding is local to the wrapper, so the
    /// exports are republished on `window.__RECORDER__`.
    pub fn bootstrap_script(&self, config: &RecorderConfig) -> Result<String, HostError> {
        let config_json = serde_json::to_string(config)?;
        let wasm_b64 = STANDARD.encode(&self.wasm);

        Ok(format!(
            r#"(async () => {{
window.{global} = {config_json};
{glue}
const bytes = Uint8Array.from(atob("{wasm_b64}"), (c) => c.charCodeAt(0));
await wasm_bindgen({{ module_or_path: bytes }});
window.{exports} = wasm_bindgen;
return true;
}})()"#,
            global = CONFIG_GLOBAL,
            exports = EXPORTS_GLOBAL,
            config_json = config_json,
            glue = self.glue_js,
            wasm_b64 = wasm_b64,
        ))
    }
}

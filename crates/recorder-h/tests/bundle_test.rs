use recorder_common::RecorderConfig;
use recorder_h::bundle::RecorderBundle;
use recorder_h::config::schema::BundleSettings;
use recorder_h::HostError;
use std::path::PathBuf;

#[test]
fn test_bundle_paths() {
    let (js, wasm) = RecorderBundle::paths(&PathBuf::from("pkg"), "recorder_wasm");
    assert_eq!(js, PathBuf::from("pkg/recorder_wasm.js"));
    assert_eq!(wasm, PathBuf::from("pkg/recorder_wasm_bg.wasm"));
}

#[test]
fn test_bootstrap_inlines_config_glue_and_module() {
    let bundle = RecorderBundle::new(
        "let wasm_bindgen; (function() { wasm_bindgen = () => {}; })();".to_string(),
        vec![0x00, 0x61, 0x73, 0x6d],
    );
    let script = bundle.bootstrap_script(&RecorderConfig::default()).unwrap();

    assert!(script.starts_with("(async () => {"));
    assert!(script.ends_with("})()"));
    assert!(script.contains(r#"window.__RECORDER_CONFIG__ = {"overlay":{"element_id":"recorder-overlay-log""#));
    assert!(script.contains("let wasm_bindgen;"));
    // "\0asm" magic, base64 encoded.
    assert!(script.contains(r#"atob("AGFzbQ==")"#));
    assert!(script.contains("await wasm_bindgen({ module_or_path: bytes });"));
}

#[test]
fn test_bootstrap_publishes_exports_after_instantiation() {
    let bundle = RecorderBundle::new(
        "let wasm_bindgen; (function() { wasm_bindgen = Object.assign(() => {}, {}); })();"
            .to_string(),
        vec![0x00],
    );
    let script = bundle.bootstrap_script(&RecorderConfig::default()).unwrap();

    // The glue's `let` is scoped to the async wrapper; only the window global
    // survives the bootstrap.
    let glue = script.find("let wasm_bindgen;").expect("glue inlined");
    let init = script
        .find("await wasm_bindgen({ module_or_path: bytes });")
        .expect("instantiation");
    let publish = script
        .find("window.__RECORDER__ = wasm_bindgen;")
        .expect("exports published");
    assert!(glue < init);
    assert!(init < publish);
    assert!(publish < script.find("return true;").unwrap());
}

#[tokio::test]
async fn test_load_reads_both_files() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(dir.path().join("rec.js"), "// glue").await.unwrap();
    tokio::fs::write(dir.path().join("rec_bg.wasm"), [0u8, 1, 2])
        .await
        .unwrap();

    let settings = BundleSettings {
        dir: dir.path().to_path_buf(),
        name: "rec".to_string(),
    };
    let bundle = RecorderBundle::load(&settings).await.expect("bundle should load");
    let script = bundle.bootstrap_script(&RecorderConfig::default()).unwrap();
    assert!(script.contains("// glue"));
    assert!(script.contains(r#"atob("AAEC")"#));
}

#[tokio::test]
async fn test_missing_wasm_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(dir.path().join("rec.js"), "// glue").await.unwrap();

    let settings = BundleSettings {
        dir: dir.path().to_path_buf(),
        name: "rec".to_string(),
    };
    match RecorderBundle::load(&settings).await {
        Err(HostError::Bundle { path, .. }) => {
            assert_eq!(path, dir.path().join("rec_bg.wasm"));
        }
        other => panic!("expected bundle error, got {:?}", other.map(|_| ())),
    }
}

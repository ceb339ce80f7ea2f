use crate::bundle::RecorderBundle;
use crate::error::HostError;
use chromiumoxide::cdp::js_protocol::runtime::EvaluateParams;
use chromiumoxide::Page;
use recorder_common::RecorderConfig;
use std::future::Future;
use std::time::Duration;

/// Upper bound for instantiating the bundle. Dialogs block the JS thread.
const EVAL_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum retries for context errors during page navigation.
const MAX_CONTEXT_RETRIES: u32 = 10;

/// Delay between retries when context is not found (page navigating).
const CONTEXT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Check if an error indicates the page context is unavailable (e.g., during navigation).
pub fn is_context_error(err: &str) -> bool {
    err.contains("Cannot find context")
        || err.contains("Execution context was destroyed")
        || err.contains("-32000")
}

/// Retry an async operation that may fail due to context errors during page navigation.
/// Returns immediately on success or non-context errors; retries only on context errors.
pub async fn retry_on_context_error<T, E, F, Fut>(
    operation_name: &str,
    mut operation: F,
) -> Result<T, HostError>
where
    E: std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut last_error = None;

    for attempt in 0..MAX_CONTEXT_RETRIES {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                let err_str = e.to_string();
                if is_context_error(&err_str) {
                    tracing::debug!(
                        "{} context error (attempt {}/{}), retrying...",
                        operation_name,
                        attempt + 1,
                        MAX_CONTEXT_RETRIES
                    );
                    last_error = Some(err_str);
                    tokio::time::sleep(CONTEXT_RETRY_DELAY).await;
                    continue;
                }
                return Err(HostError::Injection(format!("{}: {}", operation_name, err_str)));
            }
        }
    }

    Err(HostError::Injection(last_error.unwrap_or_else(|| {
        format!("{} failed after retries", operation_name)
    })))
}

/// Installs the recorder unless its overlay is already on the page.
///
/// Returns `true` when the bundle was evaluated.
pub async fn inject_recorder(
    page: &Page,
    bundle: &RecorderBundle,
    config: &RecorderConfig,
) -> Result<bool, HostError> {
    let script = bundle.bootstrap_script(config)?;
    let probe = overlay_probe(&config.overlay.element_id)?;
    retry_on_context_error("Recorder injection", || try_inject(page, &probe, &script)).await
}

/// Expression that is `true` when an element with the overlay id exists.
pub fn overlay_probe(element_id: &str) -> Result<String, HostError> {
    Ok(format!(
        "!!document.getElementById({})",
        serde_json::to_string(element_id)?
    ))
}

async fn try_inject(page: &Page, probe: &str, script: &str) -> Result<bool, String> {
    let is_loaded: bool = page
        .evaluate(probe)
        .await
        .map_err(|e| format!("Failed to check recorder status: {}", e))?
        .into_value()
        .map_err(|e| format!("Failed to get bool value: {}", e))?;

    if is_loaded {
        tracing::info!("Recorder already present, skipping injection");
        return Ok(false);
    }

    // Plain expression: `Page::evaluate` would treat the leading arrow function
    // as a function declaration.
    let params = EvaluateParams::builder()
        .expression(script)
        .await_promise(true)
        .return_by_value(true)
        .build()
        .map_err(|e| format!("Failed to build evaluate params: {}", e))?;

    match tokio::time::timeout(EVAL_TIMEOUT, page.evaluate_expression(params)).await {
        Err(_) => Err("Recorder bootstrap timed out - possibly blocked by a dialog".to_string()),
        Ok(Err(e)) => Err(format!("Failed to evaluate recorder bundle: {}", e)),
        Ok(Ok(_)) => Ok(true),
    }
}

use crate::config::schema::BrowserSettings;
use crate::error::HostError;
use chromiumoxide::cdp::js_protocol::runtime::{EventConsoleApiCalled, RemoteObject};
use chromiumoxide::listeners::EventStream;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct CdpClient {
    pub browser: Browser,
    pub handler_task: JoinHandle<()>,
    pub page: Page,
    console_task: JoinHandle<()>,
    user_data_dir: PathBuf,
    cleanup_user_data_dir: bool,
}

impl CdpClient {
    /// Launches Chromium with one blank page.
    ///
    /// Every `console.*` call on that page is rendered to a single line and
    /// forwarded on the returned channel, in the order the browser reports them.
    pub async fn launch(
        settings: &BrowserSettings,
    ) -> Result<(Self, mpsc::UnboundedReceiver<String>), HostError> {
        let (user_data_dir, cleanup_user_data_dir) = resolve_user_data_dir(settings)?;

        let (browser, handler_task, page, console_task, rx) =
            match open_browser(settings, &user_data_dir).await {
                Ok(parts) => parts,
                Err(e) => {
                    if cleanup_user_data_dir {
                        remove_user_data_dir(&user_data_dir);
                    }
                    return Err(e);
                }
            };

        Ok((
            Self {
                browser,
                handler_task,
                page,
                console_task,
                user_data_dir,
                cleanup_user_data_dir,
            },
            rx,
        ))
    }

    pub async fn close(mut self) -> Result<(), HostError> {
        self.console_task.abort();
        self.browser
            .close()
            .await
            .map_err(|e| HostError::Launch(format!("Error closing browser: {}", e)))?;
        if let Err(e) = self.handler_task.await {
            tracing::debug!("Error awaiting handler: {}", e);
        }

        if self.cleanup_user_data_dir {
            remove_user_data_dir(&self.user_data_dir);
        }

        Ok(())
    }
}

type LaunchedParts = (
    Browser,
    JoinHandle<()>,
    Page,
    JoinHandle<()>,
    mpsc::UnboundedReceiver<String>,
);

async fn open_browser(
    settings: &BrowserSettings,
    user_data_dir: &Path,
) -> Result<LaunchedParts, HostError> {
    let mut config_builder = BrowserConfig::builder();
    config_builder = config_builder.no_sandbox(); // Often needed in docker/CI/restricted envs
    config_builder = config_builder.user_data_dir(user_data_dir);

    if settings.visible {
        tracing::info!("Launching browser in visible mode");
        config_builder = config_builder.with_head();
    } else {
        tracing::info!("Launching browser in headless mode");
    }

    if let Some(chrome_bin) = &settings.chrome_bin {
        tracing::info!("Using custom Chrome binary: {}", chrome_bin.display());
        config_builder = config_builder.chrome_executable(chrome_bin);
    }

    let (mut browser, mut handler) = Browser::launch(
        config_builder
            .build()
            .map_err(|e| HostError::Launch(format!("Failed to build browser config: {}", e)))?,
    )
    .await
    .map_err(|e| HostError::Launch(e.to_string()))?;

    let handler_task = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if let Err(e) = h {
                tracing::error!("Browser handler error (ignoring): {}", e);
                continue;
            }
        }
        tracing::info!("Browser handler task ended");
    });

    let (page, console_events) = match open_page(&browser).await {
        Ok(opened) => opened,
        Err(e) => {
            if let Err(close_err) = browser.close().await {
                tracing::debug!("Error closing browser after failed launch: {}", close_err);
            }
            handler_task.abort();
            return Err(e);
        }
    };

    let (tx, rx) = mpsc::unbounded_channel();
    let console_task = tokio::spawn(async move {
        let mut console_events = console_events;
        while let Some(event) = console_events.next().await {
            let line = render_console_args(&event.args);
            tracing::debug!("Browser Console [{:?}]: {}", event.r#type, line);
            if tx.send(line).is_err() {
                break;
            }
        }
        tracing::info!("Console listener ended");
    });

    Ok((browser, handler_task, page, console_task, rx))
}

async fn open_page(
    browser: &Browser,
) -> Result<(Page, EventStream<EventConsoleApiCalled>), HostError> {
    let page = browser
        .new_page("about:blank")
        .await
        .map_err(|e| HostError::Launch(format!("Failed to create page: {}", e)))?;

    let console_events = page
        .event_listener::<EventConsoleApiCalled>()
        .await
        .map_err(|e| HostError::Launch(format!("Failed to subscribe to console events: {}", e)))?;

    Ok((page, console_events))
}

fn remove_user_data_dir(path: &Path) {
    if let Err(e) = std::fs::remove_dir_all(path) {
        tracing::debug!("Failed to clean up user-data-dir {}: {}", path.display(), e);
    }
}

/// Joins console arguments the way DevTools prints them: strings verbatim,
/// other values as JSON, unserializable ones by description.
pub fn render_console_args(args: &[RemoteObject]) -> String {
    args.iter()
        .map(|arg| render_arg(arg.value.as_ref(), arg.description.as_deref()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_arg(value: Option<&serde_json::Value>, description: Option<&str>) -> String {
    match value {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => description.unwrap_or("undefined").to_string(),
    }
}

fn resolve_user_data_dir(settings: &BrowserSettings) -> Result<(PathBuf, bool), HostError> {
    if let Some(dir) = &settings.user_data_dir {
        std::fs::create_dir_all(dir)?;
        tracing::info!("Using configured user data dir: {}", dir.display());
        return Ok((dir.clone(), false));
    }

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| HostError::Launch(format!("System clock error: {}", e)))?
        .as_nanos();
    let unique = format!("recorder-chromium-profile-{}-{}", std::process::id(), nanos);
    let path = std::env::temp_dir().join(unique);
    std::fs::create_dir_all(&path)?;
    tracing::info!("Using isolated user data dir: {}", path.display());
    Ok((path, true))
}

/// Isolated profile dirs created by this process that still exist.
#[cfg(test)]
pub(crate) fn leftover_profile_dirs() -> usize {
    let prefix = format!("recorder-chromium-profile-{}-", std::process::id());
    std::fs::read_dir(std::env::temp_dir())
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .filter(|entry| entry.file_name().to_string_lossy().starts_with(&prefix))
                .count()
        })
        .unwrap_or(0)
}

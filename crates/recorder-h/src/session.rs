use crate::bundle::RecorderBundle;
use crate::cdp::CdpClient;
use crate::config::schema::HostConfig;
use crate::error::HostError;
use crate::inject::inject_recorder;
use chromiumoxide::cdp::browser_protocol::page::SetBypassCspParams;
use recorder_common::{ConsoleLine, RecorderConfig};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// One browser page with the recorder installed.
pub struct RecordingSession {
    client: CdpClient,
    console: mpsc::UnboundedReceiver<String>,
}

impl RecordingSession {
    /// Launches the browser, opens `url` and installs the recorder.
    ///
    /// The browser is closed again if navigation or injection fails.
    pub async fn start(config: &HostConfig, url: &str) -> Result<Self, HostError> {
        let bundle = RecorderBundle::load(&config.bundle).await?;
        let (client, console) = CdpClient::launch(&config.browser).await?;
        let session = Self { client, console };

        if let Err(e) = session.open(url, &bundle, &config.recorder).await {
            if let Err(close_err) = session.close().await {
                warn!("Failed to close browser after failed start: {}", close_err);
            }
            return Err(e);
        }
        Ok(session)
    }

    async fn open(
        &self,
        url: &str,
        bundle: &RecorderBundle,
        recorder: &RecorderConfig,
    ) -> Result<(), HostError> {
        // Instantiating wasm from bytes is blocked by many page CSPs.
        if let Err(e) = self.client.page.execute(SetBypassCspParams::new(true)).await {
            warn!("Failed to bypass CSP, injection may fail: {}", e);
        }

        info!("Navigating to: {}", url);
        self.client
            .page
            .goto(url)
            .await
            .map_err(|e| HostError::Navigation(e.to_string()))?;

        inject_recorder(&self.client.page, bundle, recorder).await?;
        Ok(())
    }

    /// Next recorder line from the page, skipping unrelated console output.
    ///
    /// Returns `None` once the browser stops delivering console events.
    pub async fn next_line(&mut self) -> Option<ConsoleLine> {
        next_recorder_line(&mut self.console).await
    }

    pub fn client(&self) -> &CdpClient {
        &self.client
    }

    pub async fn close(self) -> Result<(), HostError> {
        self.client.close().await
    }
}

pub async fn next_recorder_line(
    console: &mut mpsc::UnboundedReceiver<String>,
) -> Option<ConsoleLine> {
    while let Some(text) = console.recv().await {
        match ConsoleLine::parse(&text) {
            Ok(Some(line)) => return Some(line),
            Ok(None) => {}
            Err(e) => warn!("Ignoring malformed recorder line: {}", e),
        }
    }
    None
}

use clap::Parser;
use recorder_common::ConsoleLine;
use recorder_h::config::loader::ConfigLoader;
use recorder_h::RecordingSession;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "recorder-h", version, about = "Record page interactions in Chromium")]
struct Args {
    /// Page to open
    url: String,

    /// Config file (defaults to ./recorder.yaml, then ~/.recorder/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Launch browser in visible mode (not headless)
    #[arg(long)]
    visible: bool,

    /// Directory holding the wasm-bindgen output of recorder-wasm
    #[arg(long)]
    bundle_dir: Option<PathBuf>,

    /// Print raw recorder lines instead of summaries
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries only records.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from(path).await?,
        None => ConfigLoader::load_default().await?,
    };
    config.apply_env();
    if args.visible {
        config.browser.visible = true;
    }
    if let Some(dir) = args.bundle_dir {
        config.bundle.dir = dir;
    }

    let mut session = match RecordingSession::start(&config, &args.url).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to start recording: {}", e);
            return Err(e.into());
        }
    };

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                tracing::info!("Interrupted, stopping recording");
                break;
            }
            line = session.next_line() => match line {
                Some(ConsoleLine::Initialized) => tracing::info!("Recorder ready"),
                Some(ConsoleLine::Record(record)) => {
                    if args.json {
                        println!("{}", record.to_console_line()?);
                    } else {
                        println!("{}", record.overlay_line().trim_end());
                    }
                }
                None => {
                    tracing::info!("Browser closed, stopping recording");
                    break;
                }
            },
        }
    }

    session.close().await?;
    Ok(())
}

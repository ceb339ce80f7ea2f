pub mod bundle;
pub mod cdp;
pub mod error;
pub mod inject;
pub mod session;

pub mod config {
    pub mod loader;
    pub mod schema;
}

pub use error::HostError;
pub use session::RecordingSession;

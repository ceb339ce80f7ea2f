pub mod config;
pub mod element;
pub mod error;
pub mod overlay;
pub mod protocol;
pub mod recorder;

pub use config::{OverlayConfig, RecorderConfig};
pub use element::{ElementKind, ElementView};
pub use error::ProtocolError;
pub use overlay::{OverlayLog, OverlaySurface};
pub use protocol::{ClickRecord, ConsoleLine, FillRecord, InteractionRecord, SelectRecord};
pub use recorder::{LogChannel, Recorder};

//! In-page half of the interaction recorder.
//!
//! Built with `wasm-bindgen --target no-modules`; the start function mounts the
//! overlay, attaches the capturing listeners and prints `RECORDER_INITIALIZED`.
//! Everything that touches the DOM only exists on `wasm32`.

pub mod style;

#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod install;
#[cfg(target_arch = "wasm32")]
mod listener;

#[cfg(target_arch = "wasm32")]
pub use install::{install, is_installed, start, uninstall};

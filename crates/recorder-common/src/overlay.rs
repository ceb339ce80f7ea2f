use crate::config::OverlayConfig;
use tracing::debug;

/// Backing store for the on-page log panel.
///
/// The title entry is owned by the surface and is never counted or evicted.
pub trait OverlaySurface {
    /// Builds the panel and its title entry.
    fn mount(&mut self, config: &OverlayConfig);

    /// Whether the panel is still part of the document.
    fn is_attached(&self) -> bool;

    fn push_entry(&mut self, text: &str);

    /// Number of entries below the title.
    fn entry_count(&self) -> usize;

    fn remove_oldest_entry(&mut self);

    fn scroll_to_end(&mut self);

    fn unmount(&mut self);
}

/// Bounded FIFO log rendered through an [`OverlaySurface`].
pub struct OverlayLog<S: OverlaySurface> {
    surface: S,
    capacity: usize,
}

impl<S: OverlaySurface> OverlayLog<S> {
    pub fn initialize(mut surface: S, config: &OverlayConfig) -> Self {
        surface.mount(config);
        Self {
            surface,
            capacity: config.capacity,
        }
    }

    pub fn append_entry(&mut self, message: &str) {
        if !self.surface.is_attached() {
            debug!("Overlay detached, skipping entry: {}", message);
            return;
        }

        self.surface.push_entry(message);
        self.surface.scroll_to_end();

        let excess = self.surface.entry_count().saturating_sub(self.capacity);
        for _ in 0..excess {
            self.surface.remove_oldest_entry();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn dispose(mut self) -> S {
        self.surface.unmount();
        self.surface
    }
}

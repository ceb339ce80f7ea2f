use crate::config::RecorderConfig;
use crate::element::{truncate_chars, ElementKind, ElementView};
use crate::overlay::{OverlayLog, OverlaySurface};
use crate::protocol::{ClickRecord, FillRecord, InteractionRecord, SelectRecord, INITIALIZED};
use tracing::{debug, warn};

/// Destination for machine-readable recorder lines (the page console).
pub trait LogChannel {
    fn emit(&mut self, line: &str);
}

/// Turns DOM interactions into overlay entries and console records.
///
/// Each handler runs to completion and emits at most one record. Handlers
/// return the record they emitted so callers and tests can observe it.
pub struct Recorder<S: OverlaySurface, C: LogChannel> {
    overlay: OverlayLog<S>,
    channel: C,
    config: RecorderConfig,
}

impl<S: OverlaySurface, C: LogChannel> Recorder<S, C> {
    /// Mounts the overlay. The ready sentinel is sent separately through
    /// [`Recorder::announce_ready`] once listeners are attached.
    pub fn new(surface: S, channel: C, config: RecorderConfig) -> Self {
        let overlay = OverlayLog::initialize(surface, &config.overlay);
        Self {
            overlay,
            channel,
            config,
        }
    }

    pub fn announce_ready(&mut self) {
        self.channel.emit(INITIALIZED);
    }

    pub fn on_click<E: ElementView + ?Sized>(
        &mut self,
        client_x: i32,
        client_y: i32,
        target: &E,
    ) -> Option<InteractionRecord> {
        let record = click_record(client_x, client_y, target, self.config.text_limit);
        self.publish(record)
    }

    pub fn on_input<E: ElementView + ?Sized>(&mut self, target: &E) -> Option<InteractionRecord> {
        let record = fill_record(target)?;
        self.publish(record)
    }

    pub fn on_change<E: ElementView + ?Sized>(&mut self, target: &E) -> Option<InteractionRecord> {
        let record = select_record(target)?;
        self.publish(record)
    }

    pub fn overlay(&self) -> &OverlayLog<S> {
        &self.overlay
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Tears down the overlay and hands back the parts.
    pub fn dispose(self) -> (S, C) {
        (self.overlay.dispose(), self.channel)
    }

    fn publish(&mut self, record: InteractionRecord) -> Option<InteractionRecord> {
        self.overlay.append_entry(&record.overlay_line());
        match record.to_console_line() {
            Ok(line) => {
                self.channel.emit(&line);
                Some(record)
            }
            Err(e) => {
                warn!("Dropping {} record: {}", record.tag(), e);
                None
            }
        }
    }
}

pub fn click_record<E: ElementView + ?Sized>(
    client_x: i32,
    client_y: i32,
    target: &E,
    text_limit: usize,
) -> InteractionRecord {
    let text_content = target
        .text_content()
        .map(|text| truncate_chars(&text, text_limit))
        .unwrap_or_default();

    InteractionRecord::Click(ClickRecord {
        x: client_x,
        y: client_y,
        tag_name: target.tag_name(),
        id: target.id(),
        class_name: target.class_name(),
        text_content,
    })
}

/// `None` unless the target is a text input or text area.
pub fn fill_record<E: ElementView + ?Sized>(target: &E) -> Option<InteractionRecord> {
    let tag_name = target.tag_name();
    if ElementKind::of(&tag_name) != ElementKind::TextEntry {
        debug!("Ignoring input event on {}", tag_name);
        return None;
    }

    Some(InteractionRecord::Fill(FillRecord {
        tag_name,
        id: target.id(),
        name: target.name(),
        value: target.value(),
        input_type: target.input_type(),
    }))
}

/// `None` unless the target is a selection control.
pub fn select_record<E: ElementView + ?Sized>(target: &E) -> Option<InteractionRecord> {
    let tag_name = target.tag_name();
    if ElementKind::of(&tag_name) != ElementKind::Selection {
        debug!("Ignoring change event on {}", tag_name);
        return None;
    }

    Some(InteractionRecord::Select(SelectRecord {
        tag_name,
        id: target.id(),
        name: target.name(),
        value: target.value(),
        selected_index: target.selected_index(),
        selected_text: target.selected_option_texts().join(", "),
    }))
}

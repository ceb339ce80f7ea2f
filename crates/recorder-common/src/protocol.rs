//! Console wire format shared by the in-page recorder and its consumers.
//!
//! Every line is either the bare [`INITIALIZED`] sentinel or `<TAG>:<JSON>`,
//! where the tag names the record variant. Field order inside the JSON body
//! follows struct declaration order.

use crate::error::ProtocolError;
use serde::{Deserialize, Serialize};

/// Emitted once, after the overlay is built and all listeners are attached.
pub const INITIALIZED: &str = "RECORDER_INITIALIZED";

pub const CLICK_TAG: &str = "RECORDER_CLICK";
pub const FILL_TAG: &str = "RECORDER_FILL";
pub const SELECT_TAG: &str = "RECORDER_SELECT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickRecord {
    pub x: i32,
    pub y: i32,
    pub tag_name: String,
    pub id: String,
    pub class_name: String,
    pub text_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillRecord {
    pub tag_name: String,
    pub id: String,
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub input_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectRecord {
    pub tag_name: String,
    pub id: String,
    pub name: String,
    pub value: String,
    pub selected_index: i32,
    pub selected_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionRecord {
    Click(ClickRecord),
    Fill(FillRecord),
    Select(SelectRecord),
}

impl InteractionRecord {
    pub fn tag(&self) -> &'static str {
        match self {
            InteractionRecord::Click(_) => CLICK_TAG,
            InteractionRecord::Fill(_) => FILL_TAG,
            InteractionRecord::Select(_) => SELECT_TAG,
        }
    }

    pub fn tag_name(&self) -> &str {
        match self {
            InteractionRecord::Click(r) => &r.tag_name,
            InteractionRecord::Fill(r) => &r.tag_name,
            InteractionRecord::Select(r) => &r.tag_name,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            InteractionRecord::Click(r) => &r.id,
            InteractionRecord::Fill(r) => &r.id,
            InteractionRecord::Select(r) => &r.id,
        }
    }

    /// Short human-readable line shown in the overlay, e.g. `點擊: BUTTON #submit`.
    pub fn overlay_line(&self) -> String {
        let label = match self {
            InteractionRecord::Click(_) => "點擊",
            InteractionRecord::Fill(_) => "輸入",
            InteractionRecord::Select(_) => "選擇",
        };
        let id = self.id();
        let id_part = if id.is_empty() {
            String::new()
        } else {
            format!("#{}", id)
        };
        format!("{}: {} {}", label, self.tag_name(), id_part)
    }

    /// Serializes to `<TAG>:<JSON>`.
    pub fn to_console_line(&self) -> Result<String, ProtocolError> {
        let body = match self {
            InteractionRecord::Click(r) => serde_json::to_string(r)?,
            InteractionRecord::Fill(r) => serde_json::to_string(r)?,
            InteractionRecord::Select(r) => serde_json::to_string(r)?,
        };
        Ok(format!("{}:{}", self.tag(), body))
    }
}

/// A decoded recorder console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    Initialized,
    Record(InteractionRecord),
}

impl ConsoleLine {
    /// Decodes one console line.
    ///
    /// Returns `Ok(None)` for lines the recorder did not produce, so callers can
    /// feed every page log through here.
    pub fn parse(line: &str) -> Result<Option<ConsoleLine>, ProtocolError> {
        if line == INITIALIZED {
            return Ok(Some(ConsoleLine::Initialized));
        }

        if let Some(body) = strip_tag(line, CLICK_TAG) {
            let record = decode(CLICK_TAG, body)?;
            return Ok(Some(ConsoleLine::Record(InteractionRecord::Click(record))));
        }
        if let Some(body) = strip_tag(line, FILL_TAG) {
            let record = decode(FILL_TAG, body)?;
            return Ok(Some(ConsoleLine::Record(InteractionRecord::Fill(record))));
        }
        if let Some(body) = strip_tag(line, SELECT_TAG) {
            let record = decode(SELECT_TAG, body)?;
            return Ok(Some(ConsoleLine::Record(InteractionRecord::Select(record))));
        }

        Ok(None)
    }

    pub fn to_line(&self) -> Result<String, ProtocolError> {
        match self {
            ConsoleLine::Initialized => Ok(INITIALIZED.to_string()),
            ConsoleLine::Record(record) => record.to_console_line(),
        }
    }
}

fn strip_tag<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    line.strip_prefix(tag)?.strip_prefix(':')
}

fn decode<'a, T: Deserialize<'a>>(tag: &'static str, body: &'a str) -> Result<T, ProtocolError> {
    serde_json::from_str(body).map_err(|source| ProtocolError::Malformed { tag, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_line_without_id_keeps_trailing_space() {
        let record = InteractionRecord::Fill(FillRecord {
            tag_name: "TEXTAREA".into(),
            id: String::new(),
            name: "bio".into(),
            value: String::new(),
            input_type: "textarea".into(),
        });
        assert_eq!(record.overlay_line(), "輸入: TEXTAREA ");
    }

    #[test]
    fn test_tag_prefix_requires_colon() {
        assert!(ConsoleLine::parse("RECORDER_CLICKED").unwrap().is_none());
        assert!(ConsoleLine::parse("RECORDER_INITIALIZED ").unwrap().is_none());
    }
}

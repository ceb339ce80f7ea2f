/// Read-only view of an event target.
///
/// Implementations return empty strings for properties the element does not
/// have, so records degrade to empty fields instead of failing.
pub trait ElementView {
    fn tag_name(&self) -> String;
    fn id(&self) -> String;
    fn class_name(&self) -> String;
    /// `None` when the node has no text content at all.
    fn text_content(&self) -> Option<String>;
    fn name(&self) -> String;
    fn value(&self) -> String;
    fn input_type(&self) -> String;
    fn selected_index(&self) -> i32;
    fn selected_option_texts(&self) -> Vec<String>;
}

/// Shape of an event target, decided from its tag name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Clickable,
    TextEntry,
    Selection,
}

impl ElementKind {
    pub fn of(tag_name: &str) -> Self {
        match tag_name {
            "INPUT" | "TEXTAREA" => ElementKind::TextEntry,
            "SELECT" => ElementKind::Selection,
            _ => ElementKind::Clickable,
        }
    }
}

/// Keeps at most `limit` characters.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use recorder_common::{ElementView, LogChannel, OverlayConfig, OverlaySurface};

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub tag_name: String,
    pub id: String,
    pub class_name: String,
    pub text_content: Option<String>,
    pub name: String,
    pub value: String,
    pub input_type: String,
    pub selected_index: i32,
    pub selected_options: Vec<String>,
}

impl FakeElement {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            text_content: Some(String::new()),
            selected_index: -1,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = Some(text.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_type(mut self, input_type: &str) -> Self {
        self.input_type = input_type.to_string();
        self
    }
}

impl ElementView for FakeElement {
    fn tag_name(&self) -> String {
        self.tag_name.clone()
    }
    fn id(&self) -> String {
        self.id.clone()
    }
    fn class_name(&self) -> String {
        self.class_name.clone()
    }
    fn text_content(&self) -> Option<String> {
        self.text_content.clone()
    }
    fn name(&self) -> String {
        self.name.clone()
    }
    fn value(&self) -> String {
        self.value.clone()
    }
    fn input_type(&self) -> String {
        self.input_type.clone()
    }
    fn selected_index(&self) -> i32 {
        self.selected_index
    }
    fn selected_option_texts(&self) -> Vec<String> {
        self.selected_options.clone()
    }
}

/// In-memory overlay: `title` plus the entries below it.
#[derive(Debug, Default)]
pub struct MemorySurface {
    pub title: Option<String>,
    pub element_id: Option<String>,
    pub entries: Vec<String>,
    /// Shared so a test can detach the panel the way page script would.
    pub attached: Rc<Cell<bool>>,
    pub scrolls: usize,
    pub mounts: usize,
}

impl OverlaySurface for MemorySurface {
    fn mount(&mut self, config: &OverlayConfig) {
        self.title = Some(config.title.clone());
        self.element_id = Some(config.element_id.clone());
        self.attached.set(true);
        self.mounts += 1;
    }

    fn is_attached(&self) -> bool {
        self.attached.get()
    }

    fn push_entry(&mut self, text: &str) {
        self.entries.push(text.to_string());
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn remove_oldest_entry(&mut self) {
        if !self.entries.is_empty() {
            self.entries.remove(0);
        }
    }

    fn scroll_to_end(&mut self) {
        self.scrolls += 1;
    }

    fn unmount(&mut self) {
        self.attached.set(false);
    }
}

#[derive(Debug, Default)]
pub struct MemoryChannel {
    pub lines: Vec<String>,
}

impl LogChannel for MemoryChannel {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

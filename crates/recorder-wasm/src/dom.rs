use crate::console::warn;
use crate::style::{self, StyleRules};
use recorder_common::{ElementView, OverlayConfig, OverlaySurface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

/// Overlay panel backed by real DOM nodes.
pub struct DomOverlay {
    document: Document,
    panel: Option<HtmlElement>,
}

impl DomOverlay {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            panel: None,
        }
    }

    fn styled_div(&self, rules: StyleRules) -> Result<HtmlElement, JsValue> {
        let div: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        let css = div.style();
        for (property, value) in rules {
            css.set_property(property, value)?;
        }
        Ok(div)
    }

    fn build(&self, config: &OverlayConfig) -> Result<HtmlElement, JsValue> {
        let panel = self.styled_div(style::PANEL)?;
        panel.set_id(&config.element_id);

        let title = self.styled_div(style::TITLE)?;
        title.set_text_content(Some(&config.title));
        panel.append_child(&title)?;

        // Fall back to <html> when injected before <body> exists.
        let parent: Element = match self.document.body() {
            Some(body) => body.into(),
            None => self
                .document
                .document_element()
                .ok_or_else(|| JsValue::from_str("Document has no root element"))?,
        };
        parent.append_child(&panel)?;
        Ok(panel)
    }

    fn try_push(&self, panel: &HtmlElement, text: &str) -> Result<(), JsValue> {
        let entry = self.styled_div(style::ENTRY)?;
        entry.set_text_content(Some(text));
        panel.append_child(&entry)?;
        Ok(())
    }
}

impl OverlaySurface for DomOverlay {
    fn mount(&mut self, config: &OverlayConfig) {
        match self.build(config) {
            Ok(panel) => self.panel = Some(panel),
            Err(e) => warn(&format!("Recorder overlay unavailable: {:?}", e)),
        }
    }

    fn is_attached(&self) -> bool {
        self.panel.as_ref().is_some_and(|panel| panel.is_connected())
    }

    fn push_entry(&mut self, text: &str) {
        if let Some(panel) = &self.panel {
            if let Err(e) = self.try_push(panel, text) {
                warn(&format!("Recorder overlay entry failed: {:?}", e));
            }
        }
    }

    fn entry_count(&self) -> usize {
        self.panel
            .as_ref()
            .map(|panel| (panel.child_element_count() as usize).saturating_sub(1))
            .unwrap_or(0)
    }

    fn remove_oldest_entry(&mut self) {
        let oldest = self
            .panel
            .as_ref()
            .and_then(|panel| panel.first_element_child())
            .and_then(|title| title.next_element_sibling());
        if let Some(entry) = oldest {
            entry.remove();
        }
    }

    fn scroll_to_end(&mut self) {
        if let Some(panel) = &self.panel {
            panel.set_scroll_top(panel.scroll_height());
        }
    }

    fn unmount(&mut self) {
        if let Some(panel) = self.panel.take() {
            panel.remove();
        }
    }
}

enum FormControl<'a> {
    Input(&'a HtmlInputElement),
    TextArea(&'a HtmlTextAreaElement),
    Select(&'a HtmlSelectElement),
    Other,
}

/// [`ElementView`] over a live DOM element.
pub struct DomElement<'a> {
    element: &'a Element,
}

impl<'a> DomElement<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self { element }
    }

    fn control(&self) -> FormControl<'a> {
        let element: &'a Element = self.element;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            FormControl::Input(input)
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            FormControl::TextArea(area)
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            FormControl::Select(select)
        } else {
            FormControl::Other
        }
    }
}

impl ElementView for DomElement<'_> {
    fn tag_name(&self) -> String {
        self.element.tag_name()
    }

    fn id(&self) -> String {
        self.element.id()
    }

    fn class_name(&self) -> String {
        // `className` is an SVGAnimatedString on SVG elements.
        self.element.get_attribute("class").unwrap_or_default()
    }

    fn text_content(&self) -> Option<String> {
        self.element.text_content()
    }

    fn name(&self) -> String {
        match self.control() {
            FormControl::Input(input) => input.name(),
            FormControl::TextArea(area) => area.name(),
            FormControl::Select(select) => select.name(),
            FormControl::Other => self.element.get_attribute("name").unwrap_or_default(),
        }
    }

    fn value(&self) -> String {
        match self.control() {
            FormControl::Input(input) => input.value(),
            FormControl::TextArea(area) => area.value(),
            FormControl::Select(select) => select.value(),
            FormControl::Other => String::new(),
        }
    }

    fn input_type(&self) -> String {
        match self.control() {
            FormControl::Input(input) => input.type_(),
            FormControl::TextArea(area) => area.type_(),
            FormControl::Select(select) => select.type_(),
            FormControl::Other => String::new(),
        }
    }

    fn selected_index(&self) -> i32 {
        match self.control() {
            FormControl::Select(select) => select.selected_index(),
            _ => -1,
        }
    }

    fn selected_option_texts(&self) -> Vec<String> {
        let FormControl::Select(select) = self.control() else {
            return Vec::new();
        };
        let options = select.selected_options();
        (0..options.length())
            .filter_map(|i| options.item(i))
            .filter_map(|option| option.dyn_into::<HtmlOptionElement>().ok())
            .map(|option| option.text())
            .collect()
    }
}

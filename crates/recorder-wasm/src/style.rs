//! Inline styles for the overlay panel and its entries.

pub type StyleRules = &'static [(&'static str, &'static str)];

pub const PANEL: StyleRules = &[
    ("position", "fixed"),
    ("bottom", "0"),
    ("right", "0"),
    ("width", "300px"),
    ("max-height", "200px"),
    ("background-color", "rgba(0,0,0,0.7)"),
    ("color", "white"),
    ("padding", "10px"),
    ("font-family", "monospace"),
    ("font-size", "12px"),
    ("z-index", "10000"),
    ("overflow", "auto"),
    ("border-top-left-radius", "5px"),
];

pub const TITLE: StyleRules = &[
    ("font-weight", "bold"),
    ("border-bottom", "1px solid white"),
    ("margin-bottom", "5px"),
    ("padding-bottom", "5px"),
];

pub const ENTRY: StyleRules = &[
    ("border-bottom", "1px dotted #555"),
    ("padding-bottom", "3px"),
    ("margin-bottom", "3px"),
];

#[cfg(test)]
fn lookup(rules: StyleRules, property: &str) -> Option<&'static str> {
    rules
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_pinned_bottom_right_and_scrollable() {
        assert_eq!(lookup(PANEL, "position"), Some("fixed"));
        assert_eq!(lookup(PANEL, "bottom"), Some("0"));
        assert_eq!(lookup(PANEL, "right"), Some("0"));
        assert_eq!(lookup(PANEL, "overflow"), Some("auto"));
        assert_eq!(lookup(PANEL, "max-height"), Some("200px"));
    }

    #[test]
    fn test_property_names_are_css_not_camel_case() {
        for rules in [PANEL, TITLE, ENTRY] {
            for (name, _) in rules {
                assert!(
                    name.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                    "{}",
                    name
                );
            }
        }
    }
}

use recorder_common::protocol::{CLICK_TAG, FILL_TAG, INITIALIZED, SELECT_TAG};
use recorder_common::{
    ClickRecord, ConsoleLine, FillRecord, InteractionRecord, ProtocolError, SelectRecord,
};

#[test]
fn test_parse_sentinel() {
    assert_eq!(
        ConsoleLine::parse(INITIALIZED).unwrap(),
        Some(ConsoleLine::Initialized)
    );
    assert_eq!(ConsoleLine::Initialized.to_line().unwrap(), "RECORDER_INITIALIZED");
}

#[test]
fn test_parse_click_line() {
    let line = r#"RECORDER_CLICK:{"x":10,"y":20,"tagName":"A","id":"","className":"nav link","textContent":"Home"}"#;
    let parsed = ConsoleLine::parse(line).unwrap();
    assert_eq!(
        parsed,
        Some(ConsoleLine::Record(InteractionRecord::Click(ClickRecord {
            x: 10,
            y: 20,
            tag_name: "A".into(),
            id: String::new(),
            class_name: "nav link".into(),
            text_content: "Home".into(),
        })))
    );
}

#[test]
fn test_produced_lines_decode_to_same_record() {
    let records = vec![
        InteractionRecord::Fill(FillRecord {
            tag_name: "INPUT".into(),
            id: "pw".into(),
            name: "password".into(),
            value: "a\"b:c".into(),
            input_type: "password".into(),
        }),
        InteractionRecord::Select(SelectRecord {
            tag_name: "SELECT".into(),
            id: String::new(),
            name: "city".into(),
            value: "tpe".into(),
            selected_index: 2,
            selected_text: "台北".into(),
        }),
    ];

    for record in records {
        let line = record.to_console_line().unwrap();
        assert!(line.starts_with(record.tag()));
        assert_eq!(
            ConsoleLine::parse(&line).unwrap(),
            Some(ConsoleLine::Record(record))
        );
    }
}

#[test]
fn test_unrelated_lines_are_ignored() {
    for line in ["", "hello", "Download the React DevTools", "RECORDER", "RECORDER_CLICK"] {
        assert_eq!(ConsoleLine::parse(line).unwrap(), None, "line: {:?}", line);
    }
}

#[test]
fn test_tagged_line_with_bad_json_is_an_error() {
    let err = ConsoleLine::parse("RECORDER_FILL:{not json").unwrap_err();
    match err {
        ProtocolError::Malformed { tag, .. } => assert_eq!(tag, FILL_TAG),
        other => panic!("unexpected error: {:?}", other),
    }

    // Right JSON, wrong shape for the tag.
    let err = ConsoleLine::parse(r#"RECORDER_SELECT:{"x":1,"y":2}"#).unwrap_err();
    assert!(err.to_string().contains(SELECT_TAG));
}

#[test]
fn test_field_order_on_the_wire() {
    let line = InteractionRecord::Click(ClickRecord {
        x: 1,
        y: 2,
        tag_name: "B".into(),
        id: "i".into(),
        class_name: "c".into(),
        text_content: "t".into(),
    })
    .to_console_line()
    .unwrap();
    assert_eq!(
        line,
        format!(
            r#"{}:{{"x":1,"y":2,"tagName":"B","id":"i","className":"c","textContent":"t"}}"#,
            CLICK_TAG
        )
    );
}

use csv_builder_rs::{encode, ConfigError, CsvConfiguration, CsvStringWriter, CsvWriter, Preset};
use serde_json::json;

fn single_quote_lf() -> CsvConfiguration {
    CsvConfiguration::builder()
        .column_separator(';')
        .line_separator("\n")
        .use_single_quotes()
        .build()
}

#[test]
fn rfc_defaults_quote_every_string() {
    let conf = CsvConfiguration::default();
    let mut writer = CsvStringWriter::new(&conf);
    writer.append("a").append("b").newline().append("c");
    assert_eq!(writer.content(), "\"a\",\"b\"\r\n\"c\"");
}

#[test]
fn no_default_escape_writes_raw_strings() {
    let conf = CsvConfiguration::rfc4180_no_escape();
    let mut writer = CsvStringWriter::new(&conf);
    writer.append("a").append("b").newline().append("c");
    assert_eq!(writer.content(), "a,b\r\nc");
}

#[test]
fn single_quotes_double_embedded_quotes() {
    let conf = single_quote_lf();
    let mut writer = CsvStringWriter::new(&conf);
    writer.append("it's").newline();
    assert_eq!(writer.content(), "'it''s'");
}

#[test]
fn numbers_are_never_quoted() {
    let conf = CsvConfiguration::rfc4180();
    let mut writer = CsvStringWriter::new(&conf);
    writer
        .append_number(0)
        .append_number(3.14)
        .append_number(None::<f64>)
        .append_number(123_456_789u64);
    assert_eq!(writer.content(), "0,3.14,,123456789");
}

#[test]
fn consecutive_newlines_keep_blank_line() {
    let conf = CsvConfiguration::using_semicolon_and_lf();
    let mut writer = CsvStringWriter::new(&conf);
    writer.append_str("foo", false).newline().newline().append_str("bar", false);
    assert_eq!(writer.content(), "foo\n\nbar");
}

#[test]
fn unescaped_override_on_every_preset() {
    for conf in [
        CsvConfiguration::rfc4180(),
        CsvConfiguration::rfc4180_no_escape(),
        CsvConfiguration::using_semicolon(),
        CsvConfiguration::using_semicolon_and_lf(),
        single_quote_lf(),
    ] {
        let mut writer = CsvStringWriter::new(&conf);
        writer.append_str("foo,bar", false);
        assert_eq!(writer.content(), "foo,bar");
    }
}

#[test]
fn null_and_empty_string_are_equivalent() {
    let conf = CsvConfiguration::rfc4180();
    let mut with_null = CsvStringWriter::new(&conf);
    let mut with_empty = CsvStringWriter::new(&conf);
    with_null.append(None::<&str>).append("x");
    with_empty.append("").append("x");
    assert_eq!(with_null.content(), with_empty.content());
    assert_eq!(with_null.content(), ",\"x\"");
}

#[test]
fn content_can_be_read_repeatedly() {
    let conf = single_quote_lf();
    let mut writer = CsvStringWriter::new(&conf);
    writer.append_empty().append_empty().newline().append_empty().append_empty();
    let first = writer.content();
    assert_eq!(first, ";\n;");
    assert_eq!(writer.content(), first);
    assert_eq!(format!("{}", writer), first);
    assert_eq!(writer.into_content(), first);
}

#[test]
fn one_configuration_shared_by_many_writers() {
    let conf = CsvConfiguration::using_semicolon();
    let mut first = CsvStringWriter::new(&conf);
    let mut second = CsvStringWriter::new(&conf);
    first.append("1");
    second.append_number(2);
    assert_eq!(first.content(), "\"1\"");
    assert_eq!(second.content(), "2");
}

#[test]
fn configuration_is_shareable_across_threads() {
    let conf = std::sync::Arc::new(CsvConfiguration::rfc4180());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let conf = std::sync::Arc::clone(&conf);
            std::thread::spawn(move || {
                let mut writer = CsvStringWriter::new(&conf);
                writer.append_number(i).append("row");
                writer.content()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("{},\"row\"", i));
    }
}

#[test]
fn preset_by_name_drives_writer() {
    let conf = "semicolon-lf".parse::<Preset>().unwrap().configuration();
    let mut writer = CsvStringWriter::new(&conf);
    writer.append("a").append_number(1).newline().append("b");
    assert_eq!(writer.content(), "\"a\";1\n\"b\"");

    let err = "excel".parse::<Preset>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown configuration preset: excel");
}

#[test]
fn configuration_from_json_drives_writer() {
    let conf = CsvConfiguration::from_json(
        r#"{"column_separator": "|", "line_separator": "\n", "double_quotes": false}"#,
    )
    .unwrap();
    let mut writer = CsvStringWriter::new(&conf);
    writer.append("x|y").append_str("z", false);
    assert_eq!(writer.content(), "'x|y'|z");

    match CsvConfiguration::from_json(r#"{"escape_strings": "yes"}"#) {
        Err(ConfigError::InvalidJson(_)) => {}
        other => panic!("expected InvalidJson error, got {:?}", other),
    }
}

#[test]
fn configuration_survives_json_round_trip() {
    let conf = single_quote_lf();
    let text = serde_json::to_string(&conf).unwrap();
    assert_eq!(CsvConfiguration::from_json(&text).unwrap(), conf);
}

#[test]
fn encode_json_rows() {
    let data = json!([
        {"city": "Boston", "country": "United States", "popcount": 4628910},
        {"city": "Concord", "country": "United States", "popcount": 42695}
    ]);
    let result = encode(&data, &CsvConfiguration::rfc4180());
    assert_eq!(
        result,
        "\"Boston\",\"United States\",4628910\r\n\"Concord\",\"United States\",42695"
    );
}

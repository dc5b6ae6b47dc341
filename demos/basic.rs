use csv_builder_rs::{CsvConfiguration, CsvStringWriter, CsvWriter};

fn main() {
    println!("=== CSV Builder Examples ===\n");

    // Example 1: RFC 4180 defaults
    println!("1. RFC 4180 defaults:");
    let conf = CsvConfiguration::rfc4180();
    let mut writer = CsvStringWriter::new(&conf);
    writer
        .append("name")
        .append("age")
        .newline()
        .append("Alice")
        .append_number(30);
    println!("{}\n", writer);

    // Example 2: Embedded quotes and separators
    println!("2. Embedded quotes:");
    let mut writer = CsvStringWriter::new(&conf);
    writer.append("He said \"hi\", twice").append("plain");
    println!("{}\n", writer);

    // Example 3: Raw fields
    println!("3. Unescaped override:");
    let mut writer = CsvStringWriter::new(&conf);
    writer.append_str("foo,bar", false);
    println!("{}\n", writer);

    // Example 4: Numbers and nulls
    println!("4. Numbers and nulls:");
    let mut writer = CsvStringWriter::new(&conf);
    writer
        .append_number(0)
        .append_number(3.14)
        .append_number(None::<i64>)
        .append_number(123_456_789i64);
    println!("{}\n", writer);

    // Example 5: Single quotes, semicolons, LF
    println!("5. Custom configuration:");
    let conf = CsvConfiguration::builder()
        .column_separator(';')
        .line_separator("\n")
        .use_single_quotes()
        .build();
    let mut writer = CsvStringWriter::new(&conf);
    writer
        .append("it's")
        .append_empty()
        .newline()
        .newline()
        .append("after a blank line");
    println!("{}", writer.content());
}

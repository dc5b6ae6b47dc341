use csv_builder_rs::{encode, CsvConfiguration, Preset};
use serde_json::json;

fn main() {
    println!("=== Presets and JSON rows ===\n");

    let data = json!([
        {"id": 1, "name": "Widget", "price": 9.99, "discontinued": false},
        {"id": 2, "name": "Gadget \"Pro\"", "price": 14.5, "discontinued": null}
    ]);

    for name in ["rfc4180", "rfc4180-no-escape", "semicolon", "semicolon-lf"] {
        match name.parse::<Preset>() {
            Ok(preset) => {
                println!("{}:", preset.name());
                println!("{:?}\n", encode(&data, &preset.configuration()));
            }
            Err(err) => eprintln!("{}", err),
        }
    }

    let conf = CsvConfiguration::from_json(r#"{"column_separator": "\t", "escape_strings": false}"#);
    match conf {
        Ok(conf) => println!("tab separated:\n{}", encode(&data, &conf)),
        Err(err) => eprintln!("{}", err),
    }
}

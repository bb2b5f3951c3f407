use qadoc::{
    export::{export_to_csv, export_to_json, write_csv_file, write_json_file},
    QaRecord,
};

fn sample_records() -> Vec<QaRecord> {
    vec![
        QaRecord::new("What is Rust?", "A systems programming language."),
        QaRecord::new("Quote \"this\"", "Commas, everywhere, here"),
        QaRecord::new("¿Qué tal?", "Très bien — 日本語"),
    ]
}

#[test]
fn test_csv_header_and_row_count() {
    let records = sample_records();
    let csv = export_to_csv(&records).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), records.len() + 1);
    assert_eq!(lines[0], "Q,A");
}

#[test]
fn test_csv_quoting() {
    let csv = export_to_csv(&sample_records()).unwrap();

    assert!(csv.contains("What is Rust?,A systems programming language.\r\n"));
    assert!(csv.contains("\"Quote \"\"this\"\"\",\"Commas, everywhere, here\"\r\n"));
    assert!(csv.contains("¿Qué tal?,Très bien — 日本語\r\n"));
}

#[test]
fn test_csv_reads_back_with_csv_reader() {
    let records = sample_records();
    let csv = export_to_csv(&records).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["Q", "A"]);

    let rows: Vec<QaRecord> = reader.deserialize::<QaRecord>().map(|row| row.unwrap()).collect();
    assert_eq!(rows, records);
}

#[test]
fn test_json_round_trip_preserves_order_and_content() {
    let records = sample_records();
    let json = export_to_json(&records).unwrap();

    let parsed: Vec<QaRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), records.len());
    assert_eq!(parsed, records);
}

#[test]
fn test_json_layout() {
    let json = export_to_json(&[QaRecord::new("a", "ü")]).unwrap();
    assert_eq!(json, "[\n  {\n    \"Q\": \"a\",\n    \"A\": \"ü\"\n  }\n]");
}

#[test]
fn test_json_key_order() {
    let json = export_to_json(&sample_records()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    for object in value.as_array().unwrap() {
        let object = object.as_object().unwrap();
        assert_eq!(object.len(), 2);
    }
    assert!(json.find("\"Q\"").unwrap() < json.find("\"A\"").unwrap());
}

#[test]
fn test_file_writers_match_string_exports() {
    let dir = tempfile::tempdir().unwrap();
    let records = sample_records();

    let csv_path = dir.path().join("out.csv");
    let json_path = dir.path().join("out.json");
    write_csv_file(&records, &csv_path).unwrap();
    write_json_file(&records, &json_path).unwrap();

    let csv_bytes = std::fs::read(&csv_path).unwrap();
    assert!(!csv_bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
    assert_eq!(csv_bytes, export_to_csv(&records).unwrap().into_bytes());
    assert_eq!(
        std::fs::read_to_string(&json_path).unwrap(),
        export_to_json(&records).unwrap()
    );
}

use serial_search::domain::ports::RecordSource;
use serial_search::{ReportFormat, SearchEngine, SearchError, TomlConfig, TsvFileSource};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const NAMES: [&str; 10] = [
    "Lopez, Anthony",
    "Smith, Jane",
    "Nguyen, Bao",
    "O'Brien, Pat",
    "Garcia, Maria",
    "Kim, Ada",
    "Ivanova, Olga",
    "Okafor, Chidi",
    "Rossi, Luca",
    "Tanaka, Yui",
];

fn write_data_file(serials: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for (i, serial) in serials.iter().enumerate() {
        writeln!(
            file,
            "{:02}.10.2016\t{}\t{}",
            i % 28 + 1,
            NAMES[i % NAMES.len()],
            serial
        )
        .unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_end_to_end_duplicate_key() {
    let file = write_data_file(&["5", "3", "8", "3", "1", "9", "3", "2", "7", "4"]);
    let engine = SearchEngine::new(TsvFileSource::new(file.path()));

    let report = engine.run(10, 3).unwrap();

    assert_eq!(report.lines_processed, 10);
    assert_eq!(report.linear.steps, 10);
    assert_eq!(report.linear.matches, vec![2, 4, 7]);
    assert_eq!(report.binary.match_count, 3);

    let mut binary = report.binary.matches.clone();
    binary.sort_unstable();
    assert_eq!(binary, vec![2, 4, 7]);

    let text = report.render(ReportFormat::Text).unwrap();
    assert!(text.contains("Search Key (Serial Number): 3"));
    assert!(text.contains("Matching Original Line Numbers (Total 3 lines): 2 4 7"));
}

#[test]
fn test_end_to_end_absent_key() {
    let file = write_data_file(&["5", "3", "8", "3", "1", "9", "3", "2", "7", "4"]);
    let engine = SearchEngine::new(TsvFileSource::new(file.path()));

    let report = engine.run(10, 42).unwrap();

    assert_eq!(report.linear.steps, 10);
    assert!(report.linear.matches.is_empty());
    assert!(report.binary.matches.is_empty());
    assert!(report.binary.steps <= 5);

    let text = report.render_text();
    assert_eq!(
        text.matches("No lines with matching serial number found").count(),
        2
    );
}

#[test]
fn test_only_requested_lines_are_searched() {
    let mut serials = vec!["1"; 10];
    serials.push("77");
    let file = write_data_file(&serials);
    let engine = SearchEngine::new(TsvFileSource::new(file.path()));

    let report = engine.run(10, 77).unwrap();
    assert!(report.linear.matches.is_empty());
    assert!(report.binary.matches.is_empty());
}

#[test]
fn test_trailing_garbage_after_requested_lines_is_ignored() {
    let mut file = write_data_file(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
    writeln!(file, "not a data line").unwrap();
    file.flush().unwrap();

    let report = SearchEngine::new(TsvFileSource::new(file.path()))
        .run(10, 10)
        .unwrap();
    assert_eq!(report.linear.matches, vec![10]);
}

#[test]
fn test_short_file_fails_before_search() {
    let file = write_data_file(&["1", "2", "3"]);
    let err = SearchEngine::new(TsvFileSource::new(file.path()))
        .run(10, 1)
        .unwrap_err();

    assert!(matches!(
        err,
        SearchError::InsufficientLinesError {
            available: 3,
            required: 10
        }
    ));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_bad_serial_reports_line() {
    let file = write_data_file(&["1", "2", "3", "4", "x5", "6", "7", "8", "9", "10"]);
    let err = TsvFileSource::new(file.path()).load(10).unwrap_err();

    assert_eq!(err.to_string(), "Line 5 serial number x5 is not a valid integer");
}

#[test]
fn test_missing_file_is_file_open_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.txt");
    let err = SearchEngine::new(TsvFileSource::new(&path))
        .run(10, 1)
        .unwrap_err();

    assert!(matches!(err, SearchError::FileOpenError { .. }));
    assert!(err.user_friendly_message().contains("data.txt"));
}

#[test]
fn test_json_report_from_toml_settings() {
    let data = write_data_file(&["10", "20", "20", "30", "40", "50", "60", "70", "80", "90"]);

    let mut config_file = NamedTempFile::new().unwrap();
    writeln!(
        config_file,
        "[input]\npath = \"{}\"\nlines = 10\n\n[search]\nkey = 20\n\n[report]\nformat = \"json\"",
        data.path().display()
    )
    .unwrap();

    let config = TomlConfig::from_file(config_file.path()).unwrap();
    let path = config.input.path.clone().unwrap();
    let report = SearchEngine::new(TsvFileSource::new(path))
        .run(config.input.lines.unwrap(), config.search.key.unwrap())
        .unwrap();

    let json = report.render(config.report.format.unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["key"], 20);
    assert_eq!(value["linear"]["matches"], serde_json::json!([2, 3]));
    assert_eq!(value["binary"]["match_count"], 2);
}

fn write_raw_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn data_lines(serials: std::ops::RangeInclusive<i32>, ending: &str) -> String {
    serials
        .map(|s| format!("06.10.2016\tLopez, Anthony\t{}{}", s, ending))
        .collect()
}

#[test]
fn test_blank_line_at_line_n_fails_even_with_more_lines() {
    let file = write_raw_file(&format!("{}\nt\tLate, Entry\t777\n", data_lines(1..=9, "\n")));
    let err = SearchEngine::new(TsvFileSource::new(file.path()))
        .run(10, 777)
        .unwrap_err();

    assert!(matches!(err, SearchError::LineFormatError { line: 10, .. }));
    assert_eq!(err.to_string(), "Line 10 format error (missing time field)");
}

#[test]
fn test_blank_middle_line_reports_its_own_line() {
    let content = format!("{}\n{}", data_lines(1..=1, "\n"), data_lines(3..=12, "\n"));
    let file = write_raw_file(&content);
    let err = TsvFileSource::new(file.path()).load(10).unwrap_err();

    assert!(matches!(err, SearchError::LineFormatError { line: 2, .. }));
}

#[test]
fn test_trailing_blank_line_is_a_format_error() {
    let file = write_raw_file(&format!("{}\n", data_lines(1..=9, "\n")));
    let err = TsvFileSource::new(file.path()).load(10).unwrap_err();

    assert!(matches!(err, SearchError::LineFormatError { line: 10, .. }));
}

#[test]
fn test_crlf_file_keeps_line_numbers() {
    let file = write_raw_file(&data_lines(1..=12, "\r\n"));
    let report = SearchEngine::new(TsvFileSource::new(file.path()))
        .run(10, 7)
        .unwrap();

    assert_eq!(report.linear.matches, vec![7]);
    assert_eq!(report.binary.matches, vec![7]);
}

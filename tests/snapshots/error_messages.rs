use insta::assert_snapshot;

use jobtitle::error::JtError;

fn missing_columns() -> JtError {
    JtError::MissingColumns {
        missing: vec![
            "DIVISION".to_string(),
            "PSL".to_string(),
            "PERNR".to_string(),
            "JOB_CODE".to_string(),
        ],
        found: vec!["Column_1".to_string(), "Column_2".to_string()],
    }
}

#[test]
fn test_error_missing_columns() {
    assert_snapshot!(
        missing_columns().to_string(),
        @"Missing required columns: DIVISION, PSL, PERNR, JOB_CODE (found: Column_1, Column_2)"
    );
}

#[test]
fn test_error_missing_columns_suggestion() {
    assert_snapshot!(
        missing_columns().to_structured().suggestion,
        @"Could not identify column(s) DIVISION, PSL, PERNR, JOB_CODE. Rename the matching header(s) in the file; columns read were: Column_1, Column_2. Fewer than 4 columns usually means the wrong --mode"
    );
}

#[test]
fn test_error_decode() {
    let err = JtError::Decode {
        encoding: "utf-8".to_string(),
        offset: 31,
    };
    assert_snapshot!(
        err.to_string(),
        @"Input is not valid utf-8: invalid byte sequence at offset 31"
    );
    assert_snapshot!(
        err.to_structured().suggestion,
        @"The file is not utf-8. Retry with one of: --encoding latin-1, --encoding iso-8859-1, --encoding cp1252, --encoding windows-1252"
    );
}

#[test]
fn test_error_parse() {
    let err = JtError::Parse("line 3: expected 4 fields, saw 5".to_string());
    assert_snapshot!(err.to_string(), @"Malformed delimited text: line 3: expected 4 fields, saw 5");
}

#[test]
fn test_error_invalid_input() {
    let err = JtError::InvalidInput("no records to export".to_string());
    assert_snapshot!(err.to_string(), @"Invalid input: no records to export");
}

#[test]
fn test_error_empty_input() {
    assert_snapshot!(JtError::EmptyInput.to_string(), @"Input is empty");
}

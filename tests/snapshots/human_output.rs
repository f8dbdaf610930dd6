use chrono::{TimeZone, Utc};
use insta::assert_snapshot;

use jobtitle::cli::output::{HumanLayout, OutputFormat};
use jobtitle::ingest::{DelimiterMode, EncodingChoice, ingest};
use jobtitle::records::{DEFAULT_TIMESTAMP_FORMAT, records_from_table_at, write_csv};

const STAFF: &str = "\
PERNR,JOB_TEXT,DIVISION,PSL,JOB_CODE
105804,Senior Secretary,Ancillary Support,ESG,A409
105805,\"Lead, Field Ops\",Operations,Field,O210
105806,,Finance,Treasury,F100
";

#[test]
fn test_export_csv_layout() {
    let table = ingest(STAFF.as_bytes(), EncodingChoice::Utf8, DelimiterMode::Comma).unwrap();
    let created = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
    let conversion = records_from_table_at(&table, created).unwrap();

    let mut out = Vec::new();
    write_csv(&mut out, &conversion.records, DEFAULT_TIMESTAMP_FORMAT).unwrap();
    assert_snapshot!(String::from_utf8(out).unwrap(), @r#"
    Final Job Title,PERNR,JOB_CODE,Division,Subdivision,Job Title,Created
    Ancillary Support ESG Senior Officer,105804,A409,Ancillary Support,ESG,Senior Officer,2024-03-05 14:07
    Operations Field Manager,105805,O210,Operations,Field,Manager,2024-03-05 14:07
    Finance Treasury Specialist,105806,F100,Finance,Treasury,Specialist,2024-03-05 14:07
    "#);
}

#[test]
fn test_plain_layout() {
    let mut layout = HumanLayout::for_format(OutputFormat::Plain);
    layout
        .title("Import: staff.csv")
        .kv("Records", "3")
        .blank()
        .section("Levels")
        .bullet("Manager: 1");
    assert_snapshot!(layout.build(), @r"
    Import: staff.csv

    Records            3

    Levels
    ------
    - Manager: 1
    ");
}

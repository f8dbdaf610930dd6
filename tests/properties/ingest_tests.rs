use proptest::prelude::*;

use jobtitle::ingest::{HeaderSource, RawTable, read_whitespace, tokenize_line};

proptest! {
    #[test]
    fn unquoted_lines_split_like_split_whitespace(line in "[a-zA-Z0-9_\\- \t]{0,80}") {
        let expected: Vec<String> = line.split_whitespace().map(String::from).collect();
        prop_assert_eq!(tokenize_line(&line), expected);
    }

    #[test]
    fn tokens_are_never_empty(line in "[a-z \"\t]{0,60}") {
        for token in tokenize_line(&line) {
            prop_assert!(!token.is_empty());
        }
    }

    #[test]
    fn quoted_span_stays_one_token(
        before in "[a-z]{1,8}",
        inner in "[a-z]{1,8}( [a-z]{1,8}){1,3}",
        after in "[a-z]{1,8}",
    ) {
        let line = format!("{before} \"{inner}\" {after}");
        let tokens = tokenize_line(&line);
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(&tokens[1], &format!("\"{inner}\""));
    }

    #[test]
    fn pushed_rows_match_header_width(
        width in 1usize..10,
        values in prop::collection::vec("[a-z]{0,5}", 0..15),
    ) {
        let columns = (1..=width).map(|n| format!("Column_{n}")).collect();
        let mut table = RawTable::new(columns, HeaderSource::Generic);
        table.push_row(1, values.clone());
        let row = &table.rows()[0];
        prop_assert_eq!(row.values.len(), width);
        for (idx, value) in values.iter().take(width).enumerate() {
            prop_assert_eq!(&row.values[idx], value);
        }
    }

    #[test]
    fn whitespace_rows_are_accounted_for(
        rows in prop::collection::vec(prop::collection::vec("[a-z0-9]{1,6}", 0..9), 1..12),
    ) {
        let mut text = String::from("PERNR DIVISION PSL JOB_CODE\n");
        for row in &rows {
            text.push_str(&row.join(" "));
            text.push('\n');
        }
        let table = read_whitespace(&text).unwrap();
        let non_blank = rows.iter().filter(|row| !row.is_empty()).count();
        prop_assert_eq!(table.len() + table.dropped_rows(), non_blank);
        prop_assert!(table.rows().iter().all(|row| row.values.len() == 4));
    }
}

use foldguide_rs::Error;
use foldguide_rs::fastx::SequenceRecord;
use foldguide_rs::writer::{LINE_WIDTH, format_record, format_records, wrap_sequence};
use proptest::prelude::*;

fn record(name: &str, seq: &str) -> SequenceRecord {
    SequenceRecord::new(name, seq).expect("record should be valid")
}

#[test]
fn short_sequence_is_a_single_body_line() {
    let r = record("demo_protein", "MKFLKFSLLTAVLLSVVFAFSSCGDDDDTGYLPPSQAIQDLLKRMKV");
    assert_eq!(r.len(), 47);
    assert_eq!(
        format_record(&r),
        ">demo_protein\nMKFLKFSLLTAVLLSVVFAFSSCGDDDDTGYLPPSQAIQDLLKRMKV\n"
    );
}

#[test]
fn exact_multiple_of_width_has_no_short_tail() {
    let seq = "ACGT".repeat(40);
    let lines = wrap_sequence(&seq);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.len() == LINE_WIDTH));

    let text = format_record(&record("two", &seq));
    assert_eq!(text.lines().count(), 3);
    assert!(text.ends_with(&format!("{}\n", &seq[80..])));
}

#[test]
fn one_past_width_wraps_a_single_character() {
    let seq = "M".repeat(81);
    let lines = wrap_sequence(&seq);
    assert_eq!(lines, vec!["M".repeat(80).as_str(), "M"]);
}

#[test]
fn empty_sequence_is_header_only() {
    assert!(wrap_sequence("").is_empty());
    assert_eq!(format_record(&record("x", "")), ">x\n");
}

#[test]
fn header_keeps_name_verbatim() {
    let text = format_record(&record(" Mixed Case_01 ", "acgt"));
    assert_eq!(text, "> Mixed Case_01 \nacgt\n");
}

#[test]
fn non_alphabet_characters_pass_through() {
    let seq = "AC GT\t12*-x";
    assert_eq!(format_record(&record("raw", seq)), format!(">raw\n{seq}\n"));
}

#[test]
fn wrapping_never_splits_multibyte_characters() {
    let seq = "é".repeat(81);
    let lines = wrap_sequence(&seq);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].chars().count(), 80);
    assert_eq!(lines[1], "é");
}

#[test]
fn records_concatenate_in_order() {
    let records = vec![record("a", "AAAA"), record("b", ""), record("c", "CC")];
    assert_eq!(format_records(&records), ">a\nAAAA\n>b\n>c\nCC\n");
}

#[test]
fn empty_name_is_rejected() {
    assert!(matches!(SequenceRecord::new("", "ACGT"), Err(Error::EmptyName)));
}

proptest! {
    #[test]
    fn body_lines_follow_width_and_reconstruct_sequence(seq in "[A-Za-z*\\- ]{0,400}") {
        let lines = wrap_sequence(&seq);
        let len = seq.len();
        prop_assert_eq!(lines.len(), len.div_ceil(LINE_WIDTH));

        if let Some((last, full)) = lines.split_last() {
            prop_assert!(full.iter().all(|l| l.len() == LINE_WIDTH));
            let tail = if len % LINE_WIDTH == 0 { LINE_WIDTH } else { len % LINE_WIDTH };
            prop_assert_eq!(last.len(), tail);
        }
        prop_assert_eq!(lines.concat(), seq.clone());

        let text = format_record(&record("p", &seq));
        let mut expected = String::from(">p\n");
        for line in &lines {
            expected.push_str(line);
            expected.push('\n');
        }
        prop_assert_eq!(text, expected);
    }
}

pub mod error;
pub mod options;
pub mod record;
pub mod report;
pub mod stats;
pub mod vocabulary;

pub use error::VocabularyError;
pub use options::{DEFAULT_DATE, DEFAULT_MIN_TEXT_LENGTH, DatePolicy, IdSource, LoadOptions};
pub use record::{CandidateRecord, RecordId, ValidatedRecord};
pub use report::Report;
pub use stats::LoadStatistics;
pub use vocabulary::{
    LabelEncoding, LabelVocabulary, NEGATIVE_LABEL, NEUTRAL_LABEL, POSITIVE_LABEL,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment3_round_trips_names_and_codes() {
        let vocab = LabelVocabulary::sentiment3();
        assert_eq!(vocab.code_for("negative"), Some(0));
        assert_eq!(vocab.code_for("  Positive "), Some(2));
        assert_eq!(vocab.name_for(1), Some("neutral"));
        assert!(vocab.is_acceptable(2));
        assert!(!vocab.is_acceptable(3));
    }

    #[test]
    fn vocabularies_do_not_leak_into_each_other() {
        let binary = LabelVocabulary::polarity2();
        assert_eq!(binary.code_for("neutral"), None);
        assert_eq!(binary.name_for(2), None);
        assert!(!binary.is_acceptable(2));
        assert_eq!(binary.acceptable_codes().len(), 2);
    }

    #[test]
    fn from_pairs_rejects_duplicates() {
        let dup_name = LabelVocabulary::from_pairs(
            "broken",
            LabelEncoding::Named,
            &[("good", 0), ("Good", 1)],
        );
        assert!(matches!(dup_name, Err(VocabularyError::DuplicateName(_))));

        let dup_code = LabelVocabulary::from_pairs(
            "broken",
            LabelEncoding::Named,
            &[("good", 0), ("bad", 0)],
        );
        assert!(matches!(dup_code, Err(VocabularyError::DuplicateCode(0))));
    }

    #[test]
    fn record_id_displays_underlying_value() {
        assert_eq!(RecordId::Ordinal(7).to_string(), "7");
        assert_eq!(RecordId::Column("msg-42".to_string()).to_string(), "msg-42");
    }

    #[test]
    fn report_serializes() {
        let report = Report {
            total_messages: 2,
            distribution: [("positive".to_string(), 2)].into_iter().collect(),
            reputation_index: 1.0,
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: Report = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }

    #[test]
    fn preset_options_match_source_variants() {
        let csv = LoadOptions::csv_sentiment();
        assert_eq!(csv.min_text_length, DEFAULT_MIN_TEXT_LENGTH);
        assert_eq!(csv.id_source, IdSource::Column);
        assert_eq!(csv.date_policy, DatePolicy::Unset);
        assert_eq!(csv.vocabulary.encoding(), LabelEncoding::Named);

        let sheet = LoadOptions::sheet_polarity();
        assert_eq!(sheet.id_source, IdSource::Ordinal);
        assert_eq!(sheet.date_policy, DatePolicy::FixedDefault);
        assert_eq!(sheet.vocabulary.encoding(), LabelEncoding::Numeric);
    }
}

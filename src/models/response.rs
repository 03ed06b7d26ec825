use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single answer value.
///
/// Single-choice questions submit one option code; the multi-choice question
/// submits the set of checked codes; the ranked-choice question submits the
/// three codes in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Choice(String),
    Choices(Vec<String>),
}

/// Answers keyed by question key (`q1`..`q16`).
pub type AnswerSheet = BTreeMap<String, Answer>;

/// One submitted survey response.
///
/// The timestamp is assigned by the server at submission time and serialized
/// as an RFC 3339 UTC instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub username: String,
    pub timestamp: DateTime<Utc>,
    pub answers: AnswerSheet,
}

impl SurveyResponse {
    /// Build a response stamped with the current time.
    pub fn new(username: impl Into<String>, answers: AnswerSheet) -> Self {
        Self {
            username: username.into(),
            timestamp: Utc::now(),
            answers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_serialization_shapes() {
        let single = Answer::Choice("A".to_string());
        assert_eq!(serde_json::to_string(&single).unwrap(), r#""A""#);

        let multi = Answer::Choices(vec!["A".to_string(), "C".to_string()]);
        assert_eq!(serde_json::to_string(&multi).unwrap(), r#"["A","C"]"#);
    }

    #[test]
    fn test_answer_sheet_round_trip() {
        let json = r#"{"q1":"B","q15":["A","I"],"q16":["C","A","D"]}"#;
        let sheet: AnswerSheet = serde_json::from_str(json).unwrap();

        assert_eq!(sheet["q1"], Answer::Choice("B".to_string()));
        assert_eq!(
            sheet["q16"],
            Answer::Choices(vec!["C".to_string(), "A".to_string(), "D".to_string()])
        );
        assert_eq!(serde_json::to_string(&sheet).unwrap(), json);
    }

    #[test]
    fn test_response_timestamp_is_rfc3339() {
        let response = SurveyResponse::new("alice-1234", AnswerSheet::new());
        let json = serde_json::to_value(&response).unwrap();
        let ts = json["timestamp"].as_str().unwrap();

        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }
}

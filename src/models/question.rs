//! Trivia question and snapshot types
//!
//! This module contains the data structures for a fetched batch of Open
//! Trivia DB questions and the payload parsing that produces them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::TriviaError;

/// The fields of an API question that the breakdowns read.
///
/// `category` is kept raw (HTML-entity encoded); decoding happens only when
/// a label is displayed. Other API fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Question {
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub difficulty: String,
}

impl Question {
    #[cfg(test)]
    pub fn new(category: &str, difficulty: &str) -> Self {
        Self {
            category: category.to_string(),
            difficulty: difficulty.to_string(),
        }
    }
}

/// Read a string field; any non-string value becomes `""`.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// The immutable list of questions fetched for this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    questions: Vec<Question>,
}

impl Snapshot {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Parse an API payload of the form `{"results": [...]}`.
    ///
    /// The payload shape is strict: it must be an object whose `results`
    /// field is an array. Individual items are read leniently: missing or
    /// non-string fields become empty strings, and an item that is not an
    /// object becomes an empty question.
    pub fn from_payload(payload: &Value) -> Result<Self, TriviaError> {
        let obj = payload.as_object().ok_or(TriviaError::NotAnObject)?;

        if let Some(code) = obj.get("response_code").and_then(|v| v.as_i64()) {
            debug!(response_code = code, "payload response code");
        }

        let results = obj
            .get("results")
            .ok_or(TriviaError::MissingResults)?
            .as_array()
            .ok_or(TriviaError::ResultsNotArray)?;

        let questions = results
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Question::deserialize(item).unwrap_or_else(|e| {
                    warn!(index, error = %e, "unreadable question in payload");
                    Question::default()
                })
            })
            .collect();

        Ok(Self::new(questions))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakdown::category_breakdown;
    use serde_json::json;

    #[test]
    fn test_from_payload_success() {
        let payload = json!({
            "response_code": 0,
            "results": [
                {
                    "type": "multiple",
                    "difficulty": "easy",
                    "category": "Entertainment: Music",
                    "question": "Which band released &quot;Abbey Road&quot;?",
                    "correct_answer": "The Beatles",
                    "incorrect_answers": ["Queen", "ABBA", "Oasis"]
                },
                {
                    "type": "boolean",
                    "difficulty": "hard",
                    "category": "Art &amp; Design",
                    "question": "Is red a primary colour?",
                    "correct_answer": "True",
                    "incorrect_answers": ["False"]
                }
            ]
        });

        let snapshot = Snapshot::from_payload(&payload).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.questions()[0].category, "Entertainment: Music");
        assert_eq!(snapshot.questions()[0].difficulty, "easy");
        // Raw text is preserved; decoding is a display concern.
        assert_eq!(snapshot.questions()[1].category, "Art &amp; Design");
    }

    #[test]
    fn test_from_payload_empty_results() {
        let snapshot = Snapshot::from_payload(&json!({ "results": [] })).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_from_payload_missing_results() {
        let result = Snapshot::from_payload(&json!({}));
        assert!(matches!(result, Err(TriviaError::MissingResults)));
    }

    #[test]
    fn test_from_payload_results_not_array() {
        let result = Snapshot::from_payload(&json!({ "results": "nope" }));
        assert!(matches!(result, Err(TriviaError::ResultsNotArray)));

        let result = Snapshot::from_payload(&json!({ "results": null }));
        assert!(matches!(result, Err(TriviaError::ResultsNotArray)));
    }

    #[test]
    fn test_from_payload_not_an_object() {
        let result = Snapshot::from_payload(&json!([1, 2, 3]));
        assert!(matches!(result, Err(TriviaError::NotAnObject)));
    }

    #[test]
    fn test_from_payload_missing_fields_default_to_empty() {
        let payload = json!({ "results": [ { "category": "Music" } ] });
        let snapshot = Snapshot::from_payload(&payload).unwrap();
        assert_eq!(snapshot.questions()[0], Question::new("Music", ""));
    }

    #[test]
    fn test_from_payload_non_object_item_becomes_empty_question() {
        let payload = json!({
            "results": [
                42,
                "Music",
                { "category": "Music", "difficulty": "easy" }
            ]
        });
        let snapshot = Snapshot::from_payload(&payload).unwrap();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.questions()[0], Question::default());
        assert_eq!(snapshot.questions()[1], Question::default());
        assert_eq!(snapshot.questions()[2], Question::new("Music", "easy"));
    }

    #[test]
    fn test_from_payload_bad_field_keeps_other_fields() {
        let payload = json!({
            "results": [
                { "category": "Music", "difficulty": null, "question": "q" },
                { "category": 7, "difficulty": "easy" },
                { "category": "History", "difficulty": ["hard"] }
            ]
        });
        let snapshot = Snapshot::from_payload(&payload).unwrap();
        assert_eq!(snapshot.questions()[0], Question::new("Music", ""));
        assert_eq!(snapshot.questions()[1], Question::new("", "easy"));
        assert_eq!(snapshot.questions()[2], Question::new("History", ""));

        let categories = category_breakdown(&snapshot);
        assert_eq!(categories[0].label, "Music");
        assert_eq!(categories[0].count, 1);
    }
}

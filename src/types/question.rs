use serde::{Deserialize, Serialize};

/// One searchable record returned by the question service.
///
/// The service owns the shape; everything here mirrors its JSON. Records the
/// service cannot type precisely still decode (see [`QuestionKind::Other`]),
/// so a single odd record never sinks a whole result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Type-specific payload of a question, discriminated by the wire `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuestionKind {
    /// Multiple choice: a list of options, each flagged correct or not.
    #[serde(rename = "MCQ")]
    Mcq {
        #[serde(default)]
        options: Vec<ChoiceOption>,
    },
    /// Anagram: shuffled blocks plus the assembled solution string.
    #[serde(rename = "ANAGRAM")]
    Anagram {
        #[serde(default)]
        blocks: Vec<AnagramBlock>,
        #[serde(default)]
        solution: String,
    },
    /// Any tag this client does not recognize. Rendered title-only.
    #[serde(other)]
    Other,
}

impl QuestionKind {
    /// Short label shown in the results table.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Mcq { .. } => "MCQ",
            QuestionKind::Anagram { .. } => "ANAGRAM",
            QuestionKind::Other => "OTHER",
        }
    }
}

/// A single answer option of an MCQ question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub text: String,
    #[serde(default)]
    pub is_correct_answer: bool,
}

/// A single block of an anagram question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnagramBlock {
    pub text: String,
    #[serde(default)]
    pub is_answer: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mcq_record_decodes_with_options() {
        let json = r#"{
            "_id": "q1",
            "title": "Capital of France?",
            "type": "MCQ",
            "options": [
                {"text": "Paris", "isCorrectAnswer": true},
                {"text": "Lyon", "isCorrectAnswer": false}
            ]
        }"#;

        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.id, "q1");
        let QuestionKind::Mcq { options } = &question.kind else {
            panic!("expected MCQ kind");
        };
        assert_eq!(options.len(), 2);
        assert!(options[0].is_correct_answer);
        assert!(!options[1].is_correct_answer);
    }

    #[test]
    fn anagram_record_decodes_with_blocks_and_solution() {
        let json = r#"{
            "id": "q2",
            "title": "Rearrange the letters",
            "type": "ANAGRAM",
            "blocks": [{"text": "cat", "isAnswer": true}],
            "solution": "cat"
        }"#;

        let question: Question = serde_json::from_str(json).unwrap();
        let QuestionKind::Anagram { blocks, solution } = &question.kind else {
            panic!("expected anagram kind");
        };
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_answer);
        assert_eq!(solution, "cat");
    }

    #[test]
    fn unknown_type_decodes_to_other() {
        let json = r#"{"id": "q3", "title": "Read along", "type": "READ_ALONG"}"#;

        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.kind, QuestionKind::Other);
        assert_eq!(question.kind.label(), "OTHER");
    }

    #[test]
    fn mcq_without_options_decodes_to_empty_list() {
        let json = r#"{"id": "q4", "title": "Sparse record", "type": "MCQ"}"#;

        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(
            question.kind,
            QuestionKind::Mcq {
                options: Vec::new()
            }
        );
    }

    #[test]
    fn question_round_trips_through_json() {
        let question = Question {
            id: "q5".into(),
            title: "Capital of France?".into(),
            kind: QuestionKind::Mcq {
                options: vec![ChoiceOption {
                    text: "Paris".into(),
                    is_correct_answer: true,
                }],
            },
        };

        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["type"], "MCQ");
        assert_eq!(value["options"][0]["isCorrectAnswer"], true);
    }
}

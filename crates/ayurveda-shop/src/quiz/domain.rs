use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dosha::Dosha;

/// Identifier wrapper for quiz questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quiz prompt with one response bound to each dosha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub question: String,
    pub vata_option: String,
    pub pitta_option: String,
    pub kapha_option: String,
}

impl QuizQuestion {
    pub fn option(&self, dosha: Dosha) -> &str {
        match dosha {
            Dosha::Vata => &self.vata_option,
            Dosha::Pitta => &self.pitta_option,
            Dosha::Kapha => &self.kapha_option,
        }
    }

    pub fn options(&self) -> [(Dosha, &str); 3] {
        Dosha::ordered().map(|dosha| (dosha, self.option(dosha)))
    }
}

/// Question bank entry before the store assigns an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuizQuestion {
    pub question: String,
    pub vata_option: String,
    pub pitta_option: String,
    pub kapha_option: String,
}

impl NewQuizQuestion {
    pub fn into_question(self, id: QuestionId) -> QuizQuestion {
        QuizQuestion {
            id,
            question: self.question,
            vata_option: self.vata_option,
            pitta_option: self.pitta_option,
            kapha_option: self.kapha_option,
        }
    }
}

/// Answers submitted for one quiz attempt, keyed by question id.
///
/// Tags are kept verbatim. Question ids are not checked against the question bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an answer set from a decoded JSON value. Objects are keyed by question id,
    /// arrays by element index. Any other value yields `None`. Non-string answers keep
    /// their JSON text and never match a tag.
    pub fn from_json(value: &Value) -> Option<Self> {
        let answers = match value {
            Value::Object(object) => object
                .iter()
                .map(|(question, answer)| (question.clone(), answer_tag(answer)))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, answer)| (index.to_string(), answer_tag(answer)))
                .collect(),
            _ => return None,
        };
        Some(Self { answers })
    }

    pub fn with_answer(mut self, question: impl Into<String>, tag: impl Into<String>) -> Self {
        self.insert(question, tag);
        self
    }

    pub fn insert(&mut self, question: impl Into<String>, tag: impl Into<String>) {
        self.answers.insert(question.into(), tag.into());
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.answers.values().map(String::as_str)
    }
}

fn answer_tag(answer: &Value) -> String {
    match answer {
        Value::String(tag) => tag.clone(),
        other => other.to_string(),
    }
}

impl<Q, T> FromIterator<(Q, T)> for AnswerSet
where
    Q: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (Q, T)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (question, tag) in iter {
            set.insert(question, tag);
        }
        set
    }
}

/// Per-dosha answer counts produced by a single scoring call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoshaTally {
    pub vata_count: u32,
    pub pitta_count: u32,
    pub kapha_count: u32,
}

impl DoshaTally {
    pub const fn new(vata_count: u32, pitta_count: u32, kapha_count: u32) -> Self {
        Self {
            vata_count,
            pitta_count,
            kapha_count,
        }
    }

    pub fn record(&mut self, dosha: Dosha) {
        match dosha {
            Dosha::Vata => self.vata_count += 1,
            Dosha::Pitta => self.pitta_count += 1,
            Dosha::Kapha => self.kapha_count += 1,
        }
    }

    pub const fn count(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata_count,
            Dosha::Pitta => self.pitta_count,
            Dosha::Kapha => self.kapha_count,
        }
    }

    pub const fn total(&self) -> u32 {
        self.vata_count + self.pitta_count + self.kapha_count
    }

    /// Priority cascade: vata, then pitta, then kapha. Ties go to the earlier dosha,
    /// so an empty tally is vata.
    pub const fn dominant(&self) -> Dosha {
        let (v, p, k) = (self.vata_count, self.pitta_count, self.kapha_count);
        if v >= p && v >= k {
            Dosha::Vata
        } else if p >= v && p >= k {
            Dosha::Pitta
        } else {
            Dosha::Kapha
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dominant_follows_priority_cascade() {
        let cases = [
            ((1, 1, 1), Dosha::Vata),
            ((0, 1, 1), Dosha::Pitta),
            ((2, 2, 1), Dosha::Vata),
            ((1, 2, 2), Dosha::Pitta),
            ((0, 0, 1), Dosha::Kapha),
            ((0, 0, 0), Dosha::Vata),
            ((2, 1, 2), Dosha::Vata),
            ((1, 3, 2), Dosha::Pitta),
            ((1, 2, 3), Dosha::Kapha),
        ];

        for ((v, p, k), expected) in cases {
            assert_eq!(
                DoshaTally::new(v, p, k).dominant(),
                expected,
                "tally ({v},{p},{k})"
            );
        }
    }

    #[test]
    fn answer_set_accepts_objects_and_arrays_only() {
        assert!(AnswerSet::from_json(&json!({ "1": "vata" })).is_some());
        assert!(AnswerSet::from_json(&json!("vata")).is_none());
        assert!(AnswerSet::from_json(&json!(3)).is_none());
        assert!(AnswerSet::from_json(&json!(true)).is_none());
        assert!(AnswerSet::from_json(&Value::Null).is_none());
    }

    #[test]
    fn array_answers_are_keyed_by_index() {
        let set = AnswerSet::from_json(&json!(["pitta", "pitta", "vata"])).expect("array accepted");
        assert_eq!(set.len(), 3);
        assert_eq!(
            set,
            AnswerSet::new()
                .with_answer("0", "pitta")
                .with_answer("1", "pitta")
                .with_answer("2", "vata")
        );
    }

    #[test]
    fn non_string_answers_keep_json_text() {
        let set = AnswerSet::from_json(&json!({ "1": 7, "2": null, "3": "kapha" }))
            .expect("object accepted");
        let tags: Vec<_> = set.tags().collect();
        assert_eq!(tags, vec!["7", "null", "kapha"]);
    }

    #[test]
    fn question_options_are_bound_to_their_dosha() {
        let question = QuizQuestion {
            id: QuestionId(1),
            question: "My skin tends to be:".to_string(),
            vata_option: "Dry".to_string(),
            pitta_option: "Warm".to_string(),
            kapha_option: "Thick".to_string(),
        };
        assert_eq!(
            question.options(),
            [
                (Dosha::Vata, "Dry"),
                (Dosha::Pitta, "Warm"),
                (Dosha::Kapha, "Thick")
            ]
        );

        let value = serde_json::to_value(&question).expect("serializes");
        assert_eq!(value["pittaOption"], "Warm");
    }
}

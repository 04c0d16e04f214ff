// src/models/question.rs

use std::{borrow::Cow, fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::AppError;

/// Number of distractors a multi-choice question carries.
pub const WRONG_ANSWER_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Math,
    Football,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Math, Category::Football];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Math => "math",
            Category::Football => "football",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    OpenEnded,
    MultiChoice,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::OpenEnded, QuestionType::MultiChoice];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::OpenEnded => "open-ended",
            QuestionType::MultiChoice => "multi-choice",
        }
    }
}

/// Difficulty level. Serialized as the bare integer 1, 2 or 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            other => Err(format!("difficulty must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.value()
    }
}

/// Error returned when a query-string value names no known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant {
                kind: "category",
                value: s.to_string(),
            })
    }
}

impl FromStr for QuestionType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant {
                kind: "question type",
                value: s.to_string(),
            })
    }
}

/// A single trivia question as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,

    pub question_text: String,

    pub category: Category,

    /// `type` is a reserved keyword in Rust.
    #[serde(rename = "type")]
    pub question_type: QuestionType,

    pub correct_answer: String,

    /// Exactly two entries for multi-choice questions, absent otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrong_answers: Option<Vec<String>>,

    pub difficulty: Difficulty,

    /// Creation date.
    pub date: DateTime<Utc>,
}

impl Question {
    pub fn from_draft(id: i64, draft: QuestionDraft, date: DateTime<Utc>) -> Self {
        Self {
            id,
            question_text: draft.question_text,
            category: draft.category,
            question_type: draft.question_type,
            correct_answer: draft.correct_answer,
            wrong_answers: draft.wrong_answers,
            difficulty: draft.difficulty,
            date,
        }
    }
}

/// A validated, normalized question that has not been given an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDraft {
    pub question_text: String,
    pub category: Category,
    pub question_type: QuestionType,
    pub correct_answer: String,
    pub wrong_answers: Option<Vec<String>>,
    pub difficulty: Difficulty,
    /// `None` lets the store decide (now on insert, the stored date on update).
    pub date: Option<DateTime<Utc>>,
}

/// DTO for the add and edit forms.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_wrong_answers))]
pub struct QuestionForm {
    /// Defaults to empty so a missing field gets the same message as a blank one.
    #[serde(default)]
    #[validate(custom(function = validate_required_text, message = "Question text is required"), length(max = 1000))]
    pub question_text: String,

    pub category: Category,

    #[serde(rename = "type")]
    pub question_type: QuestionType,

    #[serde(default)]
    #[validate(custom(function = validate_required_text, message = "Correct answer is required"), length(max = 500))]
    pub correct_answer: String,

    /// Up to two answer slots; blank slots are ignored.
    #[serde(default)]
    pub wrong_answers: Vec<String>,

    pub difficulty: Difficulty,

    /// Calendar date picked in the form, if any.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

fn validate_required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn validate_wrong_answers(form: &QuestionForm) -> Result<(), ValidationError> {
    if form.question_type != QuestionType::MultiChoice {
        return Ok(());
    }

    let filled: Vec<&str> = form
        .wrong_answers
        .iter()
        .map(|answer| answer.trim())
        .filter(|answer| !answer.is_empty())
        .collect();

    if filled.len() != WRONG_ANSWER_COUNT {
        return Err(ValidationError::new("wrong_answers_count").with_message(Cow::Borrowed(
            "2 wrong answers are required for multiple-choice questions",
        )));
    }

    for answer in filled {
        if answer.chars().count() > 500 {
            return Err(ValidationError::new("wrong_answer_too_long")
                .with_message(Cow::Borrowed("Wrong answers must be at most 500 characters")));
        }
    }
    Ok(())
}

impl QuestionForm {
    /// Validates the form and turns it into a draft.
    ///
    /// Text fields are trimmed, blank wrong-answer slots are dropped, and
    /// open-ended questions lose their wrong answers entirely.
    pub fn into_draft(self) -> Result<QuestionDraft, AppError> {
        self.validate()?;

        let wrong_answers = match self.question_type {
            QuestionType::MultiChoice => Some(
                self.wrong_answers
                    .iter()
                    .map(|answer| answer.trim())
                    .filter(|answer| !answer.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            QuestionType::OpenEnded => None,
        };

        Ok(QuestionDraft {
            question_text: self.question_text.trim().to_string(),
            category: self.category,
            question_type: self.question_type,
            correct_answer: self.correct_answer.trim().to_string(),
            wrong_answers,
            difficulty: self.difficulty,
            date: self
                .date
                .and_then(|day| day.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(question_type: QuestionType, wrong_answers: &[&str]) -> QuestionForm {
        QuestionForm {
            question_text: "  What is 2 + 2?  ".to_string(),
            category: Category::Math,
            question_type,
            correct_answer: " 4 ".to_string(),
            wrong_answers: wrong_answers.iter().map(|s| s.to_string()).collect(),
            difficulty: Difficulty::Easy,
            date: None,
        }
    }

    #[test]
    fn multi_choice_form_keeps_two_trimmed_wrong_answers() {
        let draft = form(QuestionType::MultiChoice, &[" 3 ", "", "5"])
            .into_draft()
            .unwrap();

        assert_eq!(draft.question_text, "What is 2 + 2?");
        assert_eq!(draft.correct_answer, "4");
        assert_eq!(draft.wrong_answers, Some(vec!["3".to_string(), "5".to_string()]));
    }

    #[test]
    fn open_ended_form_drops_wrong_answers() {
        let draft = form(QuestionType::OpenEnded, &["3", "5"]).into_draft().unwrap();
        assert_eq!(draft.wrong_answers, None);
    }

    #[test]
    fn multi_choice_form_needs_exactly_two_wrong_answers() {
        let err = form(QuestionType::MultiChoice, &["3", "  "])
            .into_draft()
            .unwrap_err();

        match err {
            AppError::BadRequest(msg) => {
                assert!(msg.contains("2 wrong answers are required"), "{}", msg)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn multi_choice_form_rejects_three_wrong_answers() {
        let err = form(QuestionType::MultiChoice, &["3", "5", "6"])
            .into_draft()
            .unwrap_err();

        match err {
            AppError::BadRequest(msg) => {
                assert!(msg.contains("2 wrong answers are required"), "{}", msg)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn wrong_answer_limit_counts_characters() {
        let accented = "é".repeat(500);
        let draft = form(QuestionType::MultiChoice, &[accented.as_str(), "5"])
            .into_draft()
            .unwrap();
        assert_eq!(draft.wrong_answers.map(|w| w[0].chars().count()), Some(500));

        let too_long = "é".repeat(501);
        let err = form(QuestionType::MultiChoice, &[too_long.as_str(), "5"])
            .into_draft()
            .unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("at most 500 characters"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn missing_text_fields_get_required_messages() {
        let form: QuestionForm = serde_json::from_str(
            r#"{"category":"math","type":"open-ended","difficulty":1}"#,
        )
        .unwrap();

        match form.into_draft().unwrap_err() {
            AppError::BadRequest(msg) => assert_eq!(
                msg,
                "Correct answer is required; Question text is required"
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn blank_question_text_is_rejected() {
        let mut blank = form(QuestionType::OpenEnded, &[]);
        blank.question_text = "   ".to_string();
        blank.correct_answer = String::new();

        let err = blank.into_draft().unwrap_err();
        match err {
            AppError::BadRequest(msg) => {
                assert!(msg.contains("Question text is required"), "{}", msg);
                assert!(msg.contains("Correct answer is required"), "{}", msg);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn calendar_date_becomes_midnight_utc() {
        let mut dated = form(QuestionType::OpenEnded, &[]);
        dated.date = NaiveDate::from_ymd_opt(2024, 3, 1);

        let draft = dated.into_draft().unwrap();
        assert_eq!(
            draft.date.map(|d| d.to_rfc3339()),
            Some("2024-03-01T00:00:00+00:00".to_string())
        );
    }

    #[test]
    fn difficulty_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "3");
        assert!(serde_json::from_str::<Difficulty>("4").is_err());
    }

    #[test]
    fn enums_parse_from_query_values() {
        assert_eq!("Football".parse::<Category>(), Ok(Category::Football));
        assert_eq!("multi-choice".parse::<QuestionType>(), Ok(QuestionType::MultiChoice));
        assert!("history".parse::<Category>().is_err());
    }
}

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod bank;

pub use bank::{ImportSummary, QuestionBank};


/// Opaque identifier assigned by the storage collaborator.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct QuestionId(pub u64);

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    SingleChoice,
    MultipleChoice,
}

impl QuestionType {
    /// Parses the type column of an import row. The spaced spellings
    /// `"single choice"` and `"multiple choice"` map case-insensitively to
    /// their canonical names; anything else must already be the exact
    /// canonical name.
    pub fn from_csv(raw: &str) -> Option<QuestionType> {
        let trimmed = raw.trim();
        let lowered = trimmed.to_lowercase();
        let mapped = match lowered.as_str() {
            "single choice" => "single_choice",
            "multiple choice" => "multiple_choice",
            _ => trimmed,
        };
        match mapped {
            "single_choice" => Some(QuestionType::SingleChoice),
            "multiple_choice" => Some(QuestionType::MultipleChoice),
            _ => None,
        }
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum CandidateError {
    #[error("question text is empty")]
    EmptyText,
    #[error("question has no answer options")]
    NoAnswers,
    #[error("correct answer \"{0}\" is not one of the options")]
    UnknownCorrectAnswer(String),
    #[error("single choice question has {0} correct answers")]
    TooManyCorrectAnswers(usize),
}

/// A question record that has not been persisted yet. Produced by the
/// ingestion pipeline or the admin editor; storage assigns the id.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Candidate {
    pub text: String,
    pub question_type: QuestionType,
    pub all_answers: Vec<String>,
    pub correct_answers: Vec<String>,
    pub category: String,
}

impl Candidate {
    /// Validation shared by the ingestion pipeline (row rejection) and the
    /// editor path. Duplicate answer options are permitted but warned
    /// about, since options are matched by their exact text.
    pub fn check(&self) -> Result<(), CandidateError> {
        if self.text.is_empty() {
            return Err(CandidateError::EmptyText);
        }
        if self.all_answers.is_empty() {
            return Err(CandidateError::NoAnswers);
        }
        if let Some(unknown) = self
            .correct_answers
            .iter()
            .find(|answer| !self.all_answers.contains(answer))
        {
            return Err(CandidateError::UnknownCorrectAnswer(unknown.clone()));
        }
        if self.question_type == QuestionType::SingleChoice && self.correct_answers.len() > 1 {
            return Err(CandidateError::TooManyCorrectAnswers(
                self.correct_answers.len(),
            ));
        }
        if self.all_answers.iter().unique().count() < self.all_answers.len() {
            log::warn!("question \"{}\" has duplicate answer options", self.text);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub question_type: QuestionType,
    pub all_answers: Vec<String>,
    pub correct_answers: Vec<String>,
    pub category: String,
}

impl Question {
    pub fn new(id: QuestionId, candidate: Candidate) -> Self {
        Question {
            id,
            text: candidate.text,
            question_type: candidate.question_type,
            all_answers: candidate.all_answers,
            correct_answers: candidate.correct_answers,
            category: candidate.category,
        }
    }

    pub fn as_candidate(&self) -> Candidate {
        Candidate {
            text: self.text.clone(),
            question_type: self.question_type,
            all_answers: self.all_answers.clone(),
            correct_answers: self.correct_answers.clone(),
            category: self.category.clone(),
        }
    }
}

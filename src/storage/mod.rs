use anyhow::Result;

use crate::catalog::{Candidate, Question, QuestionId};

#[cfg(test)]
pub mod memory;

/// The persistence collaborator. Implementations live outside this crate;
/// ids are assigned on insert and are opaque to everything else.
pub trait QuestionStore {
    fn fetch_all(&self) -> Result<Vec<Question>>;
    fn insert(&self, candidate: Candidate) -> Result<Question>;
    fn update(&self, question: Question) -> Result<Question>;
    fn delete(&self, id: QuestionId) -> Result<()>;
    fn bulk_insert(&self, candidates: Vec<Candidate>) -> Result<()>;
}

use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use std::sync::Arc;

use super::QuestionStore;
use crate::catalog::{Candidate, Question, QuestionId};

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    questions: Vec<Question>,
    next_id: u64,
}

impl Inner {
    fn assign(&mut self, candidate: Candidate) -> Question {
        self.next_id += 1;
        let question = Question::new(QuestionId(self.next_id), candidate);
        self.questions.push(question.clone());
        question
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuestionStore for MemoryStore {
    fn fetch_all(&self) -> Result<Vec<Question>> {
        Ok(self.inner.read().questions.clone())
    }

    fn insert(&self, candidate: Candidate) -> Result<Question> {
        Ok(self.inner.write().assign(candidate))
    }

    fn update(&self, question: Question) -> Result<Question> {
        let mut inner = self.inner.write();
        let stored = inner
            .questions
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or_else(|| anyhow!("no question with id {:?}", question.id))?;
        *stored = question.clone();
        Ok(question)
    }

    fn delete(&self, id: QuestionId) -> Result<()> {
        let mut inner = self.inner.write();
        let count_before = inner.questions.len();
        inner.questions.retain(|q| q.id != id);
        if inner.questions.len() == count_before {
            return Err(anyhow!("no question with id {:?}", id));
        }
        Ok(())
    }

    fn bulk_insert(&self, candidates: Vec<Candidate>) -> Result<()> {
        let mut inner = self.inner.write();
        for candidate in candidates {
            inner.assign(candidate);
        }
        Ok(())
    }
}

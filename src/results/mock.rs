use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::ResultsSink;
use crate::catalog::QuestionId;

#[derive(Clone, Default)]
pub struct MockResultsSink {
    submissions: Arc<RwLock<Vec<HashMap<QuestionId, HashSet<String>>>>>,
}

impl MockResultsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> Vec<HashMap<QuestionId, HashSet<String>>> {
        self.submissions.read().clone()
    }
}

impl ResultsSink for MockResultsSink {
    fn submit(&self, answers: HashMap<QuestionId, HashSet<String>>) {
        self.submissions.write().push(answers);
    }
}

use std::collections::{HashMap, HashSet};

use crate::catalog::QuestionId;

#[cfg(test)]
pub mod mock;

/// The scoring collaborator. Receives a finished session's answer
/// selections exactly once; grading against the correct answers happens on
/// its side.
pub trait ResultsSink {
    fn submit(&self, answers: HashMap<QuestionId, HashSet<String>>);
}

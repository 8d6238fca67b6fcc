use anyhow::Result;
use itertools::Itertools;
use std::fmt;

use crate::catalog::{Candidate, Question, QuestionId};
use crate::ingest::IngestionPipeline;
use crate::storage::QuestionStore;

/// Admin-facing service over the storage collaborator: listing, editing and
/// bulk-loading questions. Presentation is a consumer of its results.
pub struct QuestionBank<S: QuestionStore> {
    store: S,
}

impl<S: QuestionStore> QuestionBank<S> {
    pub fn new(store: S) -> Self {
        QuestionBank { store }
    }

    pub fn questions(&self) -> Result<Vec<Question>> {
        self.store.fetch_all()
    }

    /// Categories are exact-match filter keys, which is why the pipeline
    /// normalizes them so aggressively.
    pub fn questions_in_category(&self, category: &str) -> Result<Vec<Question>> {
        Ok(self
            .store
            .fetch_all()?
            .into_iter()
            .filter(|question| question.category == category)
            .collect())
    }

    pub fn create(&self, candidate: Candidate) -> Result<Question> {
        candidate.check()?;
        self.store.insert(candidate)
    }

    pub fn edit(&self, question: Question) -> Result<Question> {
        question.as_candidate().check()?;
        self.store.update(question)
    }

    pub fn remove(&self, id: QuestionId) -> Result<()> {
        self.store.delete(id)
    }

    /// Runs the pipeline over raw CSV text and hands the accepted set to
    /// the store as a single batch. Atomicity of that batch is the store's
    /// concern, not ours.
    pub fn import_csv(&self, pipeline: &IngestionPipeline, raw: &str) -> Result<ImportSummary> {
        let report = pipeline.ingest(raw)?;
        let summary = ImportSummary {
            imported: report.accepted.len(),
            skipped: report.skipped,
        };
        let categories = report
            .accepted
            .iter()
            .map(|candidate| candidate.category.as_str())
            .unique()
            .join(", ");
        self.store.bulk_insert(report.accepted)?;
        log::info!("{} (categories: {})", summary, categories);
        Ok(summary)
    }
}

/// The one-line outcome shown to the admin after an import.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "imported {} questions, skipped {} rows",
            self.imported, self.skipped
        )
    }
}

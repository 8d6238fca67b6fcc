use lazy_static::lazy_static;
use std::collections::HashMap;
use thiserror::Error;

use crate::catalog::{Candidate, CandidateError, QuestionType};

mod tokenizer;


const COLUMN_COUNT: usize = 5;

lazy_static! {
    /// Legacy category labels renamed to their current canonical names.
    static ref LEGACY_CATEGORIES: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("Koalatest", "Hundeführerschein");
        map.insert("Begleithund", "Begleithundeprüfung");
        map
    };
}

/// One tokenized physical line, in fixed column order. Discarded as soon as
/// it is converted into a candidate or rejected.
struct CsvRow {
    question: String,
    question_type: String,
    answers: String,
    correct_answers: String,
    category: String,
}

impl CsvRow {
    fn from_fields(fields: Vec<String>) -> CsvRow {
        // The tokenizer guarantees at least COLUMN_COUNT fields; extra
        // columns are ignored.
        let mut fields = fields.into_iter();
        CsvRow {
            question: fields.next().unwrap_or_default(),
            question_type: fields.next().unwrap_or_default(),
            answers: fields.next().unwrap_or_default(),
            correct_answers: fields.next().unwrap_or_default(),
            category: fields.next().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
enum RowRejection {
    #[error("invalid type \"{0}\"")]
    InvalidType(String),
    #[error(transparent)]
    Candidate(#[from] CandidateError),
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum IngestError {
    #[error("no rows could be imported: all {skipped} rows were skipped due to format errors")]
    AllRowsSkipped { skipped: usize },
    #[error("no rows could be imported: no usable rows present")]
    NoUsableRows,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IngestReport {
    pub accepted: Vec<Candidate>,
    pub skipped: usize,
}

/// Turns raw CSV text into validated, normalized candidates. Acceptance is
/// row-level and best-effort: one malformed row never blocks the rest of
/// the file, the admin fixes outliers afterwards.
pub struct IngestionPipeline {
    category_renames: HashMap<String, String>,
}

impl Default for IngestionPipeline {
    fn default() -> Self {
        IngestionPipeline::new(
            LEGACY_CATEGORIES
                .iter()
                .map(|(old, new)| (old.to_string(), new.to_string()))
                .collect(),
        )
    }
}

impl IngestionPipeline {
    pub fn new(category_renames: HashMap<String, String>) -> Self {
        IngestionPipeline { category_renames }
    }

    /// Partitions the input into accepted candidates and a skip count. The
    /// pipeline is stateless with respect to its input: the same text
    /// always yields the same report.
    pub fn ingest(&self, raw: &str) -> Result<IngestReport, IngestError> {
        let mut accepted = Vec::new();
        let mut skipped = 0;
        for fields in tokenizer::tokenize(raw, COLUMN_COUNT) {
            match self.convert(CsvRow::from_fields(fields)) {
                Ok(candidate) => accepted.push(candidate),
                Err(rejection) => {
                    log::debug!("skipping row: {}", rejection);
                    skipped += 1;
                }
            }
        }
        if accepted.is_empty() {
            return Err(if skipped > 0 {
                IngestError::AllRowsSkipped { skipped }
            } else {
                IngestError::NoUsableRows
            });
        }
        Ok(IngestReport { accepted, skipped })
    }

    fn convert(&self, row: CsvRow) -> Result<Candidate, RowRejection> {
        let question_type = QuestionType::from_csv(&row.question_type)
            .ok_or_else(|| RowRejection::InvalidType(row.question_type.trim().to_string()))?;
        let candidate = Candidate {
            text: row.question.trim().to_string(),
            question_type,
            all_answers: split_list(&row.answers),
            correct_answers: split_list(&row.correct_answers),
            category: self.canonical_category(row.category.trim()),
        };
        candidate.check()?;
        Ok(candidate)
    }

    fn canonical_category(&self, category: &str) -> String {
        match self.category_renames.get(category) {
            Some(renamed) => renamed.clone(),
            None => category.to_string(),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

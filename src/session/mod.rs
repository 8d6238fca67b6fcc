use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::catalog::{Question, QuestionId, QuestionType};
use crate::results::ResultsSink;

mod settings;

pub use settings::SessionSettings;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    InProgress,
    ConfirmingFinish,
    Finished,
}

/// One learner's attempt at a fixed ordered question list. The question
/// list never changes for the session's lifetime and the answer map is
/// only ever written by the transition methods below. Invalid transition
/// requests are guarded no-ops, observable through `phase()`.
pub struct Session<S: ResultsSink> {
    questions: Vec<Question>,
    current_index: usize,
    answers: HashMap<QuestionId, HashSet<String>>,
    time_remaining: Option<Duration>,
    phase: Phase,
    sink: S,
}

impl<S: ResultsSink> Session<S> {
    pub fn new(questions: Vec<Question>, settings: SessionSettings, sink: S) -> Self {
        debug_assert!(!questions.is_empty(), "session needs at least one question");
        let time_remaining = settings
            .time_limit
            .filter(|limit| *limit > Duration::from_secs(0));
        Session {
            questions,
            current_index: 0,
            answers: HashMap::new(),
            time_remaining,
            phase: Phase::InProgress,
            sink,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Derived on every read, never stored.
    pub fn progress(&self) -> f32 {
        (self.current_index + 1) as f32 / self.questions.len() as f32
    }

    pub fn time_remaining(&self) -> Option<Duration> {
        self.time_remaining
    }

    pub fn selected(&self, id: QuestionId) -> Option<&HashSet<String>> {
        self.answers.get(&id)
    }

    pub fn is_all_answered(&self) -> bool {
        self.questions.iter().all(|question| {
            self.answers
                .get(&question.id)
                .map_or(false, |options| !options.is_empty())
        })
    }

    /// Single choice replaces the selection, multiple choice toggles
    /// membership.
    pub fn select_option(&mut self, option: &str) {
        if self.phase != Phase::InProgress {
            return;
        }
        let (id, question_type) = match self.current_question() {
            Some(question) => (question.id, question.question_type),
            None => return,
        };
        let options = self.answers.entry(id).or_insert_with(HashSet::new);
        match question_type {
            QuestionType::SingleChoice => {
                options.clear();
                options.insert(option.to_string());
            }
            QuestionType::MultipleChoice => {
                if !options.remove(option) {
                    options.insert(option.to_string());
                }
            }
        }
    }

    pub fn go_next(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        self.current_index = (self.current_index + 1).min(self.questions.len() - 1);
    }

    pub fn go_previous(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Only allowed from the last question with every question answered.
    /// The UI is expected to disable the control via `is_all_answered`.
    pub fn request_finish(&mut self) {
        let on_last_question = self.current_index == self.questions.len() - 1;
        if self.phase == Phase::InProgress && on_last_question && self.is_all_answered() {
            self.phase = Phase::ConfirmingFinish;
        }
    }

    pub fn cancel_finish(&mut self) {
        if self.phase == Phase::ConfirmingFinish {
            self.phase = Phase::InProgress;
        }
    }

    pub fn confirm_finish(&mut self) {
        if self.phase == Phase::ConfirmingFinish {
            self.finish();
        }
    }

    /// Advances the countdown. Only time spent in `InProgress` counts: the
    /// timer is paused during finish confirmation and stopped for good once
    /// the session is finished, so a tick landing after another transition
    /// observes the updated phase and does nothing. Reaching zero submits
    /// whatever is selected at that instant, skipping the confirmation step
    /// and the all-answered guard.
    pub fn tick(&mut self, dt: Duration) {
        if self.phase != Phase::InProgress {
            return;
        }
        let remaining = match self.time_remaining {
            Some(remaining) => remaining.checked_sub(dt).unwrap_or_default(),
            None => return,
        };
        self.time_remaining = Some(remaining);
        if remaining == Duration::from_secs(0) {
            log::info!("session time limit reached, submitting current answers");
            self.finish();
        }
    }

    /// Abandons the session: the countdown dies with it and nothing is
    /// submitted to the results sink.
    pub fn exit(self) {}

    fn finish(&mut self) {
        self.phase = Phase::Finished;
        self.sink.submit(self.answers.clone());
    }
}

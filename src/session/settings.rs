use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct SessionSettings {
    /// Countdown for the whole session. `None` (or a zero duration)
    /// disables the timer.
    pub time_limit: Option<Duration>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings { time_limit: None }
    }
}

use serde::{Deserialize, Serialize};

use crate::render::Reply;

/// Per-session dialog state. Owned by the conversation host; the sequencer
/// borrows it for one `advance` call and writes back. Never stored process-wide.
/// Serializable so a host can persist it across the suspension points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub city: Option<String>,
    pub forecast_type: Option<ForecastType>,
}

impl ConversationState {
    /// Seeds a state with already-known answers. Seeded fields are kept as-is
    /// and their questions are skipped without suspending.
    pub fn seeded(city: Option<String>, forecast_type: Option<ForecastType>) -> Self {
        Self {
            city,
            forecast_type,
        }
    }

    pub fn reset(&mut self) {
        self.city = None;
        self.forecast_type = None;
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.forecast_type.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ForecastType {
    #[default]
    Current,
    Forecast,
}

impl ForecastType {
    /// Maps a free-text answer to a forecast type. Anything that is not
    /// recognizably "forecast" falls back to `Current`; validation upstream
    /// only enforces the minimum length, so arbitrary text lands here.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("forecast") {
            ForecastType::Forecast
        } else {
            ForecastType::Current
        }
    }
}

/// Which question (or completion step) the next invocation handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    AskCity,
    AskForecastType,
    Finalize,
}

/// A question to put to the user, with optional quick-reply choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: &'static str,
    pub choices: &'static [&'static str],
}

/// What the host should do after an `advance` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnSignal {
    /// Suspend the dialog and resume `advance` with the user's next message.
    AwaitInput(Prompt),
    /// The dialog is over; state has been reset.
    Done,
}

/// Result of one `advance` call: messages to deliver, then the signal.
#[derive(Debug)]
pub struct TurnOutcome {
    pub replies: Vec<Reply>,
    pub signal: TurnSignal,
}

impl TurnOutcome {
    pub(crate) fn await_input(replies: Vec<Reply>, prompt: Prompt) -> Self {
        Self {
            replies,
            signal: TurnSignal::AwaitInput(prompt),
        }
    }

    pub(crate) fn done(replies: Vec<Reply>) -> Self {
        Self {
            replies,
            signal: TurnSignal::Done,
        }
    }
}

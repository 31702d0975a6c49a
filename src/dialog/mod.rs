pub mod sequencer;
pub mod state_machine;
pub mod types;

pub use sequencer::WeatherDialog;
pub use types::{ConversationState, ForecastType, Prompt, Step, TurnOutcome, TurnSignal};

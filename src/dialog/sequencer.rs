use std::sync::Arc;

use crate::dialog::state_machine::{
    next_step, normalize_answer, CITY_PROMPT, FORECAST_TYPE_CHOICES, FORECAST_TYPE_PROMPT,
    VALIDATION_MESSAGE, WRONG_CITY_MESSAGE,
};
use crate::dialog::types::{ConversationState, ForecastType, Prompt, Step, TurnOutcome};
use crate::ports::WeatherPort;
use crate::render::{self, Reply};

/// Drives the weather dialog, one invocation per user turn.
///
/// The conversation host owns the [`ConversationState`] and persists it across
/// the two suspension points; the sequencer holds only the provider port.
pub struct WeatherDialog {
    provider: Arc<dyn WeatherPort>,
}

impl WeatherDialog {
    pub fn new(provider: Arc<dyn WeatherPort>) -> Self {
        Self { provider }
    }

    /// Advances the dialog by one turn.
    ///
    /// `input` is the user's message when resuming from a suspension, `None` on
    /// the opening turn. A pending answer is applied to the first unanswered
    /// field; a too-short answer re-issues the same prompt with a fixed notice
    /// and leaves the state untouched. Once both fields are known the provider
    /// is called, the result (or the fixed failure message) is rendered, the
    /// state is reset, and the dialog signals completion.
    pub async fn advance(&self, state: &mut ConversationState, input: Option<&str>) -> TurnOutcome {
        if let Some(raw) = input {
            let pending = next_step(state);
            if let Some(prompt) = prompt_for(pending) {
                match normalize_answer(raw) {
                    Ok(answer) => apply_answer(state, pending, answer),
                    Err(err) => {
                        log::debug!("[dialog] rejected answer ({}), re-prompting", err);
                        return TurnOutcome::await_input(
                            vec![Reply::Text(VALIDATION_MESSAGE.to_string())],
                            prompt,
                        );
                    }
                }
            }
        }

        match next_step(state) {
            Step::AskCity => TurnOutcome::await_input(Vec::new(), city_prompt()),
            Step::AskForecastType => TurnOutcome::await_input(Vec::new(), forecast_type_prompt()),
            Step::Finalize => self.finalize(state).await,
        }
    }

    /// Calls the provider and closes the dialog. State is reset whether the
    /// lookup succeeds or fails.
    async fn finalize(&self, state: &mut ConversationState) -> TurnOutcome {
        let city = state.city.take().unwrap_or_default();
        let forecast_type = state.forecast_type.take().unwrap_or_default();
        state.reset();

        let replies = match forecast_type {
            ForecastType::Current => match self.provider.fetch_current(city.clone()).await {
                Ok(conditions) => vec![render::render_current(&city, &conditions)],
                Err(err) => {
                    log::warn!("[dialog] current weather lookup failed for {}: {}", city, err);
                    vec![Reply::Text(WRONG_CITY_MESSAGE.to_string())]
                }
            },
            ForecastType::Forecast => match self.provider.fetch_forecast(city.clone()).await {
                Ok(points) => render::render_forecast(&city, &points),
                Err(err) => {
                    log::warn!("[dialog] forecast lookup failed for {}: {}", city, err);
                    vec![Reply::Text(WRONG_CITY_MESSAGE.to_string())]
                }
            },
        };

        log::info!("[dialog] completed for {}", city);
        TurnOutcome::done(replies)
    }
}

fn apply_answer(state: &mut ConversationState, pending: Step, answer: String) {
    match pending {
        Step::AskCity => state.city = Some(answer),
        Step::AskForecastType => {
            state.forecast_type = Some(ForecastType::from_answer(&answer));
        }
        // No question pending: the message has nothing to answer, drop it.
        Step::Finalize => {}
    }
}

fn prompt_for(step: Step) -> Option<Prompt> {
    match step {
        Step::AskCity => Some(city_prompt()),
        Step::AskForecastType => Some(forecast_type_prompt()),
        Step::Finalize => None,
    }
}

fn city_prompt() -> Prompt {
    Prompt {
        text: CITY_PROMPT,
        choices: &[],
    }
}

fn forecast_type_prompt() -> Prompt {
    Prompt {
        text: FORECAST_TYPE_PROMPT,
        choices: FORECAST_TYPE_CHOICES,
    }
}

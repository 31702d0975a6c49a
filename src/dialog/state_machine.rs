use crate::dialog::types::{ConversationState, Step};
use crate::error::ValidationError;

/// Minimum trimmed length for a free-text answer. Applies to both the city
/// and the forecast-type answer.
pub const MIN_ANSWER_LEN: usize = 3;

pub const CITY_PROMPT: &str = "what city do you want to get weather in?";
pub const FORECAST_TYPE_PROMPT: &str = "Choose a forecast type";
pub const FORECAST_TYPE_CHOICES: &[&str] = &["Current", "Forecast"];
pub const VALIDATION_MESSAGE: &str = "Your answer should be at least 3 characters long.";
pub const WRONG_CITY_MESSAGE: &str = "Wrong city name.";

/// Pure step selection: the first unanswered question wins, in fixed order.
pub fn next_step(state: &ConversationState) -> Step {
    if state.city.is_none() {
        Step::AskCity
    } else if state.forecast_type.is_none() {
        Step::AskForecastType
    } else {
        Step::Finalize
    }
}

/// Trims an answer, rejects anything shorter than [`MIN_ANSWER_LEN`], and
/// capitalizes the first character.
pub fn normalize_answer(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_ANSWER_LEN {
        return Err(ValidationError::TooShort {
            min: MIN_ANSWER_LEN,
        });
    }
    Ok(capitalize_first(trimmed))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::types::ForecastType;

    #[test]
    fn next_step_follows_unanswered_fields() {
        let mut state = ConversationState::default();
        assert_eq!(next_step(&state), Step::AskCity);

        state.city = Some("Paris".to_string());
        assert_eq!(next_step(&state), Step::AskForecastType);

        state.forecast_type = Some(ForecastType::Current);
        assert_eq!(next_step(&state), Step::Finalize);
    }

    #[test]
    fn seeded_city_skips_straight_to_forecast_question() {
        let state = ConversationState::seeded(Some("Paris".to_string()), None);
        assert_eq!(next_step(&state), Step::AskForecastType);
    }

    #[test]
    fn normalize_answer_trims_and_capitalizes() {
        assert_eq!(normalize_answer("  rivne  "), Ok("Rivne".to_string()));
        assert_eq!(normalize_answer("london"), Ok("London".to_string()));
        assert_eq!(normalize_answer("new york"), Ok("New york".to_string()));
    }

    #[test]
    fn normalize_answer_rejects_short_input() {
        assert_eq!(
            normalize_answer("ab"),
            Err(ValidationError::TooShort { min: 3 })
        );
        assert_eq!(
            normalize_answer("  a  "),
            Err(ValidationError::TooShort { min: 3 })
        );
        assert_eq!(
            normalize_answer(""),
            Err(ValidationError::TooShort { min: 3 })
        );
    }

    #[test]
    fn forecast_type_defaults_to_current_for_free_text() {
        assert_eq!(ForecastType::from_answer("forecast"), ForecastType::Forecast);
        assert_eq!(ForecastType::from_answer("FORECAST"), ForecastType::Forecast);
        assert_eq!(ForecastType::from_answer("current"), ForecastType::Current);
        assert_eq!(ForecastType::from_answer("whatever"), ForecastType::Current);
    }
}

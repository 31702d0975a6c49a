use crate::ports::{CurrentConditions, ForecastPoint};

/// Display cap for forecast cards. Fixed, not configurable: anything past the
/// first three points is dropped.
pub const MAX_FORECAST_CARDS: usize = 3;

const ICON_URL_BASE: &str = "https://openweathermap.org/img/w";
const MORE_INFO_URL_BASE: &str = "https://openweathermap.org/find";
const MORE_INFO_TITLE: &str = "More information";

/// One outgoing message, ready for the conversation host to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Card(WeatherCard),
}

/// Image-bearing card with a single link-out action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherCard {
    pub title: String,
    pub subtitle: String,
    pub text: String,
    pub image_url: String,
    pub more_info: CardAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAction {
    pub title: String,
    pub url: String,
}

/// Renders current conditions as a single card.
pub fn render_current(city: &str, conditions: &CurrentConditions) -> Reply {
    Reply::Card(card(city.to_string(), "Current weather", conditions, city))
}

/// Renders the first [`MAX_FORECAST_CARDS`] forecast points, one card each.
pub fn render_forecast(city: &str, points: &[ForecastPoint]) -> Vec<Reply> {
    points
        .iter()
        .take(MAX_FORECAST_CARDS)
        .map(|point| {
            Reply::Card(card(
                format!("{}, {}", city, point.timestamp),
                "Forecast",
                &point.conditions,
                city,
            ))
        })
        .collect()
}

pub fn conditions_text(conditions: &CurrentConditions) -> String {
    format!(
        "temperature {} °C / humidity {} %",
        conditions.temperature_c, conditions.humidity_pct
    )
}

fn card(title: String, subtitle: &str, conditions: &CurrentConditions, city: &str) -> WeatherCard {
    WeatherCard {
        title,
        subtitle: subtitle.to_string(),
        text: conditions_text(conditions),
        image_url: icon_url(&conditions.icon),
        more_info: CardAction {
            title: MORE_INFO_TITLE.to_string(),
            url: more_info_url(city),
        },
    }
}

fn icon_url(icon: &str) -> String {
    format!("{}/{}.png", ICON_URL_BASE, icon)
}

fn more_info_url(city: &str) -> String {
    format!("{}?q={}", MORE_INFO_URL_BASE, city.replace(' ', "+"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(temp: i32) -> CurrentConditions {
        CurrentConditions {
            temperature_c: temp,
            humidity_pct: 80,
            icon: "10d".to_string(),
        }
    }

    #[test]
    fn current_card_formats_text_and_urls() {
        let reply = render_current("London", &conditions(15));
        let Reply::Card(card) = reply else {
            panic!("expected a card");
        };
        assert_eq!(card.title, "London");
        assert_eq!(card.text, "temperature 15 °C / humidity 80 %");
        assert_eq!(card.image_url, "https://openweathermap.org/img/w/10d.png");
        assert_eq!(
            card.more_info.url,
            "https://openweathermap.org/find?q=London"
        );
        assert_eq!(card.more_info.title, "More information");
    }

    #[test]
    fn more_info_url_escapes_spaces() {
        let Reply::Card(card) = render_current("New York", &conditions(20)) else {
            panic!("expected a card");
        };
        assert_eq!(
            card.more_info.url,
            "https://openweathermap.org/find?q=New+York"
        );
    }

    #[test]
    fn forecast_caps_at_three_cards() {
        let points: Vec<ForecastPoint> = (0..5)
            .map(|i| ForecastPoint {
                timestamp: format!("2026-08-2{} 12:00:00", i),
                conditions: conditions(i),
            })
            .collect();
        let replies = render_forecast("Paris", &points);
        assert_eq!(replies.len(), 3);
        let Reply::Card(first) = &replies[0] else {
            panic!("expected a card");
        };
        assert_eq!(first.title, "Paris, 2026-08-20 12:00:00");
        assert_eq!(first.subtitle, "Forecast");
    }

    #[test]
    fn forecast_with_fewer_points_renders_all() {
        let points = vec![ForecastPoint {
            timestamp: "2026-08-27 15:00:00".to_string(),
            conditions: conditions(18),
        }];
        assert_eq!(render_forecast("Kyiv", &points).len(), 1);
    }
}

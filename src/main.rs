use std::io::Write as _;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use weatherbot_backend::dialog::{ConversationState, TurnSignal, WeatherDialog};
use weatherbot_backend::provider::OpenWeatherClient;
use weatherbot_backend::render::Reply;
use weatherbot_backend::logging;

/// Console conversation host: owns the per-session state, drives the dialog
/// one turn per input line, and prints replies and prompts. A finished dialog
/// immediately starts a fresh one; EOF exits.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let provider = Arc::new(OpenWeatherClient::from_env()?);
    let dialog = WeatherDialog::new(provider);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut state = ConversationState::default();
    let mut input: Option<String> = None;

    loop {
        let outcome = dialog.advance(&mut state, input.as_deref()).await;
        for reply in &outcome.replies {
            print_reply(reply);
        }
        match outcome.signal {
            TurnSignal::AwaitInput(prompt) => {
                println!("{}", prompt.text);
                if !prompt.choices.is_empty() {
                    println!("  [{}]", prompt.choices.join(" / "));
                }
                print!("> ");
                std::io::stdout().flush()?;
                match lines.next_line().await? {
                    Some(line) => input = Some(line),
                    None => break,
                }
            }
            TurnSignal::Done => {
                input = None;
                println!();
            }
        }
    }

    Ok(())
}

fn print_reply(reply: &Reply) {
    match reply {
        Reply::Text(text) => println!("{}", text),
        Reply::Card(card) => {
            println!("+----------------------------------------");
            println!("| {}", card.title);
            println!("| {}", card.subtitle);
            println!("| {}", card.text);
            println!("| image: {}", card.image_url);
            println!("| {}: {}", card.more_info.title, card.more_info.url);
            println!("+----------------------------------------");
        }
    }
}

use std::{fmt, sync::Arc};

use cityweather_core::{City, HttpBackend, Panel, Session, view};
use inquire::{InquireError, Select};
use tracing::debug;

enum Action {
    Pick(City),
    GetWeather,
    Previous,
    Next,
    Reload,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Pick(city) => f.write_str(&city.label()),
            Action::GetWeather => f.write_str("> Get weather"),
            Action::Previous => f.write_str("< Previous page"),
            Action::Next => f.write_str("> Next page"),
            Action::Reload => f.write_str("Reload cities"),
            Action::Quit => f.write_str("Quit"),
        }
    }
}

/// Interactive loop: one prompt per user action until they quit.
pub async fn run(backend: Arc<HttpBackend>, page_size: u32) -> anyhow::Result<()> {
    let mut session = Session::new(backend, page_size);

    eprintln!("{}", view::LOADING_CITIES);
    session.start().await;

    loop {
        render(&session);

        let action = match Select::new(&prompt(&session), actions(&session)).prompt() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match action {
            Action::Pick(city) => {
                debug!(city = %city.name, "city selected");
                session.select(&city.name);
            }
            Action::GetWeather => {
                if session.selected().is_some() {
                    eprintln!("{}", view::FETCHING_WEATHER);
                }
                session.fetch_weather().await;
            }
            Action::Previous => {
                eprintln!("{}", view::LOADING_CITIES);
                session.previous().await;
            }
            Action::Next => {
                eprintln!("{}", view::LOADING_CITIES);
                session.next().await;
            }
            Action::Reload => {
                eprintln!("{}", view::LOADING_CITIES);
                session.start().await;
            }
            Action::Quit => {
                debug!("browse session ended");
                break;
            }
        }
    }

    Ok(())
}

fn render(session: &Session<HttpBackend>) {
    match session.panel() {
        Panel::Empty => {}
        Panel::Error(msg) => eprintln!("\n{msg}\n"),
        panel => println!("\n{panel}\n"),
    }
}

fn prompt(session: &Session<HttpBackend>) -> String {
    let page = session.state().label().unwrap_or_else(|| "No cities loaded".to_string());
    let selected = session.selected().unwrap_or(view::SELECT_PLACEHOLDER);
    format!("{page} | {selected}")
}

/// Disabled controls are simply left out.
fn actions(session: &Session<HttpBackend>) -> Vec<Action> {
    let state = session.state();
    let mut actions: Vec<Action> = session.cities().iter().cloned().map(Action::Pick).collect();

    if state.is_loaded() {
        actions.push(Action::GetWeather);
    } else {
        actions.push(Action::Reload);
    }
    if state.has_previous() {
        actions.push(Action::Previous);
    }
    if state.has_next() {
        actions.push(Action::Next);
    }
    actions.push(Action::Quit);

    actions
}

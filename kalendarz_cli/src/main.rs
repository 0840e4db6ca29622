//! # Kalendarz CLI Application
//!
//! Terminal front-end for learning how Polish speakers say dates. Shows a
//! month grid, the Polish phrase for the selected day with a pronunciation
//! guide, and the holiday falling on it.
//!
//! Settings are read from the JSON file given as the first argument, else from
//! `KALENDARZ_SETTINGS`, else defaults are used.

mod args;
mod logging;
mod render;
mod state;

use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;

use kalendarz_core::composer::compose_card;
use kalendarz_core::date::CalendarDate;
use kalendarz_core::errors::{KalendarzError, KalendarzResult};
use kalendarz_core::file_io::load_settings;
use kalendarz_core::settings::Settings;
use tracing::{info, warn};

use args::Args;
use state::{Screen, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Next,
    Prev,
    Select(u32),
    Language,
    RepeatYear,
    Words,
    Culture,
    Json,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim().to_lowercase();
    if let Ok(day) = input.parse::<u32>() {
        return Some(Command::Select(day));
    }
    match input.as_str() {
        "n" | "next" | ">" => Some(Command::Next),
        "p" | "prev" | "<" => Some(Command::Prev),
        "l" | "lang" => Some(Command::Language),
        "y" | "year" => Some(Command::RepeatYear),
        "w" | "words" => Some(Command::Words),
        "c" | "culture" => Some(Command::Culture),
        "j" | "json" => Some(Command::Json),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Settings from `path`, or defaults when there is none or it fails to load.
fn startup_settings(path: Option<&Path>) -> Settings {
    let Some(path) = path else {
        return Settings::default();
    };
    match load_settings(path) {
        Ok(settings) => {
            info!(path = %path.display(), "using settings file");
            settings
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not load settings, using defaults");
            Settings::default()
        }
    }
}

fn prompt(text: &str) -> Option<String> {
    print!("{}", text);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}

fn draw(state: &ViewState) -> KalendarzResult<()> {
    println!();
    match state.screen {
        Screen::Calendar => {
            println!("{}", render::render_calendar(state)?);
            println!("{}", render::render_info(state)?);
        }
        Screen::Culture => println!("{}", render::render_culture()),
    }
    println!("{}", render::render_help(state));
    Ok(())
}

/// Apply a command. Returns false when the user quits.
fn apply(state: &mut ViewState, command: Command) -> KalendarzResult<bool> {
    match command {
        Command::Next => {
            if !state.next_month() {
                println!("Last month of {} reached.", state.range().last_year);
            }
        }
        Command::Prev => {
            if !state.prev_month() {
                println!("First month of {} reached.", state.range().first_year);
            }
        }
        Command::Select(day) => state.select_day(day)?,
        Command::Language => state.toggle_locale(),
        Command::RepeatYear => state.toggle_repeat_year(),
        Command::Words => state.toggle_numeral_style(),
        Command::Culture => state.toggle_screen(),
        Command::Json => {
            let card = compose_card(&state.selected, &state.compose_options())?;
            let json = serde_json::to_string_pretty(&card).map_err(KalendarzError::from)?;
            println!("{}", json);
        }
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn print_error(e: &KalendarzError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!("{}", json);
    }
}

fn main() {
    let args = Args::parse();
    logging::init_logging();

    println!("Kalendarz - Polish Dates");
    println!("========================");

    let settings = startup_settings(args.settings.as_deref());
    let today = CalendarDate::today().or_else(|e| {
        warn!(error = %e, "system date outside supported range");
        CalendarDate::new(settings.navigation.first_year, 0, 1)
    });

    let mut state = match today.and_then(|today| ViewState::new(&settings, today)) {
        Ok(state) => state,
        Err(e) => {
            print_error(&e);
            return;
        }
    };

    loop {
        if let Err(e) = draw(&state) {
            print_error(&e);
            return;
        }

        let Some(input) = prompt("> ") else {
            break;
        };
        let Some(command) = parse_command(&input) else {
            println!("Unknown command: {}", input.trim());
            continue;
        };

        match apply(&mut state, command) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => print_error(&e),
        }
    }
}

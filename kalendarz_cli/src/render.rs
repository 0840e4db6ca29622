//! Text rendering of the calendar, the info panel and the culture screen.
//!
//! Each function returns the finished text so it can be printed or checked
//! in tests.

use std::fmt::Write;

use kalendarz_core::composer::{compose_card, month_title, weekday_labels, NumeralStyle};
use kalendarz_core::date::{CalendarDate, Locale};
use kalendarz_core::errors::KalendarzResult;
use kalendarz_core::holidays::{holidays_for_year, HolidayKey};
use kalendarz_core::lexicon::{self, GRAMMAR_GUIDE, MONTHS};

use crate::state::ViewState;

const CELL_WIDTH: usize = 5;
const RULE: &str = "═══════════════════════════════════════";

/// One grid cell: `[ 3]` when selected, `*` suffix on holidays.
fn day_cell(day: u32, selected: bool, holiday: bool) -> String {
    let number = if selected {
        format!("[{:>2}]", day)
    } else {
        format!(" {:>2} ", day)
    };
    format!("{}{}", number, if holiday { '*' } else { ' ' })
}

/// The month grid for the displayed month, Sunday first, then its holidays.
pub fn render_calendar(state: &ViewState) -> KalendarzResult<String> {
    let mut out = String::new();
    let title = month_title(state.view_year, state.view_month, state.locale)?;
    let season = lexicon::month(state.view_month)?.season;
    let season_name = match state.locale {
        Locale::En => season.display_name(),
        Locale::Pl => season.name_pl(),
    };

    let _ = writeln!(out, "  < {} >   ({})", title, season_name);
    for label in weekday_labels(state.locale) {
        let _ = write!(out, "{:^width$}", label, width = CELL_WIDTH);
    }
    out.push('\n');

    let holidays = holidays_for_year(state.view_year)?;
    let first = CalendarDate::new(state.view_year, state.view_month, 1)?;
    let offset = first.weekday().index();
    let days = state.days_in_view()?;

    out.push_str(&" ".repeat(offset * CELL_WIDTH));
    for day in 1..=days {
        let column = (offset + day as usize - 1) % 7;
        let date = CalendarDate::new(state.view_year, state.view_month, day)?;
        let is_holiday = holidays.get(&HolidayKey::new(state.view_month, day)).is_some();
        out.push_str(&day_cell(day, date == state.selected, is_holiday));
        if column == 6 && day != days {
            out.push('\n');
        }
    }
    out.push('\n');

    let mut listed = holidays.in_month(state.view_month).peekable();
    if listed.peek().is_some() {
        out.push('\n');
    }
    for holiday in listed {
        let name = match state.locale {
            Locale::En => &holiday.english_name,
            Locale::Pl => &holiday.name,
        };
        let _ = writeln!(out, "  *{:>3}  {}", holiday.key.day, name);
    }
    Ok(out)
}

/// Phrase, pronunciation, translation and holiday note for the selection.
pub fn render_info(state: &ViewState) -> KalendarzResult<String> {
    let card = compose_card(&state.selected, &state.compose_options())?;
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {}", card.polish);
    let _ = writeln!(out, "  /{}/", card.phonetic);
    let _ = writeln!(out, "  {}", card.display);
    let _ = writeln!(out, "{}", RULE);

    match &card.holiday {
        Some(holiday) => {
            let (name, other) = match state.locale {
                Locale::En => (&holiday.english_name, &holiday.name),
                Locale::Pl => (&holiday.name, &holiday.english_name),
            };
            let _ = writeln!(out, "  * {} ({})", name, other);
            let _ = writeln!(out, "    {}", holiday.description);
        }
        None => {
            let note = match state.locale {
                Locale::En => "No holiday on this day.",
                Locale::Pl => "Brak święta w tym dniu.",
            };
            let _ = writeln!(out, "  {}", note);
        }
    }
    Ok(out)
}

/// Grammar guide followed by the origin of every month name.
pub fn render_culture() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", GRAMMAR_GUIDE.title);
    let _ = writeln!(out, "{}", RULE);
    for section in GRAMMAR_GUIDE.sections {
        let _ = writeln!(out);
        let _ = writeln!(out, "## {}", section.heading);
        let _ = writeln!(out, "{}", section.content);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Month Origins");
    let _ = writeln!(out, "{}", RULE);
    for month in MONTHS.iter() {
        let _ = writeln!(out, "{} ({}): {}", month.nominative_pl, month.english_name, month.derivation);
    }
    out
}

/// Command summary with the current toggle states.
pub fn render_help(state: &ViewState) -> String {
    let on_off = |flag: bool| if flag { "ON" } else { "OFF" };
    let language = match state.locale {
        Locale::En => "EN | PL",
        Locale::Pl => "PL | EN",
    };
    format!(
        "[n]ext [p]rev [1-{}] select day  [l]anguage: {}  [y] repeat year: {}  [w]ords: {}  [c]ulture  [j]son  [q]uit",
        state.days_in_view().unwrap_or(31),
        language,
        on_off(state.repeat_year),
        on_off(state.numeral_style == NumeralStyle::Words),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalendarz_core::settings::Settings;

    fn state_on(year: i32, month: u32, day: u32) -> ViewState {
        ViewState::new(&Settings::default(), CalendarDate::new(year, month, day).unwrap()).unwrap()
    }

    #[test]
    fn test_day_cell() {
        assert_eq!(day_cell(3, false, false), "  3  ");
        assert_eq!(day_cell(3, true, false), "[ 3] ");
        assert_eq!(day_cell(11, false, true), " 11 *");
    }

    #[test]
    fn test_calendar_marks_holidays_and_selection() {
        let grid = render_calendar(&state_on(2024, 10, 20)).unwrap();
        assert!(grid.contains("November 2024"));
        assert!(grid.contains(" 11 *"));
        assert!(grid.contains("  1 *"));
        assert!(grid.contains("[20] "));
        // 1 November 2024 is a Friday: five empty cells then the day
        let first_row = grid.lines().nth(2).unwrap();
        assert!(first_row.starts_with(&" ".repeat(5 * CELL_WIDTH)));
    }

    #[test]
    fn test_calendar_in_polish() {
        let mut state = state_on(2024, 3, 3);
        state.toggle_locale();
        let grid = render_calendar(&state).unwrap();
        assert!(grid.contains("Kwiecień 2024"));
        assert!(grid.contains("Nie"));
        assert!(grid.contains("wiosna"));
    }

    #[test]
    fn test_calendar_row_count() {
        // February 2026 starts on a Sunday and fills exactly four rows
        let grid = render_calendar(&state_on(2026, 1, 1)).unwrap();
        let rows = grid.lines().take_while(|line| !line.is_empty()).count();
        assert_eq!(rows, 2 + 4);
    }

    #[test]
    fn test_calendar_lists_month_holidays() {
        let grid = render_calendar(&state_on(2024, 10, 20)).unwrap();
        assert!(grid.contains("  *  1  All Saints' Day"));
        assert!(grid.contains("  * 11  Independence Day"));

        // July has no holidays, so nothing follows the grid
        let july = render_calendar(&state_on(2024, 6, 9)).unwrap();
        assert!(!july.lines().any(|line| line.is_empty()));
    }

    #[test]
    fn test_info_with_holiday() {
        let info = render_info(&state_on(2024, 10, 11)).unwrap();
        assert!(info.contains("Poniedziałek, 11 listopada"));
        assert!(info.contains("Monday, November 11, 2024"));
        assert!(info.contains("* Independence Day (Narodowe Święto Niepodległości)"));
    }

    #[test]
    fn test_info_without_holiday() {
        let mut state = state_on(2024, 3, 3);
        assert!(render_info(&state).unwrap().contains("No holiday"));
        state.toggle_locale();
        assert!(render_info(&state).unwrap().contains("Brak święta"));
    }

    #[test]
    fn test_culture_lists_every_month() {
        let text = render_culture();
        assert!(text.contains(GRAMMAR_GUIDE.title));
        for month in MONTHS.iter() {
            assert!(text.contains(month.nominative_pl));
        }
    }

    #[test]
    fn test_help_shows_toggles() {
        let mut state = state_on(2024, 3, 3);
        assert!(render_help(&state).contains("repeat year: OFF"));
        state.toggle_repeat_year();
        assert!(render_help(&state).contains("repeat year: ON"));
    }
}

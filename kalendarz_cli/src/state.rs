//! UI state for the terminal front-end.
//!
//! Everything the screen depends on lives in [`ViewState`]; render functions
//! read it and command handlers update it. The core is only asked for
//! phrases, cards and holidays.

use kalendarz_core::composer::{ComposeOptions, NumeralStyle};
use kalendarz_core::date::{days_in_month, CalendarDate, Locale};
use kalendarz_core::errors::KalendarzResult;
use kalendarz_core::settings::{NavigationRange, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Calendar,
    Culture,
}

/// What the user is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Year of the displayed month
    pub view_year: i32,
    /// 0-based displayed month
    pub view_month: u32,
    pub selected: CalendarDate,
    pub locale: Locale,
    pub repeat_year: bool,
    pub numeral_style: NumeralStyle,
    pub screen: Screen,
    range: NavigationRange,
}

impl ViewState {
    /// Start on `today`'s month, pulled into the navigation range.
    ///
    /// When `today` lies outside the range the selection moves to the first
    /// day of the nearest navigable month.
    pub fn new(settings: &Settings, today: CalendarDate) -> KalendarzResult<Self> {
        let range = settings.navigation;
        let selected = if range.contains(today.year()) {
            today
        } else if today.year() < range.first_year {
            CalendarDate::new(range.first_year, 0, 1)?
        } else {
            CalendarDate::new(range.last_year, 11, 1)?
        };

        Ok(ViewState {
            view_year: selected.year(),
            view_month: selected.month(),
            selected,
            locale: settings.locale,
            repeat_year: settings.include_year,
            numeral_style: settings.numeral_style,
            screen: Screen::Calendar,
            range,
        })
    }

    pub fn range(&self) -> NavigationRange {
        self.range
    }

    /// Show the next month. Returns false at the end of the range.
    pub fn next_month(&mut self) -> bool {
        let (year, month) = if self.view_month == 11 {
            (self.view_year + 1, 0)
        } else {
            (self.view_year, self.view_month + 1)
        };
        self.move_to(year, month)
    }

    /// Show the previous month. Returns false at the start of the range.
    pub fn prev_month(&mut self) -> bool {
        let (year, month) = if self.view_month == 0 {
            (self.view_year - 1, 11)
        } else {
            (self.view_year, self.view_month - 1)
        };
        self.move_to(year, month)
    }

    fn move_to(&mut self, year: i32, month: u32) -> bool {
        if !self.range.contains(year) {
            return false;
        }
        self.view_year = year;
        self.view_month = month;
        true
    }

    /// Select a day of the displayed month.
    pub fn select_day(&mut self, day: u32) -> KalendarzResult<()> {
        self.selected = CalendarDate::new(self.view_year, self.view_month, day)?;
        Ok(())
    }

    pub fn days_in_view(&self) -> KalendarzResult<u32> {
        days_in_month(self.view_year, self.view_month)
    }

    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }

    pub fn toggle_repeat_year(&mut self) {
        self.repeat_year = !self.repeat_year;
    }

    pub fn toggle_numeral_style(&mut self) {
        self.numeral_style = match self.numeral_style {
            NumeralStyle::Digits => NumeralStyle::Words,
            NumeralStyle::Words => NumeralStyle::Digits,
        };
    }

    pub fn toggle_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Calendar => Screen::Culture,
            Screen::Culture => Screen::Calendar,
        };
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            include_year: self.repeat_year,
            style: self.numeral_style,
            locale: self.locale,
        }
    }
}

//! Application state of the calendar view and its transitions.

use chrono::NaiveDate;
use tracing::{
  debug,
  info
};

use crate::draft::EntryOutcome;
use crate::event::Event;
use crate::grid::{
  CalendarDay,
  GridOptions,
  build_month_grid_with
};
use crate::month::{
  DEFAULT_HEADER_FORMAT,
  month_label,
  shift_months
};

/// Every way the calendar view can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarAction {
  PrevMonth,
  NextMonth,
  Today(NaiveDate),
  OpenDay(NaiveDate),
  OpenToday(NaiveDate),
  Submit(Event),
  Close
}

impl From<EntryOutcome> for CalendarAction {
  fn from(outcome: EntryOutcome) -> Self {
    match outcome {
      | EntryOutcome::Save(event) => {
        Self::Submit(event)
      }
      | EntryOutcome::Close => Self::Close
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
  pub current_month: NaiveDate,
  pub events:        Vec<Event>,
  pub modal_open:    bool,
  pub selected_date: Option<NaiveDate>
}

impl CalendarState {
  pub fn new(today: NaiveDate) -> Self {
    Self {
      current_month: today,
      events:        Vec::new(),
      modal_open:    false,
      selected_date: None
    }
  }

  pub fn apply(
    &mut self,
    action: CalendarAction
  ) {
    match action {
      | CalendarAction::PrevMonth => {
        self.prev_month()
      }
      | CalendarAction::NextMonth => {
        self.next_month()
      }
      | CalendarAction::Today(today) => {
        self.jump_to_today(today)
      }
      | CalendarAction::OpenDay(day) => {
        self.open_for_day(day)
      }
      | CalendarAction::OpenToday(
        today
      ) => self.open_for_today(today),
      | CalendarAction::Submit(event) => {
        self.submit(event)
      }
      | CalendarAction::Close => {
        self.close()
      }
    }
  }

  pub fn prev_month(&mut self) {
    self.shift_month(-1);
  }

  pub fn next_month(&mut self) {
    self.shift_month(1);
  }

  fn shift_month(&mut self, step: i32) {
    let next = shift_months(
      self.current_month,
      step
    );
    debug!(
      from = %self.current_month,
      to = %next,
      step,
      "calendar month shifted"
    );
    self.current_month = next;
  }

  pub fn jump_to_today(
    &mut self,
    today: NaiveDate
  ) {
    info!(
      today = %today,
      "calendar reset to today"
    );
    self.current_month = today;
  }

  pub fn open_for_day(
    &mut self,
    day: NaiveDate
  ) {
    debug!(day = %day, "entry form opened for day");
    self.selected_date = Some(day);
    self.modal_open = true;
  }

  pub fn open_for_today(
    &mut self,
    today: NaiveDate
  ) {
    debug!(today = %today, "entry form opened for today");
    self.selected_date = Some(today);
    self.modal_open = true;
  }

  pub fn submit(&mut self, event: Event) {
    info!(
      id = %event.id,
      date = %event.date,
      total = self.events.len() + 1,
      "note added"
    );
    self.events.push(event);
    self.modal_open = false;
  }

  /// Hides the form. The selected date stays until the next open.
  pub fn close(&mut self) {
    debug!("entry form closed");
    self.modal_open = false;
  }

  pub fn grid(
    &self,
    options: &GridOptions
  ) -> Vec<CalendarDay> {
    build_month_grid_with(
      self.current_month,
      &self.events,
      options
    )
  }

  pub fn header_label(&self) -> String {
    self.header_label_with(
      DEFAULT_HEADER_FORMAT
    )
  }

  pub fn header_label_with(
    &self,
    format: &str
  ) -> String {
    month_label(self.current_month, format)
  }

  /// Date the entry form opens with.
  pub fn modal_date(
    &self,
    today: NaiveDate
  ) -> NaiveDate {
    self.selected_date.unwrap_or(today)
  }
}

#[cfg(test)]
mod tests {
  use chrono::Datelike;

  use super::*;

  fn ymd(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  #[test]
  fn starts_on_today_with_closed_form() {
    let today = ymd(2024, 3, 12);
    let state = CalendarState::new(today);

    assert_eq!(state.current_month, today);
    assert!(state.events.is_empty());
    assert!(!state.modal_open);
    assert_eq!(state.selected_date, None);
    assert_eq!(state.modal_date(today), today);
  }

  #[test]
  fn navigation_moves_one_month() {
    let mut state =
      CalendarState::new(ymd(2024, 3, 1));

    state.apply(CalendarAction::PrevMonth);
    assert_eq!(
      (
        state.current_month.year(),
        state.current_month.month()
      ),
      (2024, 2)
    );

    state.apply(CalendarAction::NextMonth);
    assert_eq!(
      (
        state.current_month.year(),
        state.current_month.month()
      ),
      (2024, 3)
    );
    assert_eq!(
      state.header_label(),
      "March 2024"
    );
  }

  #[test]
  fn bad_header_format_still_renders() {
    let state =
      CalendarState::new(ymd(2024, 3, 1));
    assert_eq!(
      state.header_label_with("%Q"),
      "March 2024"
    );
  }

  #[test]
  fn today_action_returns_to_today() {
    let today = ymd(2024, 3, 12);
    let mut state = CalendarState::new(today);
    state.next_month();
    state.next_month();

    state.apply(CalendarAction::Today(today));
    assert_eq!(state.current_month, today);
  }

  #[test]
  fn close_keeps_stale_selection() {
    let mut state =
      CalendarState::new(ymd(2024, 3, 1));
    let day = ymd(2024, 3, 9);

    state.apply(CalendarAction::OpenDay(day));
    assert!(state.modal_open);

    state.apply(CalendarAction::Close);
    assert!(!state.modal_open);
    assert_eq!(state.selected_date, Some(day));
    assert!(state.events.is_empty());
  }

  #[test]
  fn form_outcomes_drive_transitions() {
    let day = ymd(2024, 3, 15);
    let mut state = CalendarState::new(day);

    state.open_for_day(day);
    state.apply(EntryOutcome::Close.into());
    assert!(!state.modal_open);
    assert!(state.events.is_empty());

    state.open_for_day(day);
    let event = Event::new("Meeting", day);
    state.apply(
      EntryOutcome::Save(event.clone()).into()
    );
    assert!(!state.modal_open);
    assert_eq!(state.events, vec![event]);
  }

  #[test]
  fn add_button_selects_today() {
    let today = ymd(2024, 3, 12);
    let mut state =
      CalendarState::new(ymd(2024, 1, 1));
    state.open_for_day(ymd(2024, 1, 5));
    state.close();

    state.apply(CalendarAction::OpenToday(
      today
    ));
    assert!(state.modal_open);
    assert_eq!(state.selected_date, Some(today));
  }

  #[test]
  fn grid_reflects_submitted_events() {
    let mut state =
      CalendarState::new(ymd(2024, 3, 1));
    let event =
      Event::new("Dentist", ymd(2024, 3, 20));
    state.submit(event.clone());

    let grid =
      state.grid(&GridOptions::default());
    let cell = grid
      .iter()
      .find(|cell| cell.date == event.date)
      .expect("cell for event");
    assert_eq!(cell.events, vec![event]);
  }
}

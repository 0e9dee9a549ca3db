//! Month grid construction.
//!
//! A grid always spans whole weeks: from the week holding the first of
//! the reference month through the week holding its last day.

use chrono::{
  Datelike,
  NaiveDate,
  Weekday
};

use crate::event::Event;
use crate::month::{
  add_days,
  end_of_week,
  first_day_of_month,
  last_day_of_month,
  same_month,
  start_of_week
};

pub const DEFAULT_EVENTS_PER_DAY: usize =
  3;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct GridOptions {
  pub week_start:     Weekday,
  pub events_per_day: usize
}

impl Default for GridOptions {
  fn default() -> Self {
    Self {
      week_start:     Weekday::Sun,
      events_per_day:
        DEFAULT_EVENTS_PER_DAY
    }
  }
}

/// One display cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
  pub date:             NaiveDate,
  pub events:           Vec<Event>,
  pub is_current_month: bool
}

pub fn build_month_grid(
  reference: NaiveDate,
  events: &[Event]
) -> Vec<CalendarDay> {
  build_month_grid_with(
    reference,
    events,
    &GridOptions::default()
  )
}

pub fn build_month_grid_with(
  reference: NaiveDate,
  events: &[Event],
  options: &GridOptions
) -> Vec<CalendarDay> {
  let (start, end) =
    grid_bounds(reference, options);
  let span =
    (end - start).num_days().max(0);

  (0..=span)
    .map(|offset| {
      let date = add_days(start, offset);
      CalendarDay {
        date,
        events: events_on(
          events,
          date,
          options.events_per_day
        ),
        is_current_month: same_month(
          date, reference
        )
      }
    })
    .collect()
}

/// First and last date shown for `reference`'s month, inclusive.
pub fn grid_bounds(
  reference: NaiveDate,
  options: &GridOptions
) -> (NaiveDate, NaiveDate) {
  let first = first_day_of_month(
    reference.year(),
    reference.month()
  );
  let last = last_day_of_month(
    reference.year(),
    reference.month()
  );
  (
    start_of_week(
      first,
      options.week_start
    ),
    end_of_week(
      last,
      options.week_start
    )
  )
}

/// Splits a grid into rows of seven cells.
pub fn weeks(
  days: &[CalendarDay]
) -> impl Iterator<Item = &[CalendarDay]>
{
  days.chunks(7)
}

fn events_on(
  events: &[Event],
  date: NaiveDate,
  limit: usize
) -> Vec<Event> {
  events
    .iter()
    .filter(|event| event.is_on(date))
    .take(limit)
    .cloned()
    .collect()
}

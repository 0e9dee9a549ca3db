//! Draft state behind the "new note" form.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{
  DraftError,
  DraftResult
};
use crate::event::Event;

pub const DATE_INPUT_FORMAT: &str =
  "%Y-%m-%d";

/// Inclusive range of dates the entry form accepts.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct DateBounds {
  pub min: NaiveDate,
  pub max: NaiveDate
}

impl DateBounds {
  pub fn contains(
    &self,
    date: NaiveDate
  ) -> bool {
    self.min <= date && date <= self.max
  }

  pub fn input_min(&self) -> String {
    format_input_date(self.min)
  }

  pub fn input_max(&self) -> String {
    format_input_date(self.max)
  }
}

impl Default for DateBounds {
  fn default() -> Self {
    Self {
      min: NaiveDate::from_ymd_opt(
        1970, 1, 1
      )
      .unwrap_or(NaiveDate::MIN),
      max: NaiveDate::from_ymd_opt(
        2200, 1, 1
      )
      .unwrap_or(NaiveDate::MAX)
    }
  }
}

/// What the entry form reports back to the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
  Save(Event),
  Close
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct EntryDraft {
  pub title: String,
  pub date:  String
}

impl EntryDraft {
  pub fn for_date(date: NaiveDate) -> Self {
    Self {
      title: String::new(),
      date:  format_input_date(date)
    }
  }

  pub fn set_title(
    &mut self,
    title: impl Into<String>
  ) {
    self.title = title.into();
  }

  pub fn set_date(
    &mut self,
    date: impl Into<String>
  ) {
    self.date = date.into();
  }

  /// Checks the draft without minting an event.
  pub fn validate(
    &self,
    bounds: &DateBounds
  ) -> DraftResult<NaiveDate> {
    if self.title.is_empty() {
      return Err(DraftError::EmptyTitle);
    }

    let raw = self.date.trim();
    if raw.is_empty() {
      return Err(DraftError::MissingDate);
    }

    let date = parse_input_date(raw)
      .ok_or_else(|| {
        DraftError::InvalidDate {
          raw: raw.to_string()
        }
      })?;

    if !bounds.contains(date) {
      return Err(DraftError::OutOfRange {
        date,
        min: bounds.min,
        max: bounds.max
      });
    }

    Ok(date)
  }

  pub fn is_submittable(
    &self,
    bounds: &DateBounds
  ) -> bool {
    self.validate(bounds).is_ok()
  }

  /// Builds the event this draft describes. The title is kept as typed.
  pub fn submit(
    &self,
    bounds: &DateBounds
  ) -> DraftResult<Event> {
    let date = self.validate(bounds)?;
    let event =
      Event::new(self.title.clone(), date);
    debug!(
      id = %event.id,
      date = %date,
      "entry draft submitted"
    );
    Ok(event)
  }

  pub fn outcome(
    &self,
    bounds: &DateBounds
  ) -> DraftResult<EntryOutcome> {
    self
      .submit(bounds)
      .map(EntryOutcome::Save)
  }

  /// Abandons the draft; nothing is saved.
  pub fn dismiss(&self) -> EntryOutcome {
    debug!(
      title_len = self.title.len(),
      "entry draft dismissed"
    );
    EntryOutcome::Close
  }
}

pub fn format_input_date(
  date: NaiveDate
) -> String {
  date
    .format(DATE_INPUT_FORMAT)
    .to_string()
}

pub fn parse_input_date(
  raw: &str
) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(
    raw.trim(),
    DATE_INPUT_FORMAT
  )
  .ok()
}

#[cfg(test)]
mod tests {
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
  fn draft_starts_from_selected_date() {
    let draft =
      EntryDraft::for_date(ymd(2024, 3, 5));
    assert_eq!(draft.title, "");
    assert_eq!(draft.date, "2024-03-05");
  }

  #[test]
  fn submit_builds_event_from_draft() {
    let mut draft =
      EntryDraft::for_date(ymd(2024, 3, 15));
    draft.set_title("Meeting");

    let event = draft
      .submit(&DateBounds::default())
      .expect("draft is valid");
    assert_eq!(event.title, "Meeting");
    assert_eq!(event.date, ymd(2024, 3, 15));
  }

  #[test]
  fn edited_date_wins_over_initial() {
    let mut draft =
      EntryDraft::for_date(ymd(2024, 3, 15));
    draft.set_title("Trip");
    draft.set_date("2024-04-02");

    let outcome = draft
      .outcome(&DateBounds::default())
      .expect("draft is valid");
    let EntryOutcome::Save(event) = outcome
    else {
      panic!("expected save outcome");
    };
    assert_eq!(event.date, ymd(2024, 4, 2));
  }

  #[test]
  fn only_an_empty_title_is_rejected() {
    let bounds = DateBounds::default();
    let mut draft =
      EntryDraft::for_date(ymd(2024, 3, 15));

    assert_eq!(
      draft.submit(&bounds),
      Err(DraftError::EmptyTitle)
    );
    assert!(!draft.is_submittable(&bounds));

    draft.set_title("   ");
    let event = draft
      .submit(&bounds)
      .expect("whitespace title is kept");
    assert_eq!(event.title, "   ");
  }

  #[test]
  fn dismissing_reports_close() {
    let mut draft =
      EntryDraft::for_date(ymd(2024, 3, 15));
    draft.set_title("Unsaved");

    assert_eq!(
      draft.dismiss(),
      EntryOutcome::Close
    );
  }

  #[test]
  fn date_must_be_present_and_well_formed() {
    let bounds = DateBounds::default();
    let mut draft = EntryDraft::default();
    draft.set_title("Call");

    assert_eq!(
      draft.validate(&bounds),
      Err(DraftError::MissingDate)
    );

    draft.set_date("15/03/2024");
    assert_eq!(
      draft.validate(&bounds),
      Err(DraftError::InvalidDate {
        raw: "15/03/2024".to_string()
      })
    );

    draft.set_date("2024-02-30");
    assert!(matches!(
      draft.validate(&bounds),
      Err(DraftError::InvalidDate { .. })
    ));
  }

  #[test]
  fn bounds_are_inclusive() {
    let bounds = DateBounds::default();
    let mut draft = EntryDraft::default();
    draft.set_title("Edge");

    draft.set_date("1970-01-01");
    assert!(draft.is_submittable(&bounds));
    draft.set_date("2200-01-01");
    assert!(draft.is_submittable(&bounds));

    draft.set_date("1969-12-31");
    assert_eq!(
      draft.validate(&bounds),
      Err(DraftError::OutOfRange {
        date: ymd(1969, 12, 31),
        min:  bounds.min,
        max:  bounds.max
      })
    );
    draft.set_date("2200-01-02");
    assert!(!draft.is_submittable(&bounds));
  }

  #[test]
  fn bounds_render_as_input_attributes() {
    let bounds = DateBounds::default();
    assert_eq!(bounds.input_min(), "1970-01-01");
    assert_eq!(bounds.input_max(), "2200-01-01");
  }
}

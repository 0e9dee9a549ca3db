use std::fmt;

use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

/// Opaque identifier of a note. Random v4 UUIDs, so two ids minted in
/// the same session collide only with negligible probability.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }

  pub fn as_uuid(&self) -> &Uuid {
    &self.0
  }
}

impl Default for EventId {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for EventId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "{}", self.0.hyphenated())
  }
}

/// A note attached to a single calendar day.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Event {
  pub id:    EventId,
  pub title: String,
  pub date:  NaiveDate
}

impl Event {
  pub fn new(
    title: impl Into<String>,
    date: NaiveDate
  ) -> Self {
    Self {
      id: EventId::new(),
      title: title.into(),
      date
    }
  }

  pub fn is_on(
    &self,
    day: NaiveDate
  ) -> bool {
    self.date == day
  }
}

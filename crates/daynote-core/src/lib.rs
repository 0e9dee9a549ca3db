//! Month-grid calendar with in-memory day notes.
//!
//! The crate holds everything the widget does besides drawing: month
//! arithmetic, the grid builder, the entry-form draft and the
//! calendar state machine. The `daynote_ui` crate renders it.

pub mod config;
pub mod draft;
pub mod error;
pub mod event;
pub mod grid;
pub mod month;
pub mod state;

pub use config::CalendarConfig;
pub use draft::{
  DateBounds,
  EntryDraft,
  EntryOutcome
};
pub use error::DraftError;
pub use event::{
  Event,
  EventId
};
pub use grid::{
  CalendarDay,
  GridOptions,
  build_month_grid,
  build_month_grid_with
};
pub use state::{
  CalendarAction,
  CalendarState
};

mod calendar_header;
mod day_cell;
mod entry_modal;
mod month_grid;
mod weekday_row;

pub use calendar_header::CalendarHeader;
pub use day_cell::DayCell;
pub use entry_modal::EntryModal;
pub use month_grid::MonthGrid;
pub use weekday_row::WeekdayRow;

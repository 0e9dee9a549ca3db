use chrono::{
  NaiveDate,
  Weekday
};
use daynote_core::CalendarDay;
use daynote_core::grid::weeks;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::{
  DayCell,
  WeekdayRow
};

#[derive(Properties, PartialEq)]
pub struct MonthGridProps {
  pub days:        Vec<CalendarDay>,
  pub week_start:  Weekday,
  pub today:       NaiveDate,
  pub on_open_day: Callback<NaiveDate>
}

#[function_component(MonthGrid)]
pub fn month_grid(
  props: &MonthGridProps
) -> Html {
  html! {
      <>
          <WeekdayRow week_start={props.week_start} />
          <div class="calendar-grid calendar-month-grid">
              {
                  for weeks(&props.days).map(|week| html! {
                      <div class="calendar-week-row">
                          {
                              for week.iter().map(|day| html! {
                                  <DayCell
                                      key={day.date.to_string()}
                                      day={day.clone()}
                                      is_today={day.date == props.today}
                                      on_open={props.on_open_day.clone()}
                                  />
                              })
                          }
                      </div>
                  })
              }
          </div>
      </>
  }
}

use chrono::NaiveDate;
use daynote_core::config::CalendarLabels;
use daynote_core::{
  DateBounds,
  EntryDraft,
  EntryOutcome
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_state
};

use crate::logging::ui_debug;

#[derive(Properties, PartialEq)]
pub struct EntryModalProps {
  pub selected_date: NaiveDate,
  pub bounds:        DateBounds,
  pub labels:        CalendarLabels,
  pub on_outcome:    Callback<EntryOutcome>
}

/// Form for a new note. Mounted only while the calendar's form is open,
/// so each opening starts from a fresh draft.
#[function_component(EntryModal)]
pub fn entry_modal(
  props: &EntryModalProps
) -> Html {
  let draft = {
    let selected = props.selected_date;
    use_state(move || {
      EntryDraft::for_date(selected)
    })
  };
  let bounds = props.bounds;
  let submittable =
    draft.is_submittable(&bounds);

  let on_title_input = {
    let draft = draft.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        let mut next = (*draft).clone();
        next.set_title(input.value());
        draft.set(next);
      }
    )
  };

  let on_date_input = {
    let draft = draft.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        let mut next = (*draft).clone();
        next.set_date(input.value());
        draft.set(next);
      }
    )
  };

  let on_submit = {
    let draft = draft.clone();
    let on_outcome =
      props.on_outcome.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      match draft.outcome(&bounds) {
        | Ok(outcome) => {
          ui_debug(
            "form.submit",
            "entry draft saved"
          );
          on_outcome.emit(outcome);
        }
        | Err(error) => {
          tracing::debug!(%error, "entry draft not submittable");
        }
      }
    })
  };

  let on_close_click = {
    let draft = draft.clone();
    let on_outcome =
      props.on_outcome.clone();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "modal.close.click",
        "entry form dismissed"
      );
      on_outcome.emit(draft.dismiss());
    })
  };

  html! {
      <div class="modal-backdrop" onclick={on_close_click.clone()}>
          <div class="modal modal-sm" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">
                  <span>{ props.labels.modal_title.clone() }</span>
                  <button type="button" class="btn icon" aria-label="close" onclick={on_close_click.clone()}>{ "×" }</button>
              </div>
              <form class="content" onsubmit={on_submit}>
                  <div class="field">
                      <label>{ props.labels.title_field.clone() }</label>
                      <input
                          type="text"
                          value={draft.title.clone()}
                          oninput={on_title_input}
                          required=true
                      />
                  </div>
                  <div class="field">
                      <label>{ props.labels.date_field.clone() }</label>
                      <input
                          type="date"
                          value={draft.date.clone()}
                          oninput={on_date_input}
                          min={bounds.input_min()}
                          max={bounds.input_max()}
                          required=true
                      />
                  </div>
                  <div class="footer">
                      <button type="button" class="btn" onclick={on_close_click}>{ props.labels.cancel.clone() }</button>
                      <button type="submit" class="btn btn-primary" disabled={!submittable}>
                          { props.labels.save.clone() }
                      </button>
                  </div>
              </form>
          </div>
      </div>
  }
}

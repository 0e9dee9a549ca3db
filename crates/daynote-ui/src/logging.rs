use gloo::console::log;

pub fn init() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();
}

/// Mirrors a UI interaction to tracing and the browser console.
pub fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

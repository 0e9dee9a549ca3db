mod app;
mod components;
mod logging;

const MOUNT_ID: &str = "app";

fn mount_point() -> Option<web_sys::Element> {
  web_sys::window()?
    .document()?
    .get_element_by_id(MOUNT_ID)
}

fn main() {
  logging::init();

  let Some(mount) = mount_point() else {
    tracing::error!(
      mount = MOUNT_ID,
      "mount element not found; calendar not rendered"
    );
    return;
  };

  tracing::info!(
    mount = MOUNT_ID,
    version = env!("CARGO_PKG_VERSION"),
    "rendering daynote calendar"
  );
  yew::Renderer::<app::App>::with_root(mount)
    .render();
}

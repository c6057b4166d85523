//! Card Canvas Frontend Entry Point

mod logger;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    log::info!("[APP] Mounting card canvas");
    mount_to_body(App);
}

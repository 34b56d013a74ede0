//! E-wallet Frontend Entry Point

mod commands;
mod local_prefs;
mod session;
mod context;
mod store;
mod components;
mod screens;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

//! Knock It Out Frontend Entry Point

mod app;
mod auth;
mod components;
mod context;
mod controller;
mod firestore;
mod knockout;
mod logging;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}

#![allow(warnings)]
//! Pure Color Painting Frontend Entry Point

mod models;
mod fetch;
mod filter;
mod scroll;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

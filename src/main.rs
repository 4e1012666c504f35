#![allow(warnings)]
//! Shelfmark Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod format;
mod models;
mod pages;
mod query;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

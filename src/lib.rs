//! Loginform - a login form with field-level validation
//!
//! A small isomorphic Leptos application: the headless form state and
//! validation schema live in [`core`], the rendering in [`ui`]. An accepted
//! submission is reported to the console and handed to an optional callback;
//! nothing is sent over the network.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

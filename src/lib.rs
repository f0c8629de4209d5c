use leptos::*;
use web_sys::console;

pub mod components;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use components::clock::Clock;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console::log_1(&"Starting Reloj (wasm)".into());

    mount_to_body(|| {
        view! { <Clock/> }
    });
}

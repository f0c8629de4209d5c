//! In-browser smoke test for the mounted hook.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use leptos::*;
use reloj::state::clock::use_current_time;
use reloj::state::ticker::Ticker;

#[wasm_bindgen_test]
fn hook_starts_and_stops_one_interval() {
    let baseline = Ticker::active_count();
    let runtime = create_runtime();
    let current = use_current_time();
    assert!(!current.get().time.is_empty());
    assert!(!current.get().date.is_empty());
    assert_eq!(Ticker::active_count(), baseline + 1);
    runtime.dispose();
    assert_eq!(Ticker::active_count(), baseline);
}

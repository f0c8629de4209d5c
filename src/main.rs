use leptos::*;
use log::info;

use reloj::components::clock::Clock;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    info!("Starting Reloj demo");

    mount_to_body(|| {
        view! { <Clock/> }
    });
}

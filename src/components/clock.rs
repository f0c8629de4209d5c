use leptos::*;

use crate::state::clock::use_current_time;

/// Clock card: long-form date above the ticking time.
#[component]
pub fn Clock() -> impl IntoView {
    let current = use_current_time();

    // Format date: "jueves, 7 de marzo de 2024"
    let date_str = move || current.get().date;

    // Format time: "15:04:05"
    let time_str = move || current.get().time;

    view! {
        <div class="bg-gradient-to-br from-action-primary-bg to-action-primary-bg-hover text-text-inverse border-none shadow-lg rounded-lg overflow-hidden">
            <div class="flex flex-col items-center justify-center py-4 space-y-2">
                <div class="text-lg font-medium opacity-90">
                    {date_str}
                </div>
                <div class="text-4xl font-bold tracking-wider font-mono">
                    {time_str}
                </div>
            </div>
        </div>
    }
}

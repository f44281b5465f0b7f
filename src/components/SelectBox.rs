/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::icons::{CheckIcon, ChevronUpDownIcon};
use crate::ui_state::{Dropdown, SkipReason};
use leptos::*;

/// Click-to-open single choice list over the skip reasons.
#[component]
pub fn SelectBox(dropdown: RwSignal<Dropdown<SkipReason>>) -> impl IntoView {
    let is_open = move || dropdown.with(Dropdown::is_open);

    view! {
        <div class="relative">
            <div
                role="button"
                aria-haspopup="listbox"
                aria-expanded=move || is_open().to_string()
                data-testid="select-control"
                on:click=move |_| dropdown.update(Dropdown::toggle)
                class="flex w-full cursor-pointer items-center justify-between rounded-md border border-gray-600 bg-gray-700 px-3 py-1.5 text-sm text-white"
            >
                <span>{move || dropdown.with(|d| d.selected().label())}</span>
                <ChevronUpDownIcon class="h-4 w-4 text-gray-400"/>
            </div>
            <Show when=is_open fallback=|| ()>
                <div
                    role="listbox"
                    class="absolute top-full right-0 left-0 z-10 mt-1 rounded-md border border-gray-600 bg-gray-700 py-1 shadow-lg"
                >
                    {SkipReason::ALL
                        .into_iter()
                        .map(|reason| view! { <SelectOption dropdown=dropdown reason=reason/> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SelectOption(dropdown: RwSignal<Dropdown<SkipReason>>, reason: SkipReason) -> impl IntoView {
    let selected = move || dropdown.with(|d| d.is_selected(reason));

    view! {
        <div
            role="option"
            aria-selected=move || selected().to_string()
            on:click=move |_| dropdown.update(|d| d.select(reason))
            class=move || {
                format!(
                    "flex cursor-pointer items-center px-3 py-1.5 text-sm {}",
                    if selected() { "bg-blue-600 text-white" } else { "text-gray-200 hover:bg-gray-600" },
                )
            }
        >
            {move || {
                if selected() {
                    view! { <CheckIcon class="mr-2 h-4 w-4"/> }.into_view()
                } else {
                    view! { <span class="mr-2 h-4 w-4"></span> }.into_view()
                }
            }}
            {reason.label()}
        </div>
    }
}

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

//! Inline heroicons (20px solid set) plus the two glyphs the editor mock draws itself.

use leptos::*;

#[component]
fn SolidIcon(class: String, d: &'static str) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path fill-rule="evenodd" clip-rule="evenodd" d=d/>
        </svg>
    }
}

#[component]
pub fn ChevronRightIcon(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <SolidIcon
            class=class
            d="M8.22 5.22a.75.75 0 0 1 1.06 0l4.25 4.25a.75.75 0 0 1 0 1.06l-4.25 4.25a.75.75 0 0 1-1.06-1.06L11.94 10 8.22 6.28a.75.75 0 0 1 0-1.06Z"
        />
    }
}

#[component]
pub fn ChevronUpDownIcon(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <SolidIcon
            class=class
            d="M10.53 3.47a.75.75 0 0 0-1.06 0L6.22 6.72a.75.75 0 0 0 1.06 1.06L10 5.06l2.72 2.72a.75.75 0 1 0 1.06-1.06l-3.25-3.25Zm-4.31 9.81 3.25 3.25a.75.75 0 0 0 1.06 0l3.25-3.25a.75.75 0 1 0-1.06-1.06L10 14.94l-2.72-2.72a.75.75 0 0 0-1.06 1.06Z"
        />
    }
}

#[component]
pub fn PlayIcon(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <SolidIcon
            class=class
            d="M6.3 2.84A1.5 1.5 0 0 0 4 4.11v11.78a1.5 1.5 0 0 0 2.3 1.27l9.344-5.891a1.5 1.5 0 0 0 0-2.538L6.3 2.841Z"
        />
    }
}

#[component]
pub fn XMarkIcon(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <SolidIcon
            class=class
            d="M6.28 5.22a.75.75 0 0 0-1.06 1.06L8.94 10l-3.72 3.72a.75.75 0 1 0 1.06 1.06L10 11.06l3.72 3.72a.75.75 0 1 0 1.06-1.06L11.06 10l3.72-3.72a.75.75 0 0 0-1.06-1.06L10 8.94 6.28 5.22Z"
        />
    }
}

#[component]
pub fn CheckIcon(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <SolidIcon
            class=class
            d="M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z"
        />
    }
}

/// Thin outline cross used in the mock dialog's title bar.
#[component]
pub fn CloseOutlineIcon() -> impl IntoView {
    view! {
        <svg class="h-4 w-4" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
        </svg>
    }
}

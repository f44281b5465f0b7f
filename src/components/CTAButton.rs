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

use leptos::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    /// Solid everforest green, used for the hero call to action.
    Primary,
    /// Green confirm button inside the mock editor dialog.
    Confirm,
    /// Bare text link.
    Text,
}

#[derive(Clone, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
}

#[component]
pub fn CTAButton(
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(default = String::new(), into)] class: String,
    #[prop(default = None)] href: Option<String>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
) -> impl IntoView {
    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-everforest-600 hover:bg-everforest-500 focus-visible:outline-everforest-600 dark:bg-everforest-500 dark:hover:bg-everforest-400 dark:focus-visible:outline-everforest-500 rounded-md font-semibold text-white shadow-xs focus-visible:outline-2 focus-visible:outline-offset-2",
        ButtonVariant::Confirm => "rounded-md bg-green-600 font-medium text-white hover:bg-green-500",
        ButtonVariant::Text => "font-semibold text-gray-900 dark:text-white",
    };

    let size_classes = match (&variant, size) {
        (ButtonVariant::Text, _) => "text-sm/6",
        (_, ButtonSize::Small) => "px-3 py-1 text-xs",
        (_, ButtonSize::Medium) => "px-3.5 py-2.5 text-sm",
    };

    let combined_class = format!("{variant_classes} {size_classes} {class}");

    match href {
        Some(href) => view! {
            <a href=href class=combined_class>
                {children()}
            </a>
        }
        .into_view(),
        None => view! {
            <button
                type="button"
                class=combined_class
                on:click=move |ev| {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(ev);
                    }
                }
            >
                {children()}
            </button>
        }
        .into_view(),
    }
}

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

use crate::components::Page::*;
use crate::errors::SiteError;
use leptos::*;
#[cfg(feature = "ssr")]
use leptos_axum::ResponseOptions;

// A basic function to display errors served by the error boundaries.
// Feel free to do more complicated things here than just displaying them.
#[component]
pub fn ErrorTemplate(outside_errors: Errors) -> impl IntoView {
    // Downcast lets us take a type that implements `std::error::Error`
    let errors: Vec<SiteError> = outside_errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<SiteError>().cloned())
        .collect();
    log::warn!("rendering error page: {errors:?}");

    // Only the response code for the first error is actually sent from the server
    #[cfg(feature = "ssr")]
    {
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    view! {
        <Page>
            <div class="flex min-h-screen flex-col items-center justify-center gap-4 text-gray-900 dark:text-white">
                <h1 class="text-4xl font-semibold">
                    {if errors.len() > 1 { "Errors" } else { "Error" }}
                </h1>
                <For
                    each=move || errors.clone().into_iter().enumerate()
                    key=|(index, _error)| *index
                    children=move |(_, error)| {
                        let error_string = error.to_string();
                        let error_code = error.status_code();
                        view! {
                            <h2 class="text-2xl text-everforest-600">{error_code.to_string()}</h2>
                            <p class="text-gray-500">"Error: " {error_string}</p>
                        }
                    }
                />
                <a href="/" class="text-sm/6 font-semibold">
                    "Back to the harvest "
                    <span aria-hidden="true">"→"</span>
                </a>
            </div>
        </Page>
    }
}

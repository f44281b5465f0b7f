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

use crate::showcase::{annotate_line, plain_code_html, SOURCE};
use leptos::*;

#[server(HighlightShowcase, "/api", "GetJSON")]
pub async fn highlight_showcase() -> Result<String, ServerFnError> {
    crate::highlight::showcase_html().map_err(|e| {
        log::error!("failed to highlight showcase snippet: {e}");
        ServerFnError::ServerError(e.to_string())
    })
}

/// Pre-rendered code markup, trusted because it never contains user input.
#[component]
pub fn CodeExample(#[prop(into)] html: String) -> impl IntoView {
    view! { <div class="bg-everforest-950 px-6 py-6" inner_html=html></div> }
}

/// The showcase snippet, coloured by the server when it can be reached.
#[component]
pub fn ShowcaseCode() -> impl IntoView {
    let highlighted = create_resource(|| (), |_| highlight_showcase());
    let plain = || plain_code_html(SOURCE, annotate_line);

    view! {
        <Suspense fallback=move || view! { <CodeExample html=plain()/> }>
            {move || {
                highlighted
                    .get()
                    .map(|result| match result {
                        Ok(html) => view! { <CodeExample html=html/> }.into_view(),
                        Err(e) => {
                            log::warn!("showing plain showcase snippet: {e}");
                            view! { <CodeExample html=plain()/> }.into_view()
                        }
                    })
            }}
        </Suspense>
    }
}

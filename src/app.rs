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

use crate::error_template::ErrorTemplate;
use crate::errors::SiteError;
use crate::pages::Home::*;
use crate::site::{DESCRIPTION, HEADLINE, PRODUCT_NAME};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    let formatter = |text| format!("{text} - {PRODUCT_NAME}");
    provide_meta_context();

    let json_ld = format!(
        r#"{{
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": "{PRODUCT_NAME}",
        "applicationCategory": "DeveloperApplication",
        "description": "{DESCRIPTION}"
    }}"#
    );

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/midharvest_website.css"/>
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg"/>
        <Title formatter/>
        <Meta name="description" content=DESCRIPTION/>
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content=PRODUCT_NAME/>
        <Meta property="og:title" content=format!("{PRODUCT_NAME} - {HEADLINE}")/>
        <Meta property="og:description" content=DESCRIPTION/>

        <Router fallback=|| {
            let mut outside_errors = Errors::default();
            outside_errors.insert_with_default_key(SiteError::NotFound);
            view! { <ErrorTemplate outside_errors/> }.into_view()
        }>
            <Routes>
                <Route path="" view=Home ssr=SsrMode::Async/>
            </Routes>
        </Router>
        <script type="application/ld+json">{json_ld}</script>
    }
}

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

#![cfg(target_arch = "wasm32")]

use leptos::*;
use midharvest_website::components::LineEditorDialog::LineEditorDialog;
use midharvest_website::components::VideoModal::{VideoModal, VideoModalProvider, WatchVideoButton};
use midharvest_website::error_template::ErrorTemplate;
use midharvest_website::errors::SiteError;
use midharvest_website::site::VIDEO_MODAL_OPEN_ON_LOAD;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

const DIALOG: &str = "[role=dialog]";

/// Lets queued effects run.
async fn tick() {
    let resolved = js_sys::Promise::resolve(&wasm_bindgen::JsValue::NULL);
    wasm_bindgen_futures::JsFuture::from(resolved)
        .await
        .expect("resolved promise");
}

fn mount<F, N>(f: F) -> HtmlElement
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let container: HtmlElement = document()
        .create_element("div")
        .expect("create container")
        .unchecked_into();
    document()
        .body()
        .expect("body")
        .append_child(&container)
        .expect("append container");
    mount_to(container.clone(), f);
    container
}

fn mount_modal(open: bool) -> HtmlElement {
    mount(move || {
        view! {
            <VideoModalProvider initially_open=open>
                <WatchVideoButton/>
                <VideoModal/>
            </VideoModalProvider>
        }
    })
}

fn find(container: &HtmlElement, selector: &str) -> Option<HtmlElement> {
    container
        .query_selector(selector)
        .expect("valid selector")
        .map(JsCast::unchecked_into)
}

fn press(key: &str) {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key(key);
    let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    window().dispatch_event(&event).expect("dispatch keydown");
}

fn body_overflow() -> String {
    document()
        .body()
        .expect("body")
        .style()
        .get_property_value("overflow")
        .expect("overflow")
}

#[wasm_bindgen_test]
async fn escape_closes_modal_and_restores_scroll() {
    let container = mount_modal(true);
    tick().await;

    assert!(find(&container, DIALOG).is_some());
    assert_eq!(body_overflow(), "hidden");

    press("Enter");
    tick().await;
    assert!(find(&container, DIALOG).is_some());

    press("Escape");
    tick().await;
    assert!(find(&container, DIALOG).is_none());
    assert_eq!(body_overflow(), "");

    press("Escape");
    tick().await;
    assert!(find(&container, DIALOG).is_none());

    container.remove();
}

#[wasm_bindgen_test]
async fn only_backdrop_clicks_dismiss() {
    let container = mount_modal(true);
    tick().await;

    find(&container, "[data-testid=video-frame]")
        .expect("video frame")
        .click();
    tick().await;
    assert!(find(&container, DIALOG).is_some());

    find(&container, "[data-testid=video-backdrop]")
        .expect("backdrop")
        .click();
    tick().await;
    assert!(find(&container, DIALOG).is_none());
    assert_eq!(body_overflow(), "");

    container.remove();
}

#[wasm_bindgen_test]
async fn watch_video_opens_player_and_close_button_dismisses() {
    let container = mount_modal(false);
    tick().await;
    assert!(find(&container, DIALOG).is_none());

    find(&container, "button").expect("watch video button").click();
    tick().await;

    let player = find(&container, "iframe").expect("embedded player");
    let src = player.get_attribute("src").unwrap_or_default();
    assert!(src.starts_with("https://www.youtube.com/embed/"));
    assert_eq!(body_overflow(), "hidden");

    find(&container, "[data-testid=video-close]")
        .expect("close button")
        .click();
    tick().await;
    assert!(find(&container, DIALOG).is_none());
    assert_eq!(body_overflow(), "");

    container.remove();
}

#[wasm_bindgen_test]
async fn choosing_a_reason_updates_label_and_closes_list() {
    let container = mount(|| {
        view! {
            <VideoModalProvider initially_open=false>
                <LineEditorDialog/>
            </VideoModalProvider>
        }
    });
    tick().await;

    let label = || {
        find(&container, "[data-testid=select-control] span")
            .and_then(|span| span.text_content())
            .unwrap_or_default()
    };
    assert_eq!(label(), "Branch state can't be produced");
    assert!(find(&container, "[role=listbox]").is_some());

    find(&container, "[role=listbox] > div:nth-child(2)")
        .expect("second option")
        .click();
    tick().await;
    assert_eq!(label(), "Not enough time");
    assert!(find(&container, "[role=listbox]").is_none());

    find(&container, "[data-testid=select-control]")
        .expect("select control")
        .click();
    tick().await;
    assert!(find(&container, "[role=listbox]").is_some());
    assert_eq!(label(), "Not enough time");

    container.remove();
}

#[wasm_bindgen_test]
async fn page_load_shows_player() {
    let container = mount(|| {
        view! {
            <VideoModalProvider initially_open=VIDEO_MODAL_OPEN_ON_LOAD>
                <VideoModal/>
            </VideoModalProvider>
        }
    });
    tick().await;
    assert!(find(&container, DIALOG).is_some());

    press("Escape");
    tick().await;
    assert!(find(&container, DIALOG).is_none());

    container.remove();
}

#[wasm_bindgen_test]
async fn unmounting_open_modal_releases_scroll_and_keys() {
    let (shown, set_shown) = create_signal(true);
    let container = mount(move || {
        view! {
            <Show when=move || shown.get() fallback=|| ()>
                <VideoModalProvider initially_open=true>
                    <VideoModal/>
                </VideoModalProvider>
            </Show>
        }
    });
    tick().await;
    assert!(find(&container, DIALOG).is_some());
    assert_eq!(body_overflow(), "hidden");

    set_shown.set(false);
    tick().await;
    assert!(find(&container, DIALOG).is_none());
    assert_eq!(body_overflow(), "");

    // the listener is gone, so this must not reach the disposed signal
    press("Escape");
    tick().await;
    assert!(find(&container, DIALOG).is_none());
    assert_eq!(body_overflow(), "");

    container.remove();
}

#[wasm_bindgen_test]
async fn error_page_shows_status() {
    let container = mount(|| {
        let mut outside_errors = Errors::default();
        outside_errors.insert_with_default_key(SiteError::NotFound);
        view! { <ErrorTemplate outside_errors/> }
    });
    tick().await;

    let text = container.text_content().unwrap_or_default();
    assert!(text.contains("404"));
    assert!(text.contains("Error: Not Found"));

    container.remove();
}

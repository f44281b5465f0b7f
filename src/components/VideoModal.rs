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

use std::cell::RefCell;
use std::rc::Rc;

use crate::components::CTAButton::*;
use crate::icons::{PlayIcon, XMarkIcon};
use crate::scroll_lock::{lock_body, ScrollLock};
use crate::site::{youtube_embed_url, VIDEO_ALLOW, YOUTUBE_VIDEO_ID};
use crate::ui_state::{DismissReason, VideoModalState};
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;

/// Shares the modal's open flag between the overlay and every button that opens it.
#[island]
pub fn VideoModalProvider(initially_open: bool, children: Children) -> impl IntoView {
    provide_context(RwSignal::new(VideoModalState::new(initially_open)));
    children()
}

#[island]
pub fn WatchVideoButton() -> impl IntoView {
    let modal = expect_context::<RwSignal<VideoModalState>>();

    view! {
        <CTAButton
            class="flex gap-x-1"
            on_click=Callback::new(move |_| modal.update(VideoModalState::open))
        >
            <PlayIcon class="size-5"/>
            <div>"Watch Video"</div>
        </CTAButton>
    }
}

/// Everything the modal holds on to while it is showing. Dropping it gives
/// all of it back.
struct ModalSession {
    keys: Option<WindowListenerHandle>,
    _scroll: Option<ScrollLock<web_sys::HtmlElement>>,
}

impl ModalSession {
    fn start(modal: RwSignal<VideoModalState>) -> Self {
        let keys = window_event_listener(ev::keydown, move |ev| {
            let mut next = modal.get_untracked();
            if next.handle_key(&ev.key()) {
                modal.set(next);
            }
        });
        Self {
            keys: Some(keys),
            _scroll: lock_body(),
        }
    }
}

impl Drop for ModalSession {
    fn drop(&mut self) {
        if let Some(keys) = self.keys.take() {
            keys.remove();
        }
    }
}

#[island]
pub fn VideoModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<VideoModalState>>();
    let is_open = move || modal.with(VideoModalState::is_open);
    let dismiss = move |reason: DismissReason| modal.update(|m| m.dismiss(reason));

    let session: Rc<RefCell<Option<ModalSession>>> = Rc::default();
    create_effect({
        let session = Rc::clone(&session);
        move |_| {
            let open = is_open();
            let mut session = session.borrow_mut();
            if !open {
                *session = None;
            } else if session.is_none() {
                *session = Some(ModalSession::start(modal));
            }
        }
    });
    on_cleanup(move || {
        session.borrow_mut().take();
    });

    let embed_url = youtube_embed_url(YOUTUBE_VIDEO_ID);

    view! {
        <Show when=is_open fallback=|| ()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center"
                role="dialog"
                aria-modal="true"
                aria-label="Video player"
            >
                <div
                    class="absolute inset-0 bg-black/90 backdrop-blur-sm"
                    data-testid="video-backdrop"
                    on:click=move |_| dismiss(DismissReason::Backdrop)
                ></div>

                <div class="relative z-10 w-full max-w-5xl px-4">
                    <button
                        class="absolute -top-12 right-4 flex items-center gap-2 text-white/70 transition-colors hover:text-white"
                        data-testid="video-close"
                        on:click=move |_| dismiss(DismissReason::CloseButton)
                    >
                        <span class="text-sm font-medium">"Close"</span>
                        <XMarkIcon class="size-6"/>
                    </button>

                    // 16:9
                    <div
                        class="relative overflow-hidden rounded-2xl bg-black shadow-2xl ring-1 ring-white/10"
                        data-testid="video-frame"
                    >
                        <div class="relative w-full" style="padding-bottom: 56.25%">
                            <iframe
                                class="absolute inset-0 h-full w-full"
                                src=embed_url.clone()
                                title="Video player"
                                allow=VIDEO_ALLOW
                                allowfullscreen=true
                            ></iframe>
                        </div>
                    </div>

                    <p class="mt-4 text-center text-sm text-white/50">
                        "Press "
                        <kbd class="rounded bg-white/10 px-1.5 py-0.5 font-mono text-xs">"Esc"</kbd>
                        " to close"
                    </p>
                </div>
            </div>
        </Show>
    }
}

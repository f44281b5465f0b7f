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

use crate::components::EditorMock::*;
use crate::components::HeroHeader::*;
use crate::components::Page::*;
use crate::components::VideoModal::*;
use crate::site::VIDEO_MODAL_OPEN_ON_LOAD;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="Home"/>
        <Page>
            <VideoModalProvider initially_open=VIDEO_MODAL_OPEN_ON_LOAD>
                <VideoModal/>
                <div class="from-everforest-100/20 dark:from-everforest-950/10 relative isolate flex min-h-screen items-center overflow-hidden bg-linear-to-b">
                    <div class="mx-auto h-full max-w-7xl pt-10 pb-24 sm:pb-32 lg:grid lg:grid-cols-7 lg:gap-x-8 lg:px-8 lg:py-40">
                        <HeroHeader/>
                        <EditorMock/>
                    </div>
                    <div class="absolute inset-x-0 bottom-0 -z-10 h-24 bg-linear-to-t from-white sm:h-32 dark:from-gray-900"></div>
                </div>
            </VideoModalProvider>
        </Page>
    }
}

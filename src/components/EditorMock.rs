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

use crate::components::CodeExample::*;
use crate::components::LineEditorDialog::*;
use crate::showcase::{ACTIVE_FILE, OTHER_FILE};
use leptos::*;

/// Right-hand "screenshot" of the editor: file tabs, the snippet and the
/// line editor dialog floating over it.
#[component]
pub fn EditorMock() -> impl IntoView {
    view! {
        <div class="mt-20 sm:mt-24 md:mx-auto md:max-w-2xl lg:col-span-3 lg:mx-0 lg:mt-0">
            <div
                aria-hidden="true"
                class="shadow-everforest-600/10 ring-everforest-50 dark:shadow-everforest-400/10 absolute inset-y-0 right-1/2 -z-10 -mr-10 w-[200%] skew-x-[-30deg] bg-white shadow-xl ring-1 md:-mr-20 lg:-mr-36 dark:bg-gray-800/30 dark:ring-white/5"
            ></div>
            <div class="shadow-lg md:rounded-3xl">
                <div class="bg-everforest-600 [clip-path:inset(0)] md:[clip-path:inset(0_round_var(--radius-3xl))]">
                    <div
                        aria-hidden="true"
                        class="bg-everforest-100 absolute -inset-y-px left-1/2 -z-10 ml-10 w-[200%] skew-x-[-30deg] opacity-20 inset-ring inset-ring-white md:ml-20 lg:ml-36"
                    ></div>
                    <div class="relative px-6 pt-8 sm:pt-16 md:pr-0 md:pl-16">
                        <div class="mx-auto max-w-2xl md:mx-0 md:max-w-none">
                            <div class="relative w-full overflow-hidden rounded-tl-xl bg-gray-900">
                                <LineEditorDialog/>
                                <FileTabs/>
                                <ShowcaseCode/>
                            </div>
                        </div>
                        <div
                            aria-hidden="true"
                            class="pointer-events-none absolute inset-0 ring-1 ring-black/10 ring-inset md:rounded-3xl dark:ring-white/10"
                        ></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FileTabs() -> impl IntoView {
    view! {
        <div class="flex bg-gray-800/40 ring-1 ring-white/5">
            <div class="-mb-px flex text-sm/6 font-medium text-gray-400">
                <div class="border-r border-b border-r-white/10 border-b-white/20 bg-white/5 px-4 py-2 text-white">
                    {ACTIVE_FILE}
                </div>
                <div class="border-r border-gray-600/10 px-4 py-2">{OTHER_FILE}</div>
            </div>
        </div>
    }
}

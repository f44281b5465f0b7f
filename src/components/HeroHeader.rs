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

use crate::components::CTAButton::*;
use crate::components::VideoModal::WatchVideoButton;
use crate::icons::ChevronRightIcon;
use crate::site::{GITHUB_HREF, HEADLINE, PRODUCT_NAME, RELEASE_LABEL, TAGLINE};
use leptos::*;

#[component]
pub fn HeroHeader() -> impl IntoView {
    view! {
        <div class="h-full px-6 lg:col-span-4 lg:px-0 lg:pt-4">
            <div class="mx-auto h-full max-w-2xl">
                <div class="flex h-full max-w-xl flex-col">
                    <div class="text-4xl font-semibold">{format!("🌾 {PRODUCT_NAME}")}</div>
                    <div class="flex flex-1 items-center">
                        <div>
                            <ReleaseBadge/>
                            <h1 class="mt-10 text-6xl font-semibold tracking-tight text-pretty text-gray-900 sm:text-7xl dark:text-white">
                                {HEADLINE}
                            </h1>
                            <p class="mt-8 text-lg font-medium text-pretty text-gray-500 sm:text-xl/8 dark:text-gray-400">
                                {TAGLINE}
                            </p>
                            <div class="mt-10 flex items-center gap-x-6">
                                <WatchVideoButton/>
                                <CTAButton
                                    variant=ButtonVariant::Text
                                    href=Some(GITHUB_HREF.to_string())
                                >
                                    "View on GitHub "
                                    <span aria-hidden="true">"→"</span>
                                </CTAButton>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ReleaseBadge() -> impl IntoView {
    view! {
        <div class="mt-4 lg:mt-0">
            <a href="#" class="inline-flex space-x-6">
                <span class="bg-everforest-50 text-everforest-600 ring-everforest-600/20 dark:bg-everforest-500/10 dark:text-everforest-400 dark:ring-everforest-500/25 rounded-full px-3 py-1 text-sm/6 font-semibold ring-1 ring-inset">
                    "What's new"
                </span>
                <span class="inline-flex items-center space-x-2 text-sm/6 font-medium text-gray-600 dark:text-gray-300">
                    <span>{RELEASE_LABEL}</span>
                    <ChevronRightIcon class="size-5 text-gray-400 dark:text-gray-500"/>
                </span>
            </a>
        </div>
    }
}

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
use crate::components::SelectBox::*;
use crate::icons::CloseOutlineIcon;
use crate::showcase::DIALOG_LINE;
use crate::ui_state::{Dropdown, SkipReason, VideoModalState};
use leptos::*;

/// The floating "Edit line" dialog drawn over the editor mock.
#[island]
pub fn LineEditorDialog() -> impl IntoView {
    let dropdown = RwSignal::new(Dropdown::<SkipReason>::default());
    let modal = expect_context::<RwSignal<VideoModalState>>();

    let apply = Callback::new(move |_| {
        log::debug!(
            "applying skip reason {:?}",
            dropdown.with_untracked(Dropdown::selected)
        );
        modal.update(VideoModalState::open);
    });

    view! {
        <div class="absolute top-57 left-1/2 z-20 -translate-x-1/2 transform">
            <div class="w-72 rounded-lg border border-gray-600 bg-gray-800 shadow-2xl">
                <div class="flex items-center justify-between border-b border-gray-700 px-3 py-2">
                    <span class="text-xs font-medium text-gray-300">
                        {format!("Edit line {DIALOG_LINE}")}
                    </span>
                    // decorative, the dialog never closes
                    <button class="text-gray-400" tabindex="-1">
                        <CloseOutlineIcon/>
                    </button>
                </div>
                <div class="p-3">
                    <label class="mb-1.5 block text-xs font-medium text-gray-400">
                        "Select option"
                    </label>
                    <SelectBox dropdown=dropdown/>
                </div>
                <div class="flex justify-end gap-2 border-t border-gray-700 px-3 py-2">
                    <CTAButton
                        variant=ButtonVariant::Confirm
                        size=ButtonSize::Small
                        on_click=apply
                    >
                        "Apply"
                    </CTAButton>
                </div>
            </div>
        </div>
    }
}

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

//! Fixed copy, links and defaults for the landing page.

pub const PRODUCT_NAME: &str = "Midharvest";
pub const RELEASE_LABEL: &str = "Just shipped v0.1";
pub const HEADLINE: &str = "Grow better code";
pub const TAGLINE: &str = "Boost your confidence with collaborative testing governance.";
pub const GITHUB_HREF: &str = "//github.com/marketplace";
pub const DESCRIPTION: &str =
    "Midharvest grows better code with collaborative testing governance.";

/// YouTube id of the product walkthrough.
pub const YOUTUBE_VIDEO_ID: &str = "dQw4w9WgXcQ";

pub const VIDEO_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Whether the video modal is showing when the page first loads.
pub const VIDEO_MODAL_OPEN_ON_LOAD: bool = true;

/// Whether the mock editor's dropdown is expanded when the page first loads.
pub const DROPDOWN_OPEN_ON_LOAD: bool = true;

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?autoplay=1&rel=0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_autoplays_without_related_videos() {
        assert_eq!(
            youtube_embed_url(YOUTUBE_VIDEO_ID),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&rel=0"
        );
    }
}

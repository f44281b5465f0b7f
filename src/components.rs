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

pub mod CTAButton;
pub mod CodeExample;
pub mod EditorMock;
pub mod HeroHeader;
pub mod LineEditorDialog;
pub mod Page;
pub mod SelectBox;
pub mod VideoModal;

pub use CTAButton::*;
pub use CodeExample::*;
pub use EditorMock::*;
pub use HeroHeader::*;
pub use Page::*;
pub use VideoModal::*;

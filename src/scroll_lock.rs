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

//! Suppresses page scrolling while an overlay is showing.

/// Something with an inline `overflow` style, normally `document.body`.
pub trait OverflowStyle {
    /// Current inline value, empty when unset.
    fn overflow(&self) -> String;

    /// Writes the inline value. An empty string removes the property.
    fn set_overflow(&self, value: &str);
}

impl OverflowStyle for web_sys::HtmlElement {
    fn overflow(&self) -> String {
        self.style()
            .get_property_value("overflow")
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let style = self.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if let Err(e) = result {
            log::warn!("failed to set overflow to {value:?}: {e:?}");
        }
    }
}

/// Holds `overflow: hidden` on the target until dropped, then puts back
/// whatever was there before.
pub struct ScrollLock<T: OverflowStyle> {
    target: T,
    previous: String,
}

impl<T: OverflowStyle> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow("hidden");
        Self { target, previous }
    }
}

impl<T: OverflowStyle> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow(&self.previous);
    }
}

/// Locks `document.body`, if there is one.
pub fn lock_body() -> Option<ScrollLock<web_sys::HtmlElement>> {
    leptos::document().body().map(ScrollLock::acquire)
}

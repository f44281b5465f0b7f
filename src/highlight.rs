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

//! Server-side syntax highlighting for the showcase snippet.
//!
//! tree-sitter does the tokenising; this module only maps capture names to the
//! theme's colours and wraps each line the way the editor mock expects.

use cached::proc_macro::once;
use tree_sitter_highlight::{HighlightConfiguration, Highlighter, HtmlRenderer};

use crate::showcase::line_span;

/// A colour theme keyed by tree-sitter capture names.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
    pub captures: &'static [(&'static str, &'static str)],
}

impl Theme {
    pub fn capture_names(&self) -> Vec<&'static str> {
        self.captures.iter().map(|(name, _)| *name).collect()
    }

    pub fn color_of(&self, capture: &str) -> Option<&'static str> {
        self.captures
            .iter()
            .find(|(name, _)| *name == capture)
            .map(|(_, color)| *color)
    }
}

pub const EVERFOREST_DARK: Theme = Theme {
    name: "everforest-dark",
    background: "#2d353b",
    foreground: "#d3c6aa",
    captures: &[
        ("comment", "#859289"),
        ("constant", "#d699b6"),
        ("constant.builtin", "#d699b6"),
        ("escape", "#e69875"),
        ("function", "#a7c080"),
        ("function.builtin", "#a7c080"),
        ("function.method", "#a7c080"),
        ("keyword", "#e67e80"),
        ("label", "#e69875"),
        ("number", "#d699b6"),
        ("operator", "#e69875"),
        ("property", "#7fbbb3"),
        ("punctuation", "#859289"),
        ("punctuation.bracket", "#859289"),
        ("punctuation.delimiter", "#859289"),
        ("string", "#83c092"),
        ("type", "#dbbc7f"),
        ("type.builtin", "#dbbc7f"),
        ("variable", "#d3c6aa"),
        ("variable.parameter", "#d3c6aa"),
    ],
};

/// Looks a theme up by the name the snippet asks for.
pub fn theme_named(name: &str) -> Option<&'static Theme> {
    match name {
        "everforest-dark" => Some(&EVERFOREST_DARK),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error("unsupported language {0:?}")]
    UnsupportedLanguage(String),
    #[error("unknown theme {0:?}")]
    UnknownTheme(String),
    #[error("highlight query failed to compile: {0}")]
    Query(#[from] tree_sitter::QueryError),
    #[error("highlighting failed: {0:?}")]
    Render(tree_sitter_highlight::Error),
}

impl From<tree_sitter_highlight::Error> for HighlightError {
    fn from(e: tree_sitter_highlight::Error) -> Self {
        HighlightError::Render(e)
    }
}

fn configuration(language: &str, theme: &Theme) -> Result<HighlightConfiguration, HighlightError> {
    let mut config = match language {
        "go" => HighlightConfiguration::new(
            tree_sitter_go::LANGUAGE.into(),
            "go",
            tree_sitter_go::HIGHLIGHTS_QUERY,
            "",
            "",
        )?,
        other => return Err(HighlightError::UnsupportedLanguage(other.to_string())),
    };
    config.configure(&theme.capture_names());
    Ok(config)
}

/// Renders `source` to a `<pre><code>` block with one `line` span per line.
///
/// `annotate` receives 1-based line numbers and may return an extra class
/// for that line.
pub fn code_to_html(
    source: &str,
    language: &str,
    theme: &Theme,
    annotate: impl Fn(usize) -> Option<&'static str>,
) -> Result<String, HighlightError> {
    let config = configuration(language, theme)?;
    let source = source.trim_end_matches('\n');

    let names = theme.capture_names();

    let mut highlighter = Highlighter::new();
    let events = highlighter.highlight(&config, source.as_bytes(), None, |_| None)?;
    let mut renderer = HtmlRenderer::new();
    renderer.render(events, source.as_bytes(), &|highlight, out: &mut Vec<u8>| {
        if let Some(color) = names.get(highlight.0).and_then(|name| theme.color_of(name)) {
            out.extend_from_slice(format!("style=\"color:{color}\"").as_bytes());
        }
    })?;

    let lines: Vec<String> = renderer
        .lines()
        .enumerate()
        .map(|(i, line)| line_span(line.trim_end_matches('\n'), annotate(i + 1)))
        .collect();

    Ok(format!(
        "<pre class=\"code-highlight {}\" style=\"background-color:{};color:{}\" tabindex=\"0\"><code>{}</code></pre>",
        theme.name,
        theme.background,
        theme.foreground,
        lines.join("\n")
    ))
}

/// The editor mock's snippet, rendered once per process.
#[once(result = true)]
pub fn showcase_html() -> Result<String, HighlightError> {
    use crate::showcase::{annotate_line, LANGUAGE, SOURCE, THEME};

    let theme = theme_named(THEME).ok_or_else(|| HighlightError::UnknownTheme(THEME.to_string()))?;
    let html = code_to_html(SOURCE, LANGUAGE, theme, annotate_line)?;
    log::debug!("highlighted showcase snippet ({} bytes)", html.len());
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::{annotate_line, SOURCE};

    #[test]
    fn every_theme_capture_has_a_color() {
        for name in EVERFOREST_DARK.capture_names() {
            assert!(EVERFOREST_DARK.color_of(name).is_some());
        }
        assert_eq!(EVERFOREST_DARK.color_of("keyword"), Some("#e67e80"));
        assert_eq!(EVERFOREST_DARK.color_of("nonexistent"), None);
    }

    #[test]
    fn showcase_marks_only_line_seven() {
        let html = code_to_html(SOURCE, "go", &EVERFOREST_DARK, annotate_line).unwrap();
        assert!(html.starts_with("<pre class=\"code-highlight everforest-dark\""));
        assert!(html.contains("background-color:#2d353b;color:#d3c6aa"));
        assert_eq!(html.matches("<span class=\"line").count(), 16);
        assert_eq!(html.matches("highlighted-line").count(), 1);

        let marked = html
            .split('\n')
            .position(|line| line.contains("highlighted-line"))
            .unwrap();
        assert_eq!(marked, 6);
    }

    #[test]
    fn keywords_take_the_keyword_color() {
        let html = code_to_html("return nil\n", "go", &EVERFOREST_DARK, |_| None).unwrap();
        assert!(html.contains("<span style=\"color:#e67e80\">return</span>"));
        assert!(!html.contains("<span  "));
    }

    #[test]
    fn source_text_is_escaped() {
        let html = code_to_html(SOURCE, "go", &EVERFOREST_DARK, |_| None).unwrap();
        assert!(!html.contains("\"layout/\""));
        assert!(html.contains("&quot;") || html.contains("&#34;"));
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = code_to_html("fn main() {}", "rust", &EVERFOREST_DARK, |_| None).unwrap_err();
        assert!(matches!(err, HighlightError::UnsupportedLanguage(lang) if lang == "rust"));
    }

    #[test]
    fn themes_are_found_by_name() {
        assert_eq!(theme_named("everforest-dark").map(|t| t.name), Some("everforest-dark"));
        assert!(theme_named("github-light").is_none());
    }

    #[test]
    fn showcase_is_cached() {
        let first = showcase_html().unwrap();
        let second = showcase_html().unwrap();
        assert_eq!(first, second);
    }
}

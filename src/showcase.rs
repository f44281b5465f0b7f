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

//! The Go snippet shown inside the mock editor.

pub const LANGUAGE: &str = "go";
pub const THEME: &str = "everforest-dark";

/// 1-based line that gets the highlight bar.
pub const HIGHLIGHTED_LINE: usize = 7;
pub const HIGHLIGHTED_LINE_CLASS: &str = "highlighted-line";

/// Line number the mock dialog claims to be editing.
pub const DIALOG_LINE: u32 = 58;

pub const ACTIVE_FILE: &str = "template.go";
pub const OTHER_FILE: &str = "serve.go";

pub const SOURCE: &str = r#"if cached, ok := r.cache.Load(key); ok {
    return cached.(*template.Template).ExecuteTemplate(w, "layout/"+layout+".html", data)
}

t, err := r.partials.Clone()
if err != nil {
    return fmt.Errorf("error cloning template: %w", err)
}
paths := []string{"layout/" + layout + ".html", "page/" + page + ".html"}
for _, path := range paths {
    bytes, err := fs.ReadFile(r.fsys, path)
    if err != nil {
        return fmt.Errorf("error reading %s: %w", path, err)
		}

		_, err = t.New(path).Parse(string(bytes))
"#;

/// Class for a given line of the showcase, if any.
pub fn annotate_line(line: usize) -> Option<&'static str> {
    (line == HIGHLIGHTED_LINE).then_some(HIGHLIGHTED_LINE_CLASS)
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Uncoloured rendering used when highlighted markup isn't available.
pub fn plain_code_html(source: &str, annotate: impl Fn(usize) -> Option<&'static str>) -> String {
    let lines: Vec<String> = source
        .trim_end_matches('\n')
        .lines()
        .enumerate()
        .map(|(i, line)| line_span(&escape_html(line), annotate(i + 1)))
        .collect();
    format!(
        "<pre class=\"code-highlight plain\" tabindex=\"0\"><code>{}</code></pre>",
        lines.join("\n")
    )
}

pub(crate) fn line_span(inner: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!("<span class=\"line {class}\">{inner}</span>"),
        None => format!("<span class=\"line\">{inner}</span>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_line_seven_is_annotated() {
        let marked: Vec<usize> = (1..=20).filter(|&l| annotate_line(l).is_some()).collect();
        assert_eq!(marked, vec![7]);
    }

    #[test]
    fn plain_rendering_escapes_and_marks() {
        let html = plain_code_html(SOURCE, annotate_line);
        assert_eq!(html.matches("<span class=\"line").count(), 16);
        assert_eq!(html.matches("highlighted-line").count(), 1);
        assert!(html.contains("&quot;layout/&quot;"));
        assert!(!html.contains("\"layout/\""));
        assert!(html.contains(
            "<span class=\"line highlighted-line\">    return fmt.Errorf(&quot;error cloning template: %w&quot;, err)</span>"
        ));
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    }
}

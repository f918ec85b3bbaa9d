//! Markup helpers shared by the renderers.

use std::fmt::Write as _;

/// Escape text for use in element content and double-quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

/// Push `<a href="{href}">{label}</a>`
pub(crate) fn push_link(html: &mut String, href: &str, label: &str) {
    let _ = write!(html, "<a href=\"{}\">{}</a>", escape(href), escape(label));
}

/// Push a link when there is a target, plain text otherwise
pub(crate) fn push_item(html: &mut String, href: Option<&str>, label: &str) {
    match href {
        Some(href) => push_link(html, href, label),
        None => html.push_str(&escape(label)),
    }
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

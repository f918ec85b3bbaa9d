//! Stylesheets shipped with every page.

/// A stylesheet linked from the host document
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stylesheet {
    pub name: &'static str,
    pub content: &'static str,
}

impl Stylesheet {
    /// Path relative to the site root, e.g. `styles/site.css`
    pub fn rel_path(&self) -> String {
        format!("styles/{}", self.name)
    }

    pub fn href(&self) -> String {
        format!("/{}", self.rel_path())
    }
}

/// Linked in this order, unconditionally
pub const STYLESHEETS: &[Stylesheet] = &[
    Stylesheet {
        name: "normalizer-v8.0.1.css",
        content: include_str!("../assets/styles/normalizer-v8.0.1.css"),
    },
    Stylesheet {
        name: "daleri-mega-v1.2.css",
        content: include_str!("../assets/styles/daleri-mega-v1.2.css"),
    },
];

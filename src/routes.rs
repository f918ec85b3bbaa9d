//! Mapping from request paths to content pages.

use crate::pages::Page;

/// Output file for paths that match no route
pub const NOT_FOUND_FILE: &str = "404.html";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// Normalized path, always starting with `/` and never ending with one
    /// (except for the root)
    pub path: &'static str,
    pub page: Page,
}

impl Route {
    /// Where the rendered page is written, relative to the destination
    pub fn output_file(&self) -> String {
        match self.path.trim_start_matches('/') {
            "" => "index.html".to_owned(),
            dir => format!("{dir}/index.html"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// The site's routes: `/` is the home page and nothing else is routed
    pub fn standard() -> Self {
        Self {
            routes: vec![Route {
                path: "/",
                page: Page::Home,
            }],
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the route serving `path`, if any
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let path = normalize(path);
        self.routes.iter().find(|route| route.path == path)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Reduce a request path to the form routes are registered under.
///
/// Drops the query string and fragment, a trailing `index.html` segment and
/// trailing slashes.
pub fn normalize(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let path = if path == "index.html" {
        ""
    } else {
        path.strip_suffix("/index.html").unwrap_or(path)
    };
    let path = path.trim_matches('/');
    format!("/{path}")
}

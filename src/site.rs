//! Rendering the whole site, to memory and to disk.

use std::collections::BTreeMap;
use std::fs;
use std::path;

use anyhow::Context as _;
use ggb_config::Config;
use ggb_config::Site;

use crate::assets;
use crate::error::Result;
use crate::routes;
use crate::routes::RouteTable;
use crate::shell::Shell;

/// Every file of a rendered site, keyed by path relative to the destination
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSite {
    routes: RouteTable,
    files: BTreeMap<String, String>,
}

/// What a request path maps to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Response<'a> {
    pub status: u16,
    /// File the body comes from, relative to the destination
    pub file: &'a str,
    pub body: &'a str,
}

impl RenderedSite {
    pub fn render(site: &Site, routes: RouteTable) -> Result<Self> {
        for duplicate in site.menus().duplicate_ids() {
            log::warn!("{duplicate}");
        }

        let shell = Shell::new()?;
        let mut files = BTreeMap::new();
        for route in routes.routes() {
            log::trace!("Rendering {} ({})", route.path, route.page.name());
            let content = route
                .page
                .render(shell.liquid(), site)
                .with_context(|| format!("Failed to render `{}`", route.path))?;
            let document = shell.render(site, Some(&content))?;
            files.insert(route.output_file(), document);
        }

        log::trace!("Rendering not-found page");
        files.insert(routes::NOT_FOUND_FILE.to_owned(), shell.render(site, None)?);

        for sheet in assets::STYLESHEETS {
            files.insert(sheet.rel_path(), sheet.content.to_owned());
        }

        Ok(Self { routes, files })
    }

    pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Map a request path to a file.
    ///
    /// Routed paths and assets are found; anything else gets the not-found
    /// page with status 404.
    pub fn lookup(&self, url: &str) -> Response<'_> {
        if let Some(route) = self.routes.resolve(url) {
            if let Some((file, body)) = self.files.get_key_value(&route.output_file()) {
                return Response {
                    status: 200,
                    file: file.as_str(),
                    body: body.as_str(),
                };
            }
        }

        let rel_path = routes::normalize(url);
        let rel_path = rel_path.trim_start_matches('/');
        if !rel_path.ends_with(".html") {
            if let Some((file, body)) = self.files.get_key_value(rel_path) {
                return Response {
                    status: 200,
                    file: file.as_str(),
                    body: body.as_str(),
                };
            }
        }

        let (file, body) = self
            .files
            .get_key_value(routes::NOT_FOUND_FILE)
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .unwrap_or((routes::NOT_FOUND_FILE, ""));
        Response {
            status: 404,
            file,
            body,
        }
    }

    /// Write every file under `dest`
    pub fn write_to(&self, dest: &path::Path) -> Result<()> {
        for (rel_path, content) in self.files() {
            create_document_file(content, rel_path, dest)?;
        }
        Ok(())
    }
}

/// Render the configured site into its destination
pub fn build(config: &Config) -> Result<()> {
    let dest = config.output_dir();
    log::info!("Building {:?} into {}", config.site.title(), dest.display());
    let rendered = RenderedSite::render(&config.site, RouteTable::standard())?;
    rendered.write_to(&dest)?;
    Ok(())
}

/// Remove the destination directory
pub fn clean(config: &Config) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| path::PathBuf::new());
    let destdir = config.output_dir();
    let destdir = match dunce::canonicalize(&destdir) {
        Ok(destdir) => destdir,
        Err(e) => {
            log::debug!("No `{}` to clean", destdir.display());
            log::debug!("{e}");
            return Ok(());
        }
    };
    if cwd.starts_with(&destdir) {
        anyhow::bail!(
            "Attempting to delete current directory ({}), \
             Cancelling the operation",
            destdir.display()
        );
    }

    fs::remove_dir_all(&destdir)
        .with_context(|| format!("Could not remove {}", destdir.display()))?;

    log::info!("directory `{}` removed", destdir.display());

    Ok(())
}

fn create_document_file(content: &str, rel_path: &str, dest: &path::Path) -> Result<()> {
    let file_path = dest.join(rel_path);

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }

    fs::write(&file_path, content)
        .with_context(|| format!("Could not write {}", file_path.display()))?;
    log::info!("Created {}", file_path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn rendered() -> RenderedSite {
        RenderedSite::render(&Site::default(), RouteTable::standard()).unwrap()
    }

    #[test]
    fn renders_routes_fallback_and_styles() {
        let site = rendered();
        let files: Vec<&str> = site.files().map(|(path, _)| path).collect();
        assert_eq!(
            files,
            vec![
                "404.html",
                "index.html",
                "styles/daleri-mega-v1.2.css",
                "styles/normalizer-v8.0.1.css",
            ]
        );
    }

    #[test]
    fn lookup_home() {
        let site = rendered();
        let response = site.lookup("/");
        assert_eq!(response.status, 200);
        assert_eq!(response.file, "index.html");
        assert!(response.body.contains("Introducing: Gas Giant Battles"));
        assert_eq!(site.lookup("/index.html?x=1"), response);
    }

    #[test]
    fn lookup_stylesheet() {
        let site = rendered();
        let response = site.lookup("/styles/daleri-mega-v1.2.css");
        assert_eq!(response.status, 200);
        assert_eq!(response.file, "styles/daleri-mega-v1.2.css");
    }

    #[test]
    fn lookup_unmatched_renders_empty_shell() {
        let site = rendered();
        let response = site.lookup("/about");
        assert_eq!(response.status, 404);
        assert_eq!(response.file, "404.html");
        assert!(response.body.contains("<div id=\"content\">\n</div>"));
        assert!(response.body.contains("<div id=\"mainmenu\">"));
        assert!(!response.body.contains("Introducing"));

        let response = site.lookup("/404.html");
        assert_eq!(response.status, 404);
    }

    #[test]
    fn render_is_idempotent() {
        assert_eq!(rendered(), rendered());
    }

    #[test]
    fn write_to_destination() {
        let dest = tempfile::tempdir().unwrap();
        rendered().write_to(dest.path()).unwrap();
        assert!(dest.path().join("index.html").is_file());
        assert!(dest.path().join("404.html").is_file());
        assert!(dest.path().join("styles/normalizer-v8.0.1.css").is_file());
    }

    #[test]
    fn clean_missing_destination_is_fine() {
        let dest = tempfile::tempdir().unwrap();
        let config = Config {
            abs_dest: Some(dest.path().join("never-built")),
            ..Default::default()
        };
        clean(&config).unwrap();
    }

    #[test]
    fn build_then_clean() {
        let dest = tempfile::tempdir().unwrap();
        let out = dest.path().join("site");
        let config = Config {
            abs_dest: Some(out.clone()),
            ..Default::default()
        };
        build(&config).unwrap();
        assert!(out.join("index.html").is_file());
        clean(&config).unwrap();
        assert!(!out.exists());
    }
}

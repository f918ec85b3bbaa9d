//! HTTP preview of a rendered site.
//!
//! The server answers every request from the current [`Store`] snapshot, so
//! swapping the snapshot takes effect on the next request.

use std::str::FromStr;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

use crate::site::RenderedSite;

/// Holds the site being served.
///
/// `replace` is the only way to change it; readers get an immutable snapshot.
#[derive(Debug)]
pub struct Store {
    current: RwLock<Arc<RenderedSite>>,
}

impl Store {
    pub fn new(site: RenderedSite) -> Self {
        Self {
            current: RwLock::new(Arc::new(site)),
        }
    }

    pub fn snapshot(&self) -> Arc<RenderedSite> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    pub fn replace(&self, site: RenderedSite) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(site);
    }
}

/// Custom server settings
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ServerBuilder {
    hostname: Option<String>,
    port: Option<u16>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the hostname
    pub fn hostname(&mut self, hostname: impl Into<String>) -> &mut Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Override the port
    ///
    /// By default, the first available port is selected.
    pub fn port(&mut self, port: u16) -> &mut Self {
        self.port = Some(port);
        self
    }

    /// Create a server for `store`
    pub fn build(&self, store: Arc<Store>) -> Server {
        let hostname = self.hostname.as_deref().unwrap_or("localhost");
        let port = self
            .port
            .or_else(|| get_available_port(hostname))
            // Just have `serve` error out
            .unwrap_or(3000);

        Server {
            store,
            addr: format!("{hostname}:{port}"),
        }
    }
}

#[derive(Debug)]
pub struct Server {
    store: Arc<Store>,
    addr: String,
}

impl Server {
    /// The address the server is available at
    pub fn addr(&self) -> &str {
        self.addr.as_str()
    }

    /// Start the webserver; blocks for as long as requests keep coming
    pub fn serve(&self) -> Result<(), Error> {
        let server = tiny_http::Server::http(self.addr()).map_err(Error::new)?;
        for request in server.incoming_requests() {
            if let Err(e) = site_handler(&self.store, request) {
                log::error!("{e}");
            }
        }

        Ok(())
    }
}

/// Serve Error
#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.message.fmt(fmt)
    }
}

impl std::error::Error for Error {}

fn site_handler(store: &Store, req: tiny_http::Request) -> Result<(), Error> {
    let site = store.snapshot();
    let response = site.lookup(req.url());
    log::debug!("{} {} -> {}", response.status, req.url(), response.file);

    let mime = mime_guess::from_path(response.file)
        .first_raw()
        .unwrap_or("text/html");
    let content_type = tiny_http::Header::from_str(&format!("Content-Type: {mime}"))
        .map_err(|()| Error::new("invalid content type"))?;
    req.respond(
        tiny_http::Response::from_string(response.body)
            .with_status_code(tiny_http::StatusCode(response.status))
            .with_header(content_type),
    )
    .map_err(Error::new)?;

    Ok(())
}

fn get_available_port(host: &str) -> Option<u16> {
    // Start after "well-known" ports (0–1023) as they require superuser
    // privileges on UNIX-like operating systems.
    (1024..9000).find(|port| port_is_available(host, *port))
}

fn port_is_available(host: &str, port: u16) -> bool {
    std::net::TcpListener::bind((host, port)).is_ok()
}

#[cfg(test)]
mod test {
    use ggb_config::Site;

    use super::*;
    use crate::routes::RouteTable;

    fn rendered(title: &str) -> RenderedSite {
        let base = Site::default();
        let site = Site::new(
            title,
            base.slug(),
            base.copyright().clone(),
            base.notice().clone(),
            base.menus().clone(),
        );
        RenderedSite::render(&site, RouteTable::standard()).unwrap()
    }

    #[test]
    fn replace_swaps_snapshot() {
        let store = Store::new(rendered("Before"));
        let before = store.snapshot();
        store.replace(rendered("After"));
        let after = store.snapshot();
        assert!(before.lookup("/").body.contains("<title>Before</title>"));
        assert!(after.lookup("/").body.contains("<title>After</title>"));
    }

    #[test]
    fn builder_uses_given_address() {
        let store = Arc::new(Store::new(rendered("Site")));
        let server = ServerBuilder::new()
            .hostname("127.0.0.1")
            .port(4321)
            .build(store);
        assert_eq!(server.addr(), "127.0.0.1:4321");
    }
}

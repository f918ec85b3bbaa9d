//! Static site shell for the Gas Giant Battles client.
//!
//! A [`ggb_config::Site`] is rendered into a banner, main menu, sidebar,
//! footer and one routed content region, then written to disk or served.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod assets;
pub mod error;
pub mod html;
pub mod menu;
pub mod pages;
pub mod routes;
#[cfg(feature = "serve")]
pub mod serve;
pub mod shell;
pub mod site;
pub mod template;

pub use ggb_config::Config;
pub use ggb_config::Site;

pub use crate::error::Error;
pub use crate::routes::RouteTable;
pub use crate::site::RenderedSite;
pub use crate::site::build;
pub use crate::site::clean;

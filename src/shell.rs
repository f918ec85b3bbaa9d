//! The page shell: banner, main menu, content region, sidebar and footer,
//! mounted into the host document.

use std::fmt;
use std::fmt::Write as _;

use anyhow::Context as _;
use ggb_config::Site;

use crate::assets;
use crate::error::Result;
use crate::html;
use crate::menu;
use crate::template;
use crate::template::Liquid;

const HOST_TEMPLATE: &str = include_str!("../assets/templates/host.liquid");

const SOURCE_URL: &str = "https://github.com/mdhender/server";
const TEMPLATE_CREDIT_URL: &str = "https://github.com/mdhender/server/VIKLUND.md";

const DOCUMENTATION: &[(&str, &str)] = &[
    ("/rules", "Rules"),
    ("/submitting-orders", "Submitting Orders"),
    ("/tutorials", "Tutorials"),
    ("/known-issues", "Known Issues"),
];

pub fn render_banner(site: &Site) -> String {
    let mut out = String::with_capacity(512);
    out.push_str("<div id=\"top\">\n");
    out.push_str(
        "<p id=\"skiplinks\">Skip to: <a href=\"#content\">content</a> | \
         <a href=\"#sidebar\">sidebar</a></p>\n",
    );
    out.push_str("<div id=\"sitetitle\">\n<h1>");
    html::push_link(&mut out, "/", site.title());
    out.push_str("</h1>\n");
    let _ = writeln!(out, "<p>{}</p>", html::escape(site.slug()));
    out.push_str("</div>\n<hr class=\"clear\" />\n</div>\n");
    out
}

pub fn render_sidebar(site: &Site) -> String {
    let side = site.side();
    let mut out = String::with_capacity(4096);
    out.push_str("<div id=\"sidebar\">\n");
    out.push_str("<h2>Eleifend pretium</h2>\n");
    out.push_str(
        "<p>Tellus id interdum velit laoreet id. \
         Commodo quis tincidunt nunc pulvinar sapien et ligula.</p>\n",
    );

    let mut documentation = String::from("<h2>Documentation</h2>\n<ul>\n");
    for (link, label) in DOCUMENTATION {
        documentation.push_str("<li>");
        html::push_link(&mut documentation, link, label);
        documentation.push_str("</li>\n");
    }
    documentation.push_str("</ul>\n");
    documentation.push_str(
        "<h2>Imperdiet Massa</h2>\n<p>\
         Dolor sed viverra ipsum nunc aliquet bibendum enim facilisis gravida. \
         Facilisis mauris sit amet massa vitae tortor condimentum lacinia.</p>\n",
    );
    out.push_str(&menu::render_side_menu(&menu::SideMenu {
        side: "left",
        title: "Games",
        items: &side.left,
        extra: &documentation,
    }));

    let mut samples = String::from("<h2>Sample Links</h2>\n<ul>\n");
    for sample in &side.samples {
        samples.push_str("<li>");
        html::push_link(&mut samples, &sample.link, &sample.label);
        samples.push_str("</li>\n");
    }
    samples.push_str("</ul>\n");
    out.push_str(&menu::render_side_menu(&menu::SideMenu {
        side: "right",
        title: "Game 100, Turn 13",
        items: &side.right,
        extra: &samples,
    }));

    out.push_str("<hr class=\"clear\" />\n");
    let notice = site.notice();
    let _ = writeln!(out, "<h2>{}</h2>", html::escape(&notice.title));
    let _ = writeln!(out, "<p>{}</p>", html::escape(&notice.text));
    out.push_str("<hr class=\"clear\" />\n</div>\n");
    out
}

pub fn render_footer(site: &Site) -> String {
    let copyright = site.copyright();
    let mut out = String::with_capacity(512);
    out.push_str("<div id=\"footer\">\n<div class=\"left\">\n");
    let _ = writeln!(
        out,
        "<p>&copy; {} {} | <a href=\"{SOURCE_URL}\">{}</a> | \
         Template design by <a href=\"{TEMPLATE_CREDIT_URL}\">Andreas Viklund</a></p>",
        copyright.year,
        html::escape(&copyright.author),
        html::escape(site.title()),
    );
    out.push_str("</div>\n<div class=\"right textright\">\n");
    let _ = writeln!(
        out,
        "<p><a href=\"/about\">About</a> | <a href=\"{SOURCE_URL}\">Source</a></p>"
    );
    out.push_str("<p class=\"hide\"><a href=\"#top\">Return to top</a></p>\n");
    out.push_str("</div>\n</div>\n");
    out
}

/// Compose the application markup around `content`.
///
/// `None` leaves the content region empty, which is what unmatched paths
/// get.
pub fn render_app(site: &Site, content: Option<&str>) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str(&render_banner(site));
    out.push_str("<div id=\"wrap\">\n");
    out.push_str(&menu::render_main_menu(site.nav()));
    out.push_str("<div id=\"content\">\n");
    if let Some(content) = content {
        out.push_str(content);
        if !content.ends_with('\n') {
            out.push('\n');
        }
    }
    out.push_str("</div>\n");
    out.push_str(&render_sidebar(site));
    out.push_str("<hr class=\"clear\" />\n</div>\n");
    out.push_str(&render_footer(site));
    out
}

/// The host document the application is mounted into
pub struct Shell {
    liquid: Liquid,
    host: liquid::Template,
}

impl Shell {
    pub fn new() -> Result<Self> {
        let liquid = Liquid::new()?;
        let host = liquid.parse("host", HOST_TEMPLATE)?;
        Ok(Self { liquid, host })
    }

    pub fn liquid(&self) -> &Liquid {
        &self.liquid
    }

    /// Render a complete document with `content` in the content region
    pub fn render(&self, site: &Site, content: Option<&str>) -> Result<String> {
        let mut globals = template::site_globals(site)?;
        let stylesheets = assets::STYLESHEETS
            .iter()
            .map(|sheet| liquid::model::Value::scalar(sheet.href()))
            .collect();
        globals.insert("stylesheets".into(), liquid::model::Value::Array(stylesheets));
        globals.insert(
            "root".into(),
            liquid::model::Value::scalar(render_app(site, content)),
        );
        let document = self
            .host
            .render(&globals)
            .context("Failed to render host document")?;
        Ok(document)
    }
}

impl fmt::Debug for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("`{needle}` not found"))
    }

    #[test]
    fn banner_shows_title_and_slug() {
        let out = render_banner(&Site::default());
        assert!(out.contains("<h1><a href=\"/\">Gas Giant Battles</a></h1>"));
        assert!(out.contains("<p>The client for the server...</p>"));
    }

    #[test]
    fn footer_shows_copyright() {
        let out = render_footer(&Site::default());
        assert!(out.contains("&copy; 2020 Michael D Henderson | "));
        assert!(out.contains("<a href=\"#top\">Return to top</a>"));
    }

    #[test]
    fn sidebar_order() {
        let out = render_sidebar(&Site::default());
        let games = position(&out, "<h2>Games</h2>");
        let documentation = position(&out, "<h2>Documentation</h2>");
        let turn = position(&out, "<h2>Game 100, Turn 13</h2>");
        let samples = position(&out, "<h2>Sample Links</h2>");
        let notice = position(&out, "<h2>License</h2>");
        assert!(games < documentation);
        assert!(documentation < turn);
        assert!(turn < samples);
        assert!(samples < notice);
        assert!(out.contains("<li><a href=\"/sample-link-4\">Sample link 4</a></li>"));
        assert!(out.contains("<p>Gas Giant Battles is free software, licensed under the AGPL v3.</p>"));
    }

    #[test]
    fn app_layout_order() {
        let out = render_app(&Site::default(), Some("<p>hello</p>"));
        let top = position(&out, "<div id=\"top\">");
        let menu = position(&out, "<div id=\"mainmenu\">");
        let content = position(&out, "<div id=\"content\">\n<p>hello</p>\n</div>");
        let sidebar = position(&out, "<div id=\"sidebar\">");
        let footer = position(&out, "<div id=\"footer\">");
        assert!(top < menu && menu < content && content < sidebar && sidebar < footer);
    }

    #[test]
    fn app_without_content_keeps_shell() {
        let out = render_app(&Site::default(), None);
        assert!(out.contains("<div id=\"content\">\n</div>"));
        assert!(out.contains("<div id=\"mainmenu\">"));
        assert!(out.contains("<div id=\"footer\">"));
    }

    #[test]
    fn document_mounts_app_in_root() {
        let shell = Shell::new().unwrap();
        let document = shell.render(&Site::default(), None).unwrap();
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains("<title>Gas Giant Battles</title>"));
        assert!(document.contains("<div id=\"root\">\n<div id=\"top\">"));
        assert_eq!(document.matches("<div id=\"root\">").count(), 1);
        assert!(document.contains("<link rel=\"stylesheet\" href=\"/styles/normalizer-v8.0.1.css\">"));
        assert!(document.contains("<link rel=\"stylesheet\" href=\"/styles/daleri-mega-v1.2.css\">"));
    }
}

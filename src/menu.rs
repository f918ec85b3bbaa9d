//! Navigation menus rendered to markup.
//!
//! Both renderers keep input order and never drop or merge entries, except
//! for malformed ones (no label, or no link where one is required), which are
//! skipped with a warning so the rest of the page still renders.

use std::fmt::Write as _;

use ggb_config::Leaf;
use ggb_config::MenuNode;

use crate::html;

/// Render the primary navigation.
///
/// Every node becomes one `<dl>` heading group; its children become `<dd>`
/// entries, as links when they have one and as plain text otherwise.
pub fn render_main_menu(nodes: &[MenuNode]) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("<div id=\"mainmenu\">\n");
    for node in nodes {
        if html::is_blank(node.label()) {
            log::warn!("Skipping main menu entry `{}`: no label", node.id());
            continue;
        }

        match node.class() {
            Some(class) => {
                let _ = writeln!(out, "<dl class=\"{}\">", html::escape(class));
            }
            None => out.push_str("<dl>\n"),
        }
        out.push_str("<dt>");
        html::push_item(&mut out, node.link(), node.label());
        out.push_str("</dt>\n");

        for child in node.children() {
            if html::is_blank(&child.label) {
                log::warn!(
                    "Skipping main menu entry `{}` under `{}`: no label",
                    child.id,
                    node.id()
                );
                continue;
            }
            out.push_str("<dd>");
            html::push_item(&mut out, child.link(), &child.label);
            out.push_str("</dd>\n");
        }
        out.push_str("</dl>\n");
    }
    out.push_str("<hr class=\"clear\" />\n</div>\n");
    out
}

/// A titled list of side navigation
#[derive(Copy, Clone, Debug)]
pub struct SideMenu<'a> {
    /// Column the menu floats in, `left` or `right`
    pub side: &'a str,
    pub title: &'a str,
    pub items: &'a [MenuNode],
    /// Trusted markup appended after the list
    pub extra: &'a str,
}

/// Render a side menu.
///
/// Each item is a link. An item with children gets one nested list of links
/// right beneath it; an item without children gets no nested list at all.
pub fn render_side_menu(menu: &SideMenu<'_>) -> String {
    let mut out = String::with_capacity(1024);
    let _ = writeln!(out, "<div class=\"{}\">", html::escape(menu.side));
    let _ = writeln!(out, "<h2>{}</h2>", html::escape(menu.title));
    out.push_str("<ul class=\"sidemenu\">\n");
    for item in menu.items {
        let Some(link) = item.link().filter(|_| !html::is_blank(item.label())) else {
            log::warn!(
                "Skipping `{}` menu entry `{}`: side menu entries need a label and a link",
                menu.side,
                item.id()
            );
            continue;
        };

        out.push_str("<li>");
        html::push_link(&mut out, link, item.label());
        let children: Vec<(&str, &Leaf)> = item
            .children()
            .iter()
            .filter_map(|child| side_link(menu.side, child).map(|link| (link, child)))
            .collect();
        if !children.is_empty() {
            out.push_str("\n<ul>\n");
            for (link, child) in children {
                out.push_str("<li>");
                html::push_link(&mut out, link, &child.label);
                out.push_str("</li>\n");
            }
            out.push_str("</ul>\n");
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
    out.push_str(menu.extra);
    out.push_str("</div>\n");
    out
}

fn side_link<'a>(side: &str, child: &'a Leaf) -> Option<&'a str> {
    let link = child.link().filter(|_| !html::is_blank(&child.label));
    if link.is_none() {
        log::warn!(
            "Skipping `{side}` menu entry `{}`: side menu entries need a label and a link",
            child.id
        );
    }
    link
}

//! Routed content pages.

use anyhow::Context as _;

use crate::error::Result;
use crate::template;
use crate::template::Liquid;

const HOME_TEMPLATE: &str = include_str!("../assets/templates/home.liquid");

/// A page that can fill the content region
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
}

impl Page {
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
        }
    }

    /// Render the page body, without the surrounding shell
    pub fn render(self, liquid: &Liquid, site: &ggb_config::Site) -> Result<String> {
        match self {
            Self::Home => render_home(liquid, site),
        }
    }
}

/// One of the three panels under the introduction
#[derive(Clone, Debug, serde::Serialize)]
struct Callout {
    title: &'static str,
    link: &'static str,
    body: &'static str,
}

const CALLOUTS: [Callout; 3] = [
    Callout {
        title: "Support the development",
        link: "/support-the-development",
        body: "<p>
If you want to support the development of this game, there are plenty of opportunities.
</p>
<ul>
<li>Coding</li>
<li>Testing</li>
<li>Documenting</li>
<li>Spreading the word</li>
</ul>",
    },
    Callout {
        title: "How to join",
        link: "/how-to-join",
        body: "<p>
Libero volutpat sed cras ornare arcu dui.
Accumsan lacus vel facilisis volutpat.
</p>
<p>
Sit amet risus nullam eget felis eget nunc.
Scelerisque eleifend donec pretium vulputate sapien nec.
Placerat duis ultricies lacus sed turpis tincidunt id aliquet.
</p>
<p>
In ornare quam viverra orci sagittis eu volutpat.
Pellentesque habitant morbi tristique senectus et netus et.
</p>",
    },
    Callout {
        title: "Customization",
        link: "/customization",
        body: "<p>
Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore
magna aliqua.
Egestas sed sed risus pretium quam. Ut aliquam purus sit amet luctus.
</p>
<p>
Pellentesque habitant morbi tristique senectus et netus et malesuada.
Integer quis auctor elit sed vulputate mi sit amet.
Duis ultricies lacus sed turpis tincidunt id aliquet risus.
Ut morbi tincidunt augue interdum velit euismod in pellentesque massa.
A cras semper auctor neque vitae tempus quam.
</p>",
    },
];

fn render_home(liquid: &Liquid, site: &ggb_config::Site) -> Result<String> {
    let template = liquid.parse(Page::Home.name(), HOME_TEMPLATE)?;
    let mut globals = template::site_globals(site)?;
    let callouts = liquid::model::to_value(&CALLOUTS).context("Failed to convert callouts")?;
    globals.insert("callouts".into(), callouts);
    let content = template
        .render(&globals)
        .context("Failed to render home page")?;
    Ok(content)
}

#[cfg(test)]
mod test {
    use super::*;

    fn home() -> String {
        let liquid = Liquid::new().unwrap();
        Page::Home.render(&liquid, &ggb_config::Site::default()).unwrap()
    }

    #[test]
    fn home_introduces_the_site() {
        let content = home();
        assert!(content.starts_with("<h2><a href=\"/\">Introducing: Gas Giant Battles</a></h2>"));
        assert!(content.contains("<p class=\"introtext\">"));
    }

    #[test]
    fn home_has_three_callouts_in_order() {
        let content = home();
        let first = content.find("<div class=\"trio1\">").unwrap();
        let second = content.find("<div class=\"trio2\">").unwrap();
        let third = content.find("<div class=\"trio3\">").unwrap();
        assert!(first < second && second < third);
        assert!(content.contains("<h3><a href=\"/how-to-join\">How to join</a></h3>"));
        assert_eq!(content.matches("Read more...</a>").count(), 3);
    }

    #[test]
    fn home_escapes_title() {
        let site = ggb_config::Site::new(
            "<Battles>",
            "slug",
            ggb_config::Site::default().copyright().clone(),
            ggb_config::Site::default().notice().clone(),
            ggb_config::Menus::default(),
        );
        let liquid = Liquid::new().unwrap();
        let content = Page::Home.render(&liquid, &site).unwrap();
        assert!(content.contains("Introducing: &lt;Battles&gt;"));
    }
}

use crate::Menus;
use crate::MenuNode;
use crate::SideMenus;

/// Site metadata and navigation.
///
/// Built once, from `_site.yml` or from the defaults, and read-only after
/// that.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct Site {
    title: String,
    slug: String,
    copyright: Copyright,
    notice: Notice,
    menus: Menus,
}

impl Site {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        copyright: Copyright,
        notice: Notice,
        menus: Menus,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            copyright,
            notice,
            menus,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Tagline shown under the title
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn copyright(&self) -> &Copyright {
        &self.copyright
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn menus(&self) -> &Menus {
        &self.menus
    }

    /// Primary navigation
    pub fn nav(&self) -> &[MenuNode] {
        &self.menus.nav
    }

    pub fn side(&self) -> &SideMenus {
        &self.menus.side
    }
}

impl Default for Site {
    fn default() -> Self {
        Self {
            title: "Gas Giant Battles".to_owned(),
            slug: "The client for the server...".to_owned(),
            copyright: Copyright {
                author: "Michael D Henderson".to_owned(),
                year: 2020,
            },
            notice: Notice {
                title: "License".to_owned(),
                text: "Gas Giant Battles is free software, licensed under the AGPL v3.".to_owned(),
            },
            menus: Menus::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Copyright {
    pub author: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Notice {
    pub title: String,
    pub text: String,
}

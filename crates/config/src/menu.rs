use std::collections::HashSet;
use std::fmt;

/// Identifier of a menu entry.
///
/// Ids are unique within the tree they belong to, not across trees.
#[derive(Debug, Clone, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MenuId(serde_yaml::Number);

// `Number` compares NaN equal to itself, so equality is reflexive.
impl Eq for MenuId {}

impl From<i32> for MenuId {
    fn from(id: i32) -> Self {
        Self(id.into())
    }
}

impl From<f64> for MenuId {
    fn from(id: f64) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A navigation entry.
///
/// A `Group` can only hold `Leaf`s, so menus are never more than two levels
/// deep. An entry with a `children` key is a `Group`, anything else a
/// `Leaf`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum MenuNode {
    Group(Group),
    Leaf(Leaf),
}

impl<'de> serde::Deserialize<'de> for MenuNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize as _;
        use serde::de::Error as _;

        let value = serde_yaml::Value::deserialize(deserializer)?;
        let node = if value.get("children").is_some() {
            Group::deserialize(value).map(Self::Group)
        } else {
            Leaf::deserialize(value).map(Self::Leaf)
        };
        node.map_err(D::Error::custom)
    }
}

impl MenuNode {
    pub fn id(&self) -> &MenuId {
        match self {
            Self::Group(group) => &group.id,
            Self::Leaf(leaf) => &leaf.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Group(group) => &group.label,
            Self::Leaf(leaf) => &leaf.label,
        }
    }

    /// The link target, if there is a non-empty one
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Group(group) => non_empty(Some(group.link.as_str())),
            Self::Leaf(leaf) => leaf.link(),
        }
    }

    pub fn class(&self) -> Option<&str> {
        match self {
            Self::Group(group) => group.class.as_deref(),
            Self::Leaf(leaf) => leaf.class.as_deref(),
        }
    }

    /// Child entries; always empty for a `Leaf`
    pub fn children(&self) -> &[Leaf] {
        match self {
            Self::Group(group) => &group.children,
            Self::Leaf(_) => &[],
        }
    }
}

impl From<Group> for MenuNode {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<Leaf> for MenuNode {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

/// An entry heading a list of `Leaf`s
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Group {
    pub id: MenuId,
    pub link: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub children: Vec<Leaf>,
}

impl Group {
    pub fn new(
        id: impl Into<MenuId>,
        link: impl Into<String>,
        label: impl Into<String>,
        children: Vec<Leaf>,
    ) -> Self {
        Self {
            id: id.into(),
            link: link.into(),
            label: label.into(),
            class: None,
            children,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// An entry with no children; without a link it is a plain-text label
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Leaf {
    pub id: MenuId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Only used when the entry is at the top of a menu
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl Leaf {
    /// A plain-text entry
    pub fn text(id: impl Into<MenuId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            link: None,
            class: None,
        }
    }

    pub fn link_to(id: impl Into<MenuId>, link: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            link: Some(link.into()),
            class: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// The link target, if there is a non-empty one
    pub fn link(&self) -> Option<&str> {
        non_empty(self.link.as_deref())
    }
}

fn non_empty(link: Option<&str>) -> Option<&str> {
    link.filter(|l| !l.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleLink {
    pub id: MenuId,
    pub link: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SideMenus {
    pub left: Vec<MenuNode>,
    pub right: Vec<MenuNode>,
    pub samples: Vec<SampleLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Menus {
    pub nav: Vec<MenuNode>,
    pub side: SideMenus,
}

/// An id that appears more than once within one tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub tree: &'static str,
    pub id: MenuId,
}

impl fmt::Display for DuplicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menu id `{}` is repeated in `{}`", self.id, self.tree)
    }
}

impl Menus {
    /// Ids repeated within the same tree, in the order they are found
    pub fn duplicate_ids(&self) -> Vec<DuplicateId> {
        let mut duplicates = Vec::new();
        let trees = [
            ("nav", &self.nav),
            ("side.left", &self.side.left),
            ("side.right", &self.side.right),
        ];
        for (tree, nodes) in trees {
            let ids = nodes
                .iter()
                .flat_map(|node| std::iter::once(node.id()).chain(node.children().iter().map(|c| &c.id)));
            collect_duplicates(tree, ids, &mut duplicates);
        }
        collect_duplicates(
            "side.samples",
            self.side.samples.iter().map(|s| &s.id),
            &mut duplicates,
        );
        duplicates
    }
}

fn collect_duplicates<'a>(
    tree: &'static str,
    ids: impl Iterator<Item = &'a MenuId>,
    duplicates: &mut Vec<DuplicateId>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            duplicates.push(DuplicateId {
                tree,
                id: id.clone(),
            });
        }
    }
}

impl Default for Menus {
    fn default() -> Self {
        let nav = vec![
            Group::new(
                1,
                "/",
                "Main pages",
                vec![
                    Leaf::link_to(1.1, "/blog", "Blog"),
                    Leaf::link_to(1.2, "/forums", "Forums"),
                    Leaf::link_to(1.3, "/about", "About"),
                ],
            )
            .with_class("nav")
            .into(),
            Group::new(
                2,
                "/",
                "Games",
                vec![
                    Leaf::link_to(2.1, "/rules", "Rules"),
                    Leaf::link_to(2.2, "/tournaments", "Tournaments"),
                    Leaf::link_to(2.3, "/archives", "Archives"),
                ],
            )
            .with_class("nav")
            .into(),
            Group::new(
                3,
                "/",
                "Extras",
                vec![
                    Leaf::link_to(3.1, "/extras/music-archive", "Music archive"),
                    Leaf::link_to(3.2, "/extras/photo-gallery", "Photo gallery"),
                    Leaf::link_to(3.3, "/extras/poems-and-lyrics", "Poems and lyrics"),
                ],
            )
            .with_class("nav")
            .into(),
            Group::new(
                4,
                "/",
                "Community",
                vec![
                    Leaf::link_to(4.1, "/guestbook", "Guestbook"),
                    Leaf::link_to(4.2, "/members", "Members"),
                    Leaf::link_to(4.3, "/links", "Link collection"),
                ],
            )
            .with_class("nav")
            .into(),
            Group::new(
                5,
                "/status",
                "System Status",
                vec![
                    Leaf::text(5.1, "Game 103 now accepting new players."),
                    Leaf::text(5.2, "Usagi's attack on 05.07.13 repelled by Chizu."),
                ],
            )
            .with_class("introduction")
            .into(),
        ];

        let left = vec![
            Group::new(
                1,
                "/my/games",
                "My Games",
                vec![
                    Leaf::link_to(1.1, "/my/games/100", "Game 100"),
                    Leaf::link_to(1.2, "/my/games/102", "Game 102"),
                ],
            )
            .into(),
            Leaf::link_to(2, "/games/active", "Active Games").into(),
            Group::new(
                3,
                "/admin",
                "Administration",
                vec![
                    Leaf::link_to(3.1, "/admin/create-game", "Create Game"),
                    Leaf::link_to(3.2, "/admin/upgrade-server", "Upgrade Server"),
                ],
            )
            .into(),
        ];

        let right = vec![
            Group::new(
                1,
                "/my/games/100",
                "Overview",
                vec![
                    Leaf::link_to(1.1, "/my/games/100/reports", "Reports"),
                    Leaf::link_to(1.2, "/my/games/100/systems", "Systems"),
                    Leaf::link_to(1.3, "/my/games/100/diplomacy", "Diplomacy"),
                ],
            )
            .into(),
            Leaf::link_to(2, "/my/games/100/orders", "Orders").into(),
            Group::new(
                3,
                "/my/games/100/units",
                "Units",
                vec![
                    Leaf::link_to(3.1, "/my/games/100/units/colonies", "Colonies"),
                    Leaf::link_to(3.2, "/my/games/100/units/mines", "Mines"),
                    Leaf::link_to(3.3, "/my/games/100/units/factories", "Factories"),
                    Leaf::link_to(3.4, "/my/games/100/units/ships", "Ships"),
                    Leaf::link_to(3.5, "/my/games/100/units/population", "Population"),
                ],
            )
            .into(),
            Leaf::link_to(4, "/my/games/100/to-do", "To Do").into(),
            Leaf::link_to(5, "/my/games/100/history", "History").into(),
        ];

        let samples = (1..=4)
            .map(|n: i32| SampleLink {
                id: n.into(),
                link: format!("/sample-link-{n}"),
                label: format!("Sample link {n}"),
            })
            .collect();

        Self {
            nav,
            side: SideMenus {
                left,
                right,
                samples,
            },
        }
    }
}

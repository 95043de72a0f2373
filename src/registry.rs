use serde::{Deserialize, Serialize};

use crate::content::{rally_content, real_estate_content};

pub const REAL_ESTATE_PAGES: u8 = 20;
pub const RALLY_PAGES: u8 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    RealEstate,
    Rally,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::RealEstate, Group::Rally];

    pub fn as_str(self) -> &'static str {
        match self {
            Group::RealEstate => "realestate",
            Group::Rally => "rally",
        }
    }

    /// Prefix used in page ids, e.g. `prop-07` or `rally-03`.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Group::RealEstate => "prop",
            Group::Rally => "rally",
        }
    }

    pub fn page_count(self) -> u8 {
        match self {
            Group::RealEstate => REAL_ESTATE_PAGES,
            Group::Rally => RALLY_PAGES,
        }
    }

    pub fn page_id(self, index: u8) -> String {
        format!("{}-{index:02}", self.id_prefix())
    }

    fn title(self, index: u8) -> String {
        match (self, index) {
            (Group::RealEstate, 1) => "Dashboard".to_string(),
            (Group::RealEstate, 2..=6) => format!("Property {} Detail", index - 1),
            (Group::RealEstate, _) => format!("Module {index}"),
            (Group::Rally, 1) => "Rally Overview".to_string(),
            (Group::Rally, _) => format!("Rally Stage {index}"),
        }
    }

    fn content(self, index: u8) -> String {
        match self {
            Group::RealEstate => real_estate_content(index),
            Group::Rally => rally_content(index),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRecord {
    pub id: String,
    pub group: Group,
    pub title: String,
    /// Pre-rendered HTML fragment.
    pub content: String,
}

impl PageRecord {
    fn generate(group: Group, index: u8) -> Self {
        Self {
            id: group.page_id(index),
            group,
            title: group.title(index),
            content: group.content(index),
        }
    }

    pub fn href(&self) -> String {
        format!("#/{}", self.id)
    }
}

/// All pages of the site in navigation order: realestate 1..=20, then rally 1..=10.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    pages: Vec<PageRecord>,
}

impl Registry {
    pub fn build() -> Self {
        let pages = Group::ALL
            .into_iter()
            .flat_map(|group| (1..=group.page_count()).map(move |i| PageRecord::generate(group, i)))
            .collect();
        Self { pages }
    }

    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&PageRecord> {
        self.pages.iter().find(|page| page.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn default_page(&self) -> &PageRecord {
        // `build` always yields the full page set.
        &self.pages[0]
    }

    pub fn in_group(&self, group: Group) -> impl Iterator<Item = &PageRecord> + '_ {
        self.pages.iter().filter(move |page| page.group == group)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::build()
    }
}

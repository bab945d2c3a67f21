//! Navigation domain models.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The pages of the application reachable from the sidebar.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Page {
    Dashboard,
    Debugger,
    Tutorials,
    Progress,
    Settings,
}

impl Page {
    /// Route of this page, see [`page_url`].
    pub fn url(self) -> String {
        page_url(self.as_ref())
    }
}

/// Builds the route for a page name: `/` followed by the name with spaces
/// replaced by `-`.
pub fn page_url(page_name: &str) -> String {
    format!("/{}", page_name.replace(' ', "-"))
}

/// What an entry's icon stands for.
///
/// Entries carry a tag rather than a concrete icon so the shell does not
/// depend on any particular icon set; an [`super::IconRenderer`] maps the tag.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    Home,
    Code,
    Book,
    Chart,
    Settings,
    // Used by the feature highlights and the brand, not by menu entries
    Voice,
    Spark,
    Brain,
}

/// A single sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Destination route (e.g. `/Debugger`)
    pub route: String,
    /// Display label
    pub label: String,
    pub capability: Capability,
}

impl NavItem {
    pub fn new(page: Page, label: impl Into<String>, capability: Capability) -> Self {
        Self {
            route: page.url(),
            label: label.into(),
            capability,
        }
    }
}

/// A static feature blurb shown under the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureHighlight {
    pub title: String,
    pub description: String,
    pub capability: Capability,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_page_url() {
        assert_eq!(page_url("Dashboard"), "/Dashboard");
        assert_eq!(page_url("Learning Progress"), "/Learning-Progress");
    }

    #[test]
    fn test_every_page_has_distinct_url() {
        let urls: std::collections::HashSet<String> = Page::iter().map(Page::url).collect();
        assert_eq!(urls.len(), Page::iter().count());
        assert_eq!(Page::Debugger.url(), "/Debugger");
    }

    #[test]
    fn test_capability_names() {
        assert_eq!(Capability::Home.as_ref(), "home");
        assert_eq!("chart".parse::<Capability>().unwrap(), Capability::Chart);
    }
}

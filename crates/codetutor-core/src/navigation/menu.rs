//! The sidebar menu and its active-entry determination.

use super::icon::IconRenderer;
use super::model::{Capability, FeatureHighlight, NavItem, Page};

pub const BRAND_TITLE: &str = "CodeTutor";
pub const BRAND_TAGLINE: &str = "Voice-Powered Learning";
pub const MENU_GROUP_LABEL: &str = "Learning Tools";
pub const FEATURES_GROUP_LABEL: &str = "Features";
pub const FOOTER_TITLE: &str = "Learning Journey";
pub const FOOTER_TAGLINE: &str = "Keep coding, keep growing!";

/// Returns the fixed, ordered sidebar entries.
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new(Page::Dashboard, "Dashboard", Capability::Home),
        NavItem::new(Page::Debugger, "Code Debugger", Capability::Code),
        NavItem::new(Page::Tutorials, "Interactive Tutorials", Capability::Book),
        NavItem::new(Page::Progress, "Learning Progress", Capability::Chart),
        NavItem::new(Page::Settings, "Voice Settings", Capability::Settings),
    ]
}

/// Returns the feature blurbs listed under the menu.
pub fn feature_highlights() -> Vec<FeatureHighlight> {
    vec![
        FeatureHighlight {
            title: "Voice Interaction".to_string(),
            description: "Speak your questions".to_string(),
            capability: Capability::Voice,
        },
        FeatureHighlight {
            title: "AI-Powered".to_string(),
            description: "Smart explanations".to_string(),
            capability: Capability::Spark,
        },
    ]
}

/// One menu entry as rendered for a given location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntryView<'a> {
    pub item: &'a NavItem,
    /// True only for the entry whose route is the current path
    pub active: bool,
}

impl NavEntryView<'_> {
    pub fn icon(&self, renderer: &dyn IconRenderer) -> String {
        renderer.render_icon(self.item.capability)
    }
}

/// Ordered list of sidebar entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationMenu {
    items: Vec<NavItem>,
}

impl Default for NavigationMenu {
    fn default() -> Self {
        Self::new(default_nav_items())
    }
}

impl NavigationMenu {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Renders every entry in order, marking the one whose route equals the
    /// path of `location`. Query string and fragment are ignored.
    pub fn render(&self, location: &str) -> Vec<NavEntryView<'_>> {
        let path = location_path(location);
        self.items
            .iter()
            .map(|item| NavEntryView {
                item,
                active: item.route == path,
            })
            .collect()
    }

    /// The entry matching `location`, if any.
    pub fn active_item(&self, location: &str) -> Option<&NavItem> {
        let path = location_path(location);
        self.items.iter().find(|item| item.route == path)
    }
}

fn location_path(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::TagIconRenderer;

    #[test]
    fn test_default_menu_order() {
        let menu = NavigationMenu::default();
        let labels: Vec<&str> = menu.items().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Code Debugger",
                "Interactive Tutorials",
                "Learning Progress",
                "Voice Settings",
            ]
        );
        let routes: Vec<&str> = menu.items().iter().map(|i| i.route.as_str()).collect();
        assert_eq!(
            routes,
            vec!["/Dashboard", "/Debugger", "/Tutorials", "/Progress", "/Settings"]
        );
    }

    #[test]
    fn test_exactly_one_active_entry() {
        let menu = NavigationMenu::default();
        for item in menu.items() {
            let views = menu.render(&item.route);
            let active: Vec<_> = views.iter().filter(|v| v.active).collect();
            assert_eq!(active.len(), 1, "location {}", item.route);
            assert_eq!(active[0].item, item);
        }
    }

    #[test]
    fn test_no_active_entry_for_unknown_location() {
        let menu = NavigationMenu::default();
        assert!(menu.render("/Unknown").iter().all(|v| !v.active));
        assert!(menu.render("/").iter().all(|v| !v.active));
        // Matching is exact, not prefix or case-insensitive
        assert!(menu.render("/Debugger/extra").iter().all(|v| !v.active));
        assert!(menu.render("/debugger").iter().all(|v| !v.active));
        assert!(menu.active_item("/Unknown").is_none());
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        let menu = NavigationMenu::default();
        let active = menu.active_item("/Progress?week=2#chart").unwrap();
        assert_eq!(active.label, "Learning Progress");

        let views = menu.render("/Settings#voice");
        assert_eq!(views.iter().filter(|v| v.active).count(), 1);
        assert!(views[4].active);
    }

    #[test]
    fn test_render_preserves_order_and_icons() {
        let menu = NavigationMenu::default();
        let views = menu.render("/Tutorials");
        assert_eq!(views.len(), 5);
        assert!(views[2].active);
        assert_eq!(views[2].icon(&TagIconRenderer), "[book]");
        assert_eq!(views[0].icon(&TagIconRenderer), "[home]");
    }

    #[test]
    fn test_feature_highlights() {
        let features = feature_highlights();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].title, "Voice Interaction");
        assert_eq!(features[1].capability, Capability::Spark);
    }
}

use codetutor_core::navigation::{
    BRAND_TAGLINE, BRAND_TITLE, Capability, FEATURES_GROUP_LABEL, FOOTER_TAGLINE, FOOTER_TITLE,
    IconRenderer, MENU_GROUP_LABEL, NavigationMenu, feature_highlights,
};
use colored::Colorize;

/// Emoji glyphs for terminal output.
struct TerminalIcons;

impl IconRenderer for TerminalIcons {
    fn render_icon(&self, capability: Capability) -> String {
        match capability {
            Capability::Home => "🏠",
            Capability::Code => "💻",
            Capability::Book => "📖",
            Capability::Chart => "📊",
            Capability::Settings => "⚙️",
            Capability::Voice => "🎧",
            Capability::Spark => "⚡",
            Capability::Brain => "🧠",
        }
        .to_string()
    }
}

pub fn show(current: Option<&str>) {
    let menu = NavigationMenu::default();
    let icons = TerminalIcons;

    println!(
        "{} {}  {}",
        icons.render_icon(Capability::Brain),
        BRAND_TITLE.bold(),
        BRAND_TAGLINE.blue()
    );
    println!();
    println!("{}", MENU_GROUP_LABEL.to_uppercase().dimmed());

    for view in menu.render(current.unwrap_or_default()) {
        let line = format!("{} {}  {}", view.icon(&icons), view.item.label, view.item.route);
        if view.active {
            println!("{} {}", "▌".blue(), line.blue().bold());
        } else {
            println!("  {}", line);
        }
    }

    println!();
    println!("{}", FEATURES_GROUP_LABEL.to_uppercase().dimmed());
    for feature in feature_highlights() {
        println!(
            "  {} {} - {}",
            icons.render_icon(feature.capability),
            feature.title,
            feature.description.dimmed()
        );
    }

    println!();
    println!("{} {}", FOOTER_TITLE.bold(), FOOTER_TAGLINE.blue());
}

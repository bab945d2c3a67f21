//! Icon rendering abstraction.

use super::model::Capability;

/// Maps a capability tag to whatever the front end draws for it.
pub trait IconRenderer {
    fn render_icon(&self, capability: Capability) -> String;
}

/// Renders the tag name in brackets, e.g. `[home]`.
///
/// Useful for plain-text output and as a fallback when no icon set is
/// available.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagIconRenderer;

impl IconRenderer for TagIconRenderer {
    fn render_icon(&self, capability: Capability) -> String {
        format!("[{}]", capability.as_ref())
    }
}

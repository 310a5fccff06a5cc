use super::tag::{CapabilityTag, FALLBACK_GLYPH};

/// Classifies step descriptions into [`CapabilityTag`]s.
///
/// Matching is a case-sensitive substring search over an ordered keyword
/// list: the first registered keyword found in the description wins. A step
/// containing both `"Mail"` and `"Database"` therefore always resolves to
/// `Mail`, because `Mail` registers earlier. This tie-break is deliberate
/// and stable; tests pin the registration order.
///
/// Classification is total: a description matching no keyword falls back to
/// the default tag instead of failing, so template authors are never blocked
/// by an unrecognized step wording.
#[derive(Debug, Clone)]
pub struct CapabilityRegistry {
    entries: Vec<(&'static str, CapabilityTag)>,
}

impl Default for CapabilityRegistry {
    /// Registers every built-in tag under its display name, in
    /// [`CapabilityTag::ALL`] order.
    fn default() -> Self {
        let entries = CapabilityTag::ALL
            .iter()
            .map(|tag| (tag.keyword(), *tag))
            .collect();
        Self { entries }
    }
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an additional keyword for a tag, appended after all existing
    /// entries. Earlier registrations keep precedence.
    pub fn register(&mut self, keyword: &'static str, tag: CapabilityTag) -> &mut Self {
        self.entries.push((keyword, tag));
        self
    }

    /// Classifies a step description. Pure and total.
    pub fn classify(&self, step_description: &str) -> CapabilityTag {
        self.entries
            .iter()
            .find(|(keyword, _)| step_description.contains(keyword))
            .map(|(_, tag)| *tag)
            .unwrap_or_default()
    }

    /// The display glyph for a tag.
    pub fn icon_for(&self, tag: CapabilityTag) -> &'static str {
        tag.glyph()
    }

    /// The display glyph for an icon *name* as it appears in raw catalog
    /// data. Unknown names get [`FALLBACK_GLYPH`].
    pub fn icon_for_name(&self, name: &str) -> &'static str {
        CapabilityTag::from_name(name)
            .map(|tag| tag.glyph())
            .unwrap_or(FALLBACK_GLYPH)
    }

    /// The registered `(keyword, tag)` pairs, in matching order.
    pub fn entries(&self) -> &[(&'static str, CapabilityTag)] {
        &self.entries
    }
}

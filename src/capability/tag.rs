use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph returned when an icon name does not correspond to any known tag.
pub const FALLBACK_GLYPH: &str = "🔧";

/// A semantic classification of a workflow step.
///
/// Tags drive icon rendering and step validation, but carry no rendering
/// state themselves: the tag is a pure label, and [`CapabilityTag::glyph`]
/// is a separate lookup. The variant order here is the registration order
/// used by [`CapabilityRegistry`](crate::capability::CapabilityRegistry) for
/// keyword matching, so it is part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum CapabilityTag {
    Webhook,
    Mail,
    Database,
    Code,
    MessageSquare,
    FileText,
    Brain,
    Zap,
    Filter,
    /// The default "generic action" tag. Unrecognized icon names in catalog
    /// data also deserialize to this variant.
    ArrowRight,
    CreditCard,
    Clock,
    Hash,
    Bell,
    Timer,
    RotateCcw,
}

impl CapabilityTag {
    /// Every tag, in registration order.
    pub const ALL: [CapabilityTag; 16] = [
        CapabilityTag::Webhook,
        CapabilityTag::Mail,
        CapabilityTag::Database,
        CapabilityTag::Code,
        CapabilityTag::MessageSquare,
        CapabilityTag::FileText,
        CapabilityTag::Brain,
        CapabilityTag::Zap,
        CapabilityTag::Filter,
        CapabilityTag::ArrowRight,
        CapabilityTag::CreditCard,
        CapabilityTag::Clock,
        CapabilityTag::Hash,
        CapabilityTag::Bell,
        CapabilityTag::Timer,
        CapabilityTag::RotateCcw,
    ];

    /// The keyword searched for in step descriptions when classifying.
    pub fn keyword(&self) -> &'static str {
        match self {
            CapabilityTag::Webhook => "Webhook",
            CapabilityTag::Mail => "Mail",
            CapabilityTag::Database => "Database",
            CapabilityTag::Code => "Code",
            CapabilityTag::MessageSquare => "MessageSquare",
            CapabilityTag::FileText => "FileText",
            CapabilityTag::Brain => "Brain",
            CapabilityTag::Zap => "Zap",
            CapabilityTag::Filter => "Filter",
            CapabilityTag::ArrowRight => "ArrowRight",
            CapabilityTag::CreditCard => "CreditCard",
            CapabilityTag::Clock => "Clock",
            CapabilityTag::Hash => "Hash",
            CapabilityTag::Bell => "Bell",
            CapabilityTag::Timer => "Timer",
            CapabilityTag::RotateCcw => "RotateCcw",
        }
    }

    /// The display glyph for this tag.
    pub fn glyph(&self) -> &'static str {
        match self {
            CapabilityTag::Webhook => "🔗",
            CapabilityTag::Mail => "📧",
            CapabilityTag::Database => "🗄️",
            CapabilityTag::Code => "💻",
            CapabilityTag::MessageSquare => "💬",
            CapabilityTag::FileText => "📝",
            CapabilityTag::Brain => "🧠",
            CapabilityTag::Zap => "⚡",
            CapabilityTag::Filter => "🔍",
            CapabilityTag::ArrowRight => "➡️",
            CapabilityTag::CreditCard => "💳",
            CapabilityTag::Clock => "🕐",
            CapabilityTag::Hash => "#️⃣",
            CapabilityTag::Bell => "🔔",
            CapabilityTag::Timer => "⏱️",
            CapabilityTag::RotateCcw => "🔄",
        }
    }

    /// Looks a tag up by its display name, e.g. `"Mail"`.
    pub fn from_name(name: &str) -> Option<CapabilityTag> {
        Self::ALL.iter().copied().find(|tag| tag.keyword() == name)
    }
}

impl Default for CapabilityTag {
    fn default() -> Self {
        CapabilityTag::ArrowRight
    }
}

/// Catalog data carries icon names as strings; unrecognized names degrade to
/// the default tag instead of failing deserialization.
impl From<String> for CapabilityTag {
    fn from(name: String) -> Self {
        CapabilityTag::from_name(&name).unwrap_or_default()
    }
}

impl fmt::Display for CapabilityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

//! Preference badge registry — the fixed catalogue of enhancement preferences.
//!
//! Each badge carries the instruction fragment appended to the system prompt
//! when the badge is selected. Icons are plain identifiers resolved to glyphs
//! by the presentation layer; the registry has no rendering dependency.

use serde::Serialize;

/// Badge grouping shown to the user: target AI model, target platform,
/// or desired tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeCategory {
    AiModel,
    Platform,
    Tone,
}

/// A single preference badge. Immutable, defined once at startup.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PreferenceBadge {
    pub id: &'static str,
    pub label: &'static str,
    /// Icon identifier for the presentation layer (e.g. "robot", "envelope").
    pub icon: &'static str,
    pub category: BadgeCategory,
    /// Instruction fragment appended to the system prompt when selected.
    /// Not serialized — callers of the badge list never see prompt internals.
    #[serde(skip)]
    pub modifier: &'static str,
}

/// The full ordered badge catalogue. Order here is the display order.
pub const AVAILABLE_BADGES: &[PreferenceBadge] = &[
    // AI models
    PreferenceBadge {
        id: "chatgpt",
        label: "ChatGPT",
        icon: "robot",
        category: BadgeCategory::AiModel,
        modifier: "Structure the prompt text with clear, conversational phrasing that works well with ChatGPT's interface.",
    },
    PreferenceBadge {
        id: "claude",
        label: "Claude",
        icon: "magic-wand",
        category: BadgeCategory::AiModel,
        modifier: "Refine the prompt text to be well-structured and logically organized for Claude's processing style.",
    },
    PreferenceBadge {
        id: "gemini",
        label: "Gemini",
        icon: "sparkle",
        category: BadgeCategory::AiModel,
        modifier: "Polish the prompt text for clarity and precision, suitable for Gemini's analytical approach.",
    },
    PreferenceBadge {
        id: "lovable",
        label: "Lovable",
        icon: "heart",
        category: BadgeCategory::AiModel,
        modifier: "Ensure the prompt text includes specific technical requirements and clear project context for development tools.",
    },
    PreferenceBadge {
        id: "v0",
        label: "v0",
        icon: "code",
        category: BadgeCategory::AiModel,
        modifier: "Refine the prompt text to include clear UI/component specifications and technical requirements.",
    },
    // Platforms
    PreferenceBadge {
        id: "email",
        label: "Email",
        icon: "envelope",
        category: BadgeCategory::Platform,
        modifier: "Structure the prompt text to be appropriate for email communication context.",
    },
    PreferenceBadge {
        id: "whatsapp",
        label: "WhatsApp",
        icon: "whatsapp-logo",
        category: BadgeCategory::Platform,
        modifier: "Keep the prompt text concise and conversational for mobile messaging.",
    },
    PreferenceBadge {
        id: "slack",
        label: "Slack",
        icon: "slack-logo",
        category: BadgeCategory::Platform,
        modifier: "Structure the prompt text for team collaboration and workplace communication.",
    },
    PreferenceBadge {
        id: "twitter",
        label: "Twitter",
        icon: "twitter-logo",
        category: BadgeCategory::Platform,
        modifier: "Ensure the prompt text is concise and engagement-focused.",
    },
    PreferenceBadge {
        id: "linkedin",
        label: "LinkedIn",
        icon: "linkedin-logo",
        category: BadgeCategory::Platform,
        modifier: "Polish the prompt text for professional networking context.",
    },
    // Tone / style
    PreferenceBadge {
        id: "professional",
        label: "Professional",
        icon: "text-indent",
        category: BadgeCategory::Tone,
        modifier: "Refine the prompt text to use formal, professional language.",
    },
    PreferenceBadge {
        id: "casual",
        label: "Casual",
        icon: "smiley",
        category: BadgeCategory::Tone,
        modifier: "Keep the prompt text conversational and approachable.",
    },
    PreferenceBadge {
        id: "technical",
        label: "Technical",
        icon: "gear",
        category: BadgeCategory::Tone,
        modifier: "Ensure the prompt text uses precise technical language and specific terminology.",
    },
];

/// Returns the instruction fragment for a badge id, or `None` for unknown
/// ids. Unknown ids are tolerated everywhere — never an error.
pub fn modifier_for(id: &str) -> Option<&'static str> {
    AVAILABLE_BADGES
        .iter()
        .find(|b| b.id == id)
        .map(|b| b.modifier)
}

/// The full catalogue, in display order. Used only by the badge listing
/// endpoint — prompt composition looks ids up via `modifier_for`.
pub fn available_badges() -> &'static [PreferenceBadge] {
    AVAILABLE_BADGES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_badge_ids_are_unique() {
        let ids: HashSet<&str> = AVAILABLE_BADGES.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), AVAILABLE_BADGES.len(), "duplicate badge id");
    }

    #[test]
    fn test_modifier_for_known_id() {
        let m = modifier_for("professional").expect("professional must exist");
        assert!(m.contains("formal, professional language"));
    }

    #[test]
    fn test_modifier_for_unknown_id_is_none() {
        assert!(modifier_for("doesnotexist").is_none());
    }

    #[test]
    fn test_every_badge_has_nonempty_fields() {
        for b in AVAILABLE_BADGES {
            assert!(!b.id.is_empty());
            assert!(!b.label.is_empty());
            assert!(!b.icon.is_empty());
            assert!(!b.modifier.is_empty());
        }
    }

    #[test]
    fn test_catalogue_covers_all_three_categories() {
        for cat in [
            BadgeCategory::AiModel,
            BadgeCategory::Platform,
            BadgeCategory::Tone,
        ] {
            assert!(
                AVAILABLE_BADGES.iter().any(|b| b.category == cat),
                "no badge in category {cat:?}"
            );
        }
    }

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&BadgeCategory::AiModel).unwrap();
        assert_eq!(json, "\"ai-model\"");
    }

    #[test]
    fn test_badge_serialization_hides_modifier() {
        let json = serde_json::to_value(AVAILABLE_BADGES[0]).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("icon").is_some());
        assert!(
            json.get("modifier").is_none(),
            "instruction fragments must not leak to the presentation layer"
        );
    }
}

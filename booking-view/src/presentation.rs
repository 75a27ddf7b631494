//! How a ride status is drawn. Every status, including unknown ones,
//! resolves to something displayable.

use crate::i18n::Messages;
use payloads::RideStatus;

/// Badge style, mirroring the design system's badge variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
    Destructive,
}

impl BadgeVariant {
    /// Base classes of the variant.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => {
                "border-transparent bg-neutral-900 text-neutral-50 \
                 dark:bg-neutral-50 dark:text-neutral-900"
            }
            Self::Secondary => {
                "border-transparent bg-neutral-100 text-neutral-900 \
                 dark:bg-neutral-800 dark:text-neutral-50"
            }
            Self::Outline => "text-neutral-950 dark:text-neutral-50",
            Self::Destructive => "border-transparent bg-red-500 text-white",
        }
    }
}

pub fn badge_variant(status: &RideStatus) -> BadgeVariant {
    match status {
        RideStatus::Pending => BadgeVariant::Secondary,
        RideStatus::Confirmed => BadgeVariant::Outline,
        RideStatus::Completed => BadgeVariant::Default,
        RideStatus::Cancelled => BadgeVariant::Destructive,
        RideStatus::Unknown(_) => BadgeVariant::Secondary,
    }
}

/// Extra color classes layered over the variant. Empty for unknown.
pub fn status_color(status: &RideStatus) -> &'static str {
    match status {
        RideStatus::Pending => "bg-orange-400",
        RideStatus::Confirmed => "border-green-500 text-green-500",
        RideStatus::Completed => "bg-green-500",
        RideStatus::Cancelled => "bg-red-400",
        RideStatus::Unknown(_) => "",
    }
}

/// Localized label, or the raw status when there is no translation.
pub fn status_label(messages: &Messages, status: &RideStatus) -> String {
    messages.translate_or("status", &status.key(), &status.raw())
}

/// Everything needed to draw one status badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub variant: BadgeVariant,
    pub color: &'static str,
}

impl StatusBadge {
    pub fn new(messages: &Messages, status: &RideStatus) -> Self {
        Self {
            label: status_label(messages, status),
            variant: badge_variant(status),
            color: status_color(status),
        }
    }

    pub fn classes(&self) -> String {
        format!(
            "inline-flex items-center rounded-md border px-2.5 py-0.5 \
             text-xs font-semibold {} {}",
            self.variant.classes(),
            self.color
        )
    }
}

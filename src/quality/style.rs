//! Quality tier to display style mappings

use crate::{ComplexityQuality, QualityStyle};
use colored::Color;

/// Chip classes (background + foreground) for a tier.
/// Worst deliberately shares the bad background.
pub fn display_class(quality: ComplexityQuality) -> &'static str {
    match quality {
        ComplexityQuality::Best => "bg-complexity-best text-gray-900",
        ComplexityQuality::Good => "bg-complexity-good text-gray-900",
        ComplexityQuality::Fair => "bg-complexity-fair text-gray-900",
        ComplexityQuality::Bad => "bg-complexity-bad text-gray-900",
        ComplexityQuality::Worst => "bg-complexity-bad text-gray-900",
        ComplexityQuality::Na => "bg-complexity-na text-gray-600",
    }
}

/// Text-only emphasis classes, for labels without a chip
pub fn text_class(quality: ComplexityQuality) -> &'static str {
    match quality {
        ComplexityQuality::Best => "text-green-600 dark:text-green-400",
        ComplexityQuality::Good => "text-lime-600 dark:text-lime-400",
        ComplexityQuality::Fair => "text-yellow-600 dark:text-yellow-400",
        ComplexityQuality::Bad => "text-red-500 dark:text-red-400",
        ComplexityQuality::Worst => "text-red-600 dark:text-red-500",
        ComplexityQuality::Na => "text-gray-500 dark:text-gray-400",
    }
}

pub fn label(quality: ComplexityQuality) -> &'static str {
    match quality {
        ComplexityQuality::Best => "Best",
        ComplexityQuality::Good => "Good",
        ComplexityQuality::Fair => "Fair",
        ComplexityQuality::Bad => "Bad",
        ComplexityQuality::Worst => "Worst",
        ComplexityQuality::Na => "N/A",
    }
}

/// Terminal color used by the console reporter
pub fn terminal_color(quality: ComplexityQuality) -> Color {
    match quality {
        ComplexityQuality::Best => Color::Green,
        ComplexityQuality::Good => Color::BrightGreen,
        ComplexityQuality::Fair => Color::Yellow,
        ComplexityQuality::Bad => Color::Red,
        ComplexityQuality::Worst => Color::BrightRed,
        ComplexityQuality::Na => Color::BrightBlack,
    }
}

/// Full style record for a tier
pub fn style_for(quality: ComplexityQuality) -> QualityStyle {
    QualityStyle {
        display_class: display_class(quality),
        text_class: text_class(quality),
        label: label(quality),
    }
}

/// Chip classes for a notation (classify, then map)
pub fn complexity_class(notation: &str) -> &'static str {
    display_class(super::classify(notation))
}

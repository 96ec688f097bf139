//! Color scheme for overlay identities in terminal output.
//!
//! # Color Scheme
//! - **Conflict**: Red bold, needs resolution
//! - **Dirty**: Yellow for unstaged work
//! - **Staged**: Green for additions and modifications, red for removals
//! - **Untracked**: Cyan
//! - **Ignored / None**: Bright black (muted)
//! - **Assume-unchanged**: Magenta

use crate::core::overlay::OverlayIdentity;
use colored::*;

/// Color function for an overlay identity
pub fn get_overlay_color_style(overlay: OverlayIdentity) -> Box<dyn Fn(&str) -> ColoredString> {
    match overlay {
        OverlayIdentity::Conflict => Box::new(|text: &str| text.red().bold()),
        OverlayIdentity::Dirty => Box::new(|text: &str| text.yellow()),
        OverlayIdentity::Staged | OverlayIdentity::StagedAdded => {
            Box::new(|text: &str| text.green())
        }
        OverlayIdentity::StagedRemoved => Box::new(|text: &str| text.red()),
        OverlayIdentity::Untracked => Box::new(|text: &str| text.cyan()),
        OverlayIdentity::AssumeUnchanged => Box::new(|text: &str| text.magenta()),
        OverlayIdentity::Ignored | OverlayIdentity::None => {
            Box::new(|text: &str| text.bright_black())
        }
        OverlayIdentity::Tracked => Box::new(|text: &str| text.normal()),
    }
}

/// Colored two-column overlay symbol
pub fn get_overlay_symbol(overlay: OverlayIdentity) -> ColoredString {
    get_overlay_color_style(overlay)(overlay.symbol())
}

/// Colored label text using the overlay color
pub fn get_colored_label(overlay: OverlayIdentity, label: &str) -> ColoredString {
    get_overlay_color_style(overlay)(label)
}

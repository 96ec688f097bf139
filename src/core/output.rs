//! Output formatting for the command line front end.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, overlay colors for decoration lines
//! - **Aligned columns**: symbol, overlay identity, kind, label
//! - **JSON mode**: one JSON document per command, no colors

use crate::core::colors::{get_colored_label, get_overlay_symbol};
use crate::core::decorator::ResourceDecoration;
use crate::core::overlay::OverlayIdentity;
use colored::*;
use serde::Serialize;

/// One decorated resource as printed by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecorationLine {
    #[serde(flatten)]
    pub decoration: ResourceDecoration,
    pub overlay: OverlayIdentity,
    pub label: String,
}

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Render one decoration line for terminal output
///
/// # Format
/// ```text
///   <symbol>  <OVERLAY>          <kind>    <label>
/// ```
pub fn format_decoration_line(line: &DecorationLine) -> String {
    format!(
        "  {}  {:<16}  {:<6}  {}",
        get_overlay_symbol(line.overlay),
        line.overlay.as_str(),
        line.decoration.kind.as_str(),
        get_colored_label(line.overlay, &line.label)
    )
}

/// Print decoration lines, either colored text or one JSON array
pub fn print_decoration_lines(lines: &[DecorationLine], json: bool) -> crate::core::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(lines)?);
        return Ok(());
    }

    println!();
    for line in lines {
        println!("{}", format_decoration_line(line));
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classification::Classification;
    use crate::core::repo_path::RepoPath;
    use crate::core::resources::ResourceKind;

    fn line(overlay: OverlayIdentity) -> DecorationLine {
        DecorationLine {
            decoration: ResourceDecoration {
                kind: ResourceKind::Leaf,
                name: "lib.rs".to_string(),
                path: Some(RepoPath::parse("src/lib.rs").unwrap()),
                classification: Classification::clean().with_dirty(true),
            },
            overlay,
            label: "> lib.rs".to_string(),
        }
    }

    #[test]
    fn test_format_decoration_line_columns() {
        colored::control::set_override(false);
        let text = format_decoration_line(&line(OverlayIdentity::Dirty));
        assert_eq!(text, "   M  DIRTY             file    > lib.rs");
    }

    #[test]
    fn test_json_line_flattens_decoration() {
        let json = serde_json::to_value(line(OverlayIdentity::Dirty)).unwrap();
        assert_eq!(json["overlay"], "DIRTY");
        assert_eq!(json["path"], "src/lib.rs");
        assert_eq!(json["kind"], "leaf");
        assert_eq!(json["classification"]["dirty"], true);
    }

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }
}

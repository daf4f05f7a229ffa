//! Color tokens as CSS custom properties.
//!
//! Generated from the core catalog so the swatches on the design page and
//! the colors used by the stylesheet can never disagree.
//!
//! - `--b1` .. `--b8`, `--r1` .. and so on for each base palette
//! - `--neutral-0` (black) .. `--neutral-9` (white)
//! - `--shadow-1` .. `--shadow-3`, `--radius-*`

use std::fmt::Write;

use showcase_core::catalog::{BASE_PALETTES, FONT_FAMILY, NEUTRALS, RADII, SHADOWS};

/// `:root { ... }` block declaring every design token
pub fn token_variables() -> String {
    let mut css = String::from(":root {\n");

    for palette in BASE_PALETTES.iter() {
        for (index, shade) in palette.shades.iter().enumerate() {
            let token = palette.token(index + 1).to_ascii_lowercase();
            let _ = writeln!(css, "  --{}: {};", token, shade);
        }
    }

    for (index, neutral) in NEUTRALS.iter().enumerate() {
        let _ = writeln!(css, "  --neutral-{}: {};", index, neutral.color);
    }

    for (index, (_, value, _)) in SHADOWS.iter().enumerate() {
        let _ = writeln!(css, "  --shadow-{}: {};", index + 1, value);
    }

    // 0px, 2px, 4px, 50%
    for (name, radius) in ["none", "sm", "lg", "full"].iter().zip(RADII.iter()) {
        let _ = writeln!(css, "  --radius-{}: {};", name, radius.value);
    }

    let _ = writeln!(css, "  --font-sans: {};", FONT_FAMILY);
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_primary_blue() {
        let css = token_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --b1: #2E4CB3;"));
        assert!(css.contains("  --b8: #F2F5FF;"));
    }

    #[test]
    fn declares_neutrals_zero_based() {
        let css = token_variables();
        assert!(css.contains("  --neutral-0: #000000;"));
        assert!(css.contains("  --neutral-7: #F3F5FA;"));
        assert!(css.contains("  --neutral-9: #FFFFFF;"));
    }

    #[test]
    fn declares_shadows_and_radii() {
        let css = token_variables();
        assert!(css.contains("--shadow-3:"));
        assert!(css.contains("  --radius-lg: 4px;"));
        assert!(css.contains("  --radius-full: 50%;"));
    }
}

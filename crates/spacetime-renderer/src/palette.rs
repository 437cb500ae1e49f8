//! Catppuccin Mocha colors used for the background and the grid

use catppuccin::{Color, PALETTE};

/// Convert a palette entry to RGBA floats in [0, 1]
pub fn rgba(color: &Color, alpha: f32) -> [f32; 4] {
    [
        color.rgb.r as f32 / 255.0,
        color.rgb.g as f32 / 255.0,
        color.rgb.b as f32 / 255.0,
        alpha,
    ]
}

/// Frame clear color
pub fn background() -> [f32; 4] {
    rgba(&PALETTE.mocha.colors.crust, 1.0)
}

/// Grid color far from any mass
pub fn grid_flat() -> [f32; 4] {
    rgba(&PALETTE.mocha.colors.surface2, 0.6)
}

/// Grid color at the bottom of a deep well
pub fn grid_deep() -> [f32; 4] {
    rgba(&PALETTE.mocha.colors.mauve, 0.9)
}

/// Component-wise blend, `t` clamped to [0, 1]
pub fn mix(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    let t = t.clamp(0.0, 1.0);
    std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints() {
        let a = [0.0, 0.0, 0.0, 1.0];
        let b = [1.0, 0.5, 0.25, 0.0];
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        assert_eq!(mix(a, b, 7.0), b);
        assert_eq!(mix(a, b, 0.5), [0.5, 0.25, 0.125, 0.5]);
    }

    #[test]
    fn test_palette_in_range() {
        for c in [background(), grid_flat(), grid_deep()] {
            assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }
}

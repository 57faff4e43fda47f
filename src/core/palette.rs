use super::color::Color;

/// Fill alpha used for every bar.
pub const FILL_ALPHA: f64 = 0.8;

/// Known renderer identities and their display colors.
pub const RENDERER_COLORS: [(&str, (u8, u8, u8)); 7] = [
    ("blend2d", (255, 99, 132)),
    ("agg", (54, 162, 235)),
    ("cairo", (255, 206, 86)),
    ("skia", (75, 192, 192)),
    ("vello-cpu", (153, 102, 255)),
    ("tiny-skia", (255, 159, 64)),
    ("juce", (199, 199, 199)),
];

const FALLBACK_RGB: (u8, u8, u8) = (128, 128, 128);

/// Fill color for a renderer identity (see `RunProfile::renderer`).
///
/// Unknown renderers share one neutral gray.
#[must_use]
pub fn renderer_color(renderer: &str) -> Color {
    let (red, green, blue) = RENDERER_COLORS
        .iter()
        .find(|(key, _)| *key == renderer)
        .map_or(FALLBACK_RGB, |(_, rgb)| *rgb);
    Color::from_rgba8(red, green, blue, FILL_ALPHA)
}

#[must_use]
pub fn fallback_color() -> Color {
    let (red, green, blue) = FALLBACK_RGB;
    Color::from_rgba8(red, green, blue, FILL_ALPHA)
}

/// Opaque variant of the fill color used for bar borders.
#[must_use]
pub fn renderer_border_color(renderer: &str) -> Color {
    renderer_color(renderer).with_alpha(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_renderers_have_distinct_colors() {
        for (i, (left, _)) in RENDERER_COLORS.iter().enumerate() {
            assert_ne!(renderer_color(left), fallback_color());
            for (right, _) in RENDERER_COLORS.iter().skip(i + 1) {
                assert_ne!(renderer_color(left), renderer_color(right));
            }
        }
    }

    #[test]
    fn css_form_matches_chart_palette() {
        assert_eq!(
            renderer_color("blend2d").to_css_rgba(),
            "rgba(255, 99, 132, 0.8)"
        );
        assert_eq!(
            renderer_border_color("unknown").to_css_rgba(),
            "rgba(128, 128, 128, 1)"
        );
    }
}

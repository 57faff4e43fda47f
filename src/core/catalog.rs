//! Canonical display order for tests and styles.

use indexmap::IndexSet;

/// Test operations in the order published on the Blend2D performance page.
pub const TEST_ORDER: [&str; 29] = [
    "FillRectA",
    "FillRectU",
    "FillRectRot",
    "FillRoundU",
    "FillRoundRot",
    "FillTriangle",
    "FillPolyNZi10",
    "FillPolyEOi10",
    "FillPolyNZi20",
    "FillPolyEOi20",
    "FillPolyNZi40",
    "FillPolyEOi40",
    "FillButterfly",
    "FillFish",
    "FillDragon",
    "FillWorld",
    "StrokeRectA",
    "StrokeRectU",
    "StrokeRectRot",
    "StrokeRoundU",
    "StrokeRoundRot",
    "StrokeTriangle",
    "StrokePoly10",
    "StrokePoly20",
    "StrokePoly40",
    "StrokeButterfly",
    "StrokeFish",
    "StrokeDragon",
    "StrokeWorld",
];

pub const STYLE_ORDER: [&str; 5] = ["Solid", "Linear", "Radial", "Conic", "Pattern"];

/// Orders `collected` by `canonical`, then appends unknown entries in
/// encounter order.
#[must_use]
pub fn order_by_catalog(collected: &IndexSet<&str>, canonical: &[&str]) -> Vec<String> {
    let mut ordered = Vec::with_capacity(collected.len());
    ordered.extend(
        canonical
            .iter()
            .filter(|name| collected.contains(*name))
            .map(|name| (*name).to_owned()),
    );
    ordered.extend(
        collected
            .iter()
            .filter(|name| !canonical.contains(*name))
            .map(|name| (*name).to_owned()),
    );
    ordered
}

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::metric::Metric;

/// Formatting metadata handed to the rendering surface alongside a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFormat {
    pub metric: Metric,
}

impl ValueFormat {
    #[must_use]
    pub const fn new(metric: Metric) -> Self {
        Self { metric }
    }

    /// Bar value label: two decimals below 1, one below 10, integer above.
    #[must_use]
    pub fn format_value(self, value: f64) -> String {
        let text = if value < 1.0 {
            to_fixed(value, 2)
        } else if value < 10.0 {
            to_fixed(value, 1)
        } else {
            to_fixed(value, 0)
        };
        self.with_suffix(text)
    }

    /// Value-axis tick label.
    #[must_use]
    pub fn format_tick(self, value: f64) -> String {
        self.with_suffix(shortest(value))
    }

    fn with_suffix(self, mut text: String) -> String {
        if let Some(suffix) = self.metric.unit_suffix() {
            text.push_str(suffix);
        }
        text
    }
}

/// Rounds half away from zero on the exact binary value of `value`.
///
/// The sign follows the input, so `-0.001` at two decimals is `-0.00`
/// while `-0.0` is `0.00`.
fn to_fixed(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return shortest(value);
    }
    let magnitude = match Decimal::from_f64_retain(value.abs()) {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(decimals);
            rounded.to_string()
        }
        None => format!("{:.prec$}", value.abs(), prec = decimals as usize),
    };
    if value < 0.0 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

fn shortest(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value == f64::INFINITY {
        "Infinity".to_owned()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_owned()
    } else {
        format!("{value}")
    }
}

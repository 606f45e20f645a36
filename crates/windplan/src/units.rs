//! Human-readable lengths/areas and the map scale bar.
//!
//! Values are rounded to two significant digits; the unit switches to the
//! larger one shortly before the rounded value would print as `1000`.

/// Metres below 995, kilometres from there on.
pub fn format_length(metres: f64) -> String {
    format_adapted(metres, ("m", "km"), 1_000.0)
}

/// Square metres (`qm`) below 9950, hectares from there on.
///
/// One hectare is 10 000 qm. Earlier planner versions switched at 995 qm and
/// divided by 1000, which printed hectare labels ten times too large.
pub fn format_area(square_metres: f64) -> String {
    format_adapted(square_metres, ("qm", "ha"), 10_000.0)
}

fn format_adapted(input: f64, (small, large): (&str, &str), factor: f64) -> String {
    if !input.is_finite() {
        let unit = if input > 0.0 { large } else { small };
        return format!("{input} {unit}");
    }
    let (value, unit) = if input >= factor * 0.995 {
        (input / factor, large)
    } else {
        (input, small)
    };
    let text = if value < 1.0 {
        format!("{value:.2}")
    } else {
        let digits = (value.log10().floor() as i32).saturating_add(1);
        if digits == 1 {
            format!("{value:.1}")
        } else {
            format!("{:.0}", precision_round(value, 2 - digits))
        }
    };
    format!("{text} {unit}")
}

/// Round to `precision` decimal places; negative values round left of the point.
fn precision_round(value: f64, precision: i32) -> f64 {
    let f = 10f64.powi(precision);
    (value * f).round() / f
}

/// Scale bar fitted into a maximum screen width.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleBar {
    /// World length shown by the bar, one significant digit.
    pub value: f64,
    /// Screen length of the bar.
    pub size: f64,
    /// Number of tick intervals.
    pub subdivisions: u32,
    pub label: String,
}

impl ScaleBar {
    /// `view_scale` is screen units per world unit.
    ///
    /// `None` if less than one world unit fits or the scale is unusable.
    pub fn fit(view_scale: f64, max_width: f64) -> Option<Self> {
        if !(view_scale.is_finite() && view_scale > 0.0) {
            return None;
        }
        let distance = max_width / view_scale;
        if !(distance.is_finite() && distance >= 1.0) {
            return None;
        }
        let digits = distance.log10().floor() as i32 + 1;
        let magnitude = 10f64.powi(digits - 1);
        let leading = ((distance + f64::EPSILON) / magnitude).floor();
        let value = leading * magnitude;
        let label = if value > 999.0 {
            format!("{} km", (value / 1000.0).round())
        } else {
            format!("{value} m")
        };
        let leading = leading as u32;
        Some(Self {
            value,
            size: value * view_scale,
            subdivisions: if leading == 1 { 10 } else { leading },
            label,
        })
    }

    /// Screen offsets of the inner ticks.
    pub fn tick_positions(&self) -> Vec<f64> {
        let n = self.subdivisions;
        (1..n).map(|i| f64::from(i) * self.size / f64::from(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_adapt_units_and_precision() {
        assert_eq!(format_length(0.5), "0.50 m");
        assert_eq!(format_length(5.3), "5.3 m");
        assert_eq!(format_length(12.34), "12 m");
        assert_eq!(format_length(123.4), "120 m");
        assert_eq!(format_length(1500.0), "1.5 km");
        assert_eq!(format_length(250_000.0), "250 km");
    }

    #[test]
    fn areas_switch_to_hectares() {
        assert_eq!(format_area(500.0), "500 qm");
        assert_eq!(format_area(7_854.0), "7900 qm");
        assert_eq!(format_area(25_000.0), "2.5 ha");
        assert_eq!(format_area(1_234_000.0), "120 ha");
    }

    #[test]
    fn non_finite_values_format_without_panicking() {
        assert_eq!(format_length(f64::INFINITY), "inf km");
        assert_eq!(format_area(f64::INFINITY), "inf ha");
        assert_eq!(format_length(f64::NAN), "NaN m");
        assert_eq!(format_area(f64::NEG_INFINITY), "-inf qm");
        // Largest finite values still take the rounding path.
        assert!(format_length(f64::MAX).ends_with(" km"));
        assert!(format_area(f64::MAX).ends_with(" ha"));
    }

    #[test]
    fn scale_bar_rounds_down_to_leading_digit() {
        let bar = ScaleBar::fit(1.0, 200.0).unwrap();
        assert_eq!(bar.value, 200.0);
        assert_eq!(bar.size, 200.0);
        assert_eq!(bar.subdivisions, 2);
        assert_eq!(bar.label, "200 m");

        let bar = ScaleBar::fit(0.75, 200.0).unwrap();
        // 266.67 m fit, shown as 200 m.
        assert_eq!(bar.value, 200.0);
        assert!((bar.size - 150.0).abs() < 1e-12);

        let bar = ScaleBar::fit(0.0625, 200.0).unwrap();
        assert_eq!(bar.value, 3000.0);
        assert_eq!(bar.label, "3 km");
    }

    #[test]
    fn scale_bar_with_leading_one_uses_ten_ticks() {
        let bar = ScaleBar::fit(2.0, 200.0).unwrap();
        assert_eq!(bar.value, 100.0);
        assert_eq!(bar.subdivisions, 10);
        assert_eq!(bar.tick_positions().len(), 9);
        assert!((bar.tick_positions()[0] - 20.0).abs() < 1e-12);
    }

    #[test]
    fn scale_bar_hidden_when_zoomed_in_too_far() {
        assert!(ScaleBar::fit(500.0, 200.0).is_none());
        assert!(ScaleBar::fit(0.0, 200.0).is_none());
        assert!(ScaleBar::fit(f64::NAN, 200.0).is_none());
    }
}

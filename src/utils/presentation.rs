//! Resting place for [PresentableMeasurement]

use std::borrow::Cow;
use std::fmt::Display;
use std::time::Duration;
use once_cell::sync::Lazy;

/// Holds and presents pass measurements with auto-scaling
pub struct PresentableMeasurement {
    pub(crate) value: f64,
    /// := (threshold, scale, unit, format)
    auto_scale: &'static [(f64, f64, Cow<'static, str>, &'static str)],
}
impl Default for PresentableMeasurement {
    fn default() -> Self {
        Self {
            value: 0.0,
            auto_scale: &[],
        }
    }
}

impl Display for PresentableMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (scaled_value, suffix, format) = self.auto_scale.iter()
            .find(|&&(threshold, _, _, _)| self.value >= threshold)
            .map_or(
                (self.value, "<missing_unit_suffix_please_fix>", ":.2"),
                |&(_threshold, rate, ref suffix, format)| (self.value / rate, suffix.as_ref(), format));
        match format {
            ":.0"  => write!(f, "{:.0}{}",  scaled_value, suffix),
            ":.2"  => write!(f, "{:.2}{}",  scaled_value, suffix),
            ":D"   => write!(f, "{:?}",     Duration::from_secs_f64(scaled_value)),
            _ => panic!("Unknown format '{format}'. Please update this code")
        }
    }
}

/// Builds a [PresentableMeasurement] able to display & auto-scale
/// quantities representing "a duration".
pub fn duration_measurement(duration: Duration) -> PresentableMeasurement {
    const AUTO_SCALE_DATA: &[(f64, f64, Cow<'static, str>, &'static str)] = &[
        (0.0, 1.0, Cow::Borrowed(""), ":D"),
    ];

    PresentableMeasurement {
        value: duration.as_secs_f64(),
        auto_scale: AUTO_SCALE_DATA,
    }
}

/// Builds a [PresentableMeasurement] able to display & auto-scale
/// quantities representing "a number of elementary operations".
pub fn count_measurement(value: f64) -> PresentableMeasurement {
    static AUTO_SCALE_DATA: Lazy<Vec<(f64, f64, Cow<'static, str>, &'static str)>> = Lazy::new(|| {
        [
            (1e9, "Gops", ":.2"),
            (1e6, "Mops", ":.2"),
            (1e3, "kops", ":.2"),
            (1.0, "ops",  ":.0"),
            (0.0, "ops",  ":.0"),
        ]
        .into_iter()
        .map(|(threshold, suffix, format)| (
            threshold,
            if threshold != 0.0 { threshold } else { 1.0 },
            Cow::Borrowed(suffix),
            format
        ))
        .collect()
    });

    PresentableMeasurement {
        value,
        auto_scale: AUTO_SCALE_DATA.as_slice(),
    }
}

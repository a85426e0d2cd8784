use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Continuous color scale: numeric value → Color32
// ---------------------------------------------------------------------------

/// Hue sweep of the scale, cold (blue) at the domain minimum to warm
/// (yellow) at the maximum.
const HUE_MIN: f32 = 250.0;
const HUE_MAX: f32 = 60.0;

/// Maps values in a numeric domain onto a smooth hue gradient.
///
/// The domain normally comes straight from a view's `color_domain`; a
/// zero-width domain maps every value to the gradient midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    domain: (f64, f64),
}

impl ColorScale {
    pub fn new(domain: (f64, f64)) -> Self {
        ColorScale { domain }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Position of `value` within the domain, clamped to [0, 1].
    fn normalized(&self, value: f64) -> f32 {
        let (lo, hi) = self.domain;
        let width = hi - lo;
        if width.abs() < f64::EPSILON {
            return 0.5;
        }
        (((value - lo) / width).clamp(0.0, 1.0)) as f32
    }

    /// Look up the color for a value, clamping outside the domain.
    pub fn color_for(&self, value: f64) -> Color32 {
        let t = self.normalized(value);
        let hue = HUE_MIN + (HUE_MAX - HUE_MIN) * t;
        let hsl = Hsl::new(hue, 0.75, 0.55);
        let rgb: Srgb = hsl.into_color();
        Color32::from_rgb(
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }

    /// Legend endpoint labels (min, max) for the UI.
    pub fn legend_labels(&self) -> (String, String) {
        let (lo, hi) = self.domain;
        (format!("{lo:.2}"), format!("{hi:.2}"))
    }
}

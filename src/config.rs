//! Render configuration.
//!
//! The renderer never reads display state on its own: callers describe the
//! target surface with a [`RenderConfig`], usually derived from the device's
//! [`DeviceMetrics`].

use serde::{Deserialize, Serialize};

/// Width used when the caller does not specify one (or passes 0 through FFI).
pub const DEFAULT_FIELD_WIDTH: f64 = 360.0;

/// Horizontal inset of content from the screen edges, both sides combined.
const SCREEN_INSET: f64 = 30.0;
/// Gap between the two columns of components on a tablet.
const PAD_COLUMN_GAP: f64 = 5.0;

/// Per-call rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Full field width in user units. Height follows from the aspect ratio.
    pub width: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { width: DEFAULT_FIELD_WIDTH }
    }
}

impl RenderConfig {
    /// Configuration for an explicit width. Negative or non-finite widths
    /// collapse to 0.
    pub fn with_width(width: f64) -> Self {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        Self { width }
    }

    /// Configuration from an optional FFI-style width where anything
    /// non-positive means "use the default".
    pub fn from_option(width: Option<f64>) -> Self {
        match width {
            Some(w) if w > 0.0 && w.is_finite() => Self { width: w },
            _ => Self::default(),
        }
    }

    /// Largest width whose field (of the given aspect ratio) fits inside
    /// `max_width × max_height`.
    pub fn fit(aspect_ratio: f64, max_width: f64, max_height: f64) -> Self {
        let max_width = max_width.max(0.0);
        // A degenerate aspect ratio cannot constrain the width.
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Self::with_width(max_width);
        }
        let width_for_height = max_height.max(0.0) / aspect_ratio;
        Self::with_width(max_width.min(width_for_height))
    }

    pub fn height(&self, aspect_ratio: f64) -> f64 {
        self.width * aspect_ratio
    }
}

/// Screen measurements of the host device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceMetrics {
    pub screen_width: f64,
    pub screen_height: f64,
    /// Tablets lay components out in two columns.
    pub is_pad: bool,
}

impl DeviceMetrics {
    pub fn new(screen_width: f64, screen_height: f64, is_pad: bool) -> Self {
        Self { screen_width, screen_height, is_pad }
    }

    /// Usable width once the screen insets are removed.
    pub fn effective_width(&self) -> f64 {
        (self.screen_width - SCREEN_INSET).max(0.0)
    }

    /// Width of one component: a full effective width on phones, one of two
    /// columns on tablets.
    pub fn component_width(&self) -> f64 {
        if self.is_pad {
            ((self.screen_width - SCREEN_INSET) / 2.0 - PAD_COLUMN_GAP).max(0.0)
        } else {
            self.effective_width()
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::with_width(self.component_width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_option_falls_back_to_default() {
        assert_eq!(RenderConfig::from_option(None).width, DEFAULT_FIELD_WIDTH);
        assert_eq!(RenderConfig::from_option(Some(0.0)).width, DEFAULT_FIELD_WIDTH);
        assert_eq!(RenderConfig::from_option(Some(-3.0)).width, DEFAULT_FIELD_WIDTH);
        assert_eq!(RenderConfig::from_option(Some(300.0)).width, 300.0);
    }

    #[test]
    fn with_width_clamps_negative() {
        assert_eq!(RenderConfig::with_width(-10.0).width, 0.0);
        assert_eq!(RenderConfig::with_width(f64::NAN).width, 0.0);
    }

    #[test]
    fn fit_respects_both_bounds() {
        // Height-bound: 400 * 1.7 = 680 > 340, so width = 340 / 1.7 = 200.
        let cfg = RenderConfig::fit(1.7, 400.0, 340.0);
        assert!((cfg.width - 200.0).abs() < 1e-9);
        // Width-bound.
        let cfg = RenderConfig::fit(0.5, 300.0, 1000.0);
        assert_eq!(cfg.width, 300.0);
    }

    #[test]
    fn fit_guards_zero_aspect_ratio() {
        let cfg = RenderConfig::fit(0.0, 320.0, 100.0);
        assert_eq!(cfg.width, 320.0);
    }

    #[test]
    fn phone_and_pad_component_widths() {
        let phone = DeviceMetrics::new(390.0, 844.0, false);
        assert_eq!(phone.component_width(), 360.0);
        let pad = DeviceMetrics::new(820.0, 1180.0, true);
        assert_eq!(pad.component_width(), 390.0);
        assert_eq!(pad.render_config().width, 390.0);
    }
}

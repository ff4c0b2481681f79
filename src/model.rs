//! Data model for a parametric sports field.
//!
//! A field is described by dimensionless ratios (relative to the quarter
//! field's width or height) plus a color palette. These structures are what
//! the app stores and shares as JSON, so the serde names follow the payloads
//! the app has always written, typos included.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

// ═══════════════════════════════════════════════════════════════════════
// Shared enums and colors
// ═══════════════════════════════════════════════════════════════════════

/// Whether the field shows one half of the playing surface or all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(rename = "half")]
    Half,
    #[serde(rename = "full")]
    Full,
}

/// Thickness class of the main field lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineSize {
    #[serde(rename = "1x")]
    Small,
    #[serde(rename = "2x")]
    Medium,
    #[serde(rename = "3x")]
    Large,
}

impl LineSize {
    /// Stroke width in user units.
    pub fn width(self) -> f64 {
        match self {
            LineSize::Small => 1.5,
            LineSize::Medium => 2.5,
            LineSize::Large => 4.0,
        }
    }
}

/// The sport a field model describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Basketball,
    Football,
}

/// Red/green/blue/alpha color. All four channels use the 0–255 scale;
/// an alpha of 255 is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbaColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    #[serde(default = "opaque_alpha")]
    pub alpha: f64,
}

fn opaque_alpha() -> f64 {
    255.0
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl RgbaColor {
    /// An opaque color.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue, alpha: opaque_alpha() }
    }

    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Channels normalized to 0–1. Every channel, alpha included, is
    /// divided by 255.
    pub fn normalized(&self) -> [f64; 4] {
        [
            self.red / 255.0,
            self.green / 255.0,
            self.blue / 255.0,
            self.alpha / 255.0,
        ]
    }

    /// `#rrggbb` form of the color channels, clamped to the byte range.
    pub fn to_hex(&self) -> String {
        let byte = |c: f64| -> u8 { (c.clamp(0.0, 1.0) * 255.0).round() as u8 };
        let [r, g, b, _] = self.normalized();
        format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
    }

    /// Opacity in 0–1.
    pub fn opacity(&self) -> f64 {
        self.normalized()[3].clamp(0.0, 1.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Basketball
// ═══════════════════════════════════════════════════════════════════════

/// Marking ratios for a basketball court.
///
/// X ratios are relative to the quarter field width, Y ratios to the quarter
/// field height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketballTemplate {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub main_lines_size: LineSize,
    /// Full height divided by full width.
    pub aspect_ratio: f64,
    /// Scale of the interior fill rectangle within each quarter.
    pub field_interior_ratio: f64,
    /// Where the three-point line leaves the baseline.
    pub three_point_line_starting_x_ratio: f64,
    /// Depth of the three-point arc's vertex.
    #[serde(rename = "threePointLineVerticalYRation")]
    pub three_point_line_vertical_y_ratio: f64,
    /// Depth where the straight corner segment turns into the arc.
    pub three_point_line_bottom_corner_y_ratio: f64,
    /// X of the arc's control point.
    pub three_point_line_curve_control_x_ratio: f64,
    /// Depth of the throw-in mark on the sideline.
    pub passing_line_y_ratio: f64,
    #[serde(rename = "interiorLineStartingXRation")]
    pub interior_line_starting_x_ratio: f64,
    pub interior_line_vertical_y_ratio: f64,
    /// Where the backboard starts.
    #[serde(rename = "reboundXRation")]
    pub rebound_x_ratio: f64,
    /// Depth of the backboard.
    #[serde(rename = "reboundYRation")]
    pub rebound_y_ratio: f64,
    #[serde(rename = "threeSecondZoneLineStartingXRation")]
    pub three_second_zone_line_starting_x_ratio: f64,
    #[serde(rename = "threeSecondZoneLineVerticalYRation")]
    pub three_second_zone_line_vertical_y_ratio: f64,
}

/// Color palette for a basketball court.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketballColors {
    pub main_lines_color: RgbaColor,
    pub interior_fill_color: RgbaColor,
    #[serde(rename = "threePointLineInteriontFillColor")]
    pub three_point_line_interior_fill_color: RgbaColor,
    /// Fill of the key.
    pub interior_line_fill_color: RgbaColor,
}

/// A basketball court: template plus colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketballField {
    pub template: BasketballTemplate,
    pub colors: BasketballColors,
}

// ═══════════════════════════════════════════════════════════════════════
// Football
// ═══════════════════════════════════════════════════════════════════════

/// Marking ratios for a football pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootballTemplate {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub main_lines_size: LineSize,
    pub aspect_ratio: f64,
    pub field_interior_ratio: f64,
    /// Goal area (the small box).
    pub penalty_area_starting_x_ratio: f64,
    pub penalty_area_vertical_y_ratio: f64,
    /// Penalty area (the big box).
    pub big_penalty_area_starting_x_ratio: f64,
    pub big_penalty_area_vertical_y_ratio: f64,
    /// Where the penalty arc meets the big box.
    #[serde(rename = "arcXRation")]
    pub arc_x_ratio: f64,
    /// Depth the penalty arc should reach at its apex.
    #[serde(rename = "arcControlPointYRation")]
    pub arc_control_point_y_ratio: f64,
    #[serde(rename = "goalpostStartingXRation")]
    pub goalpost_starting_x_ratio: f64,
    #[serde(rename = "goalpostVerticalYRation")]
    pub goalpost_vertical_y_ratio: f64,
    #[serde(rename = "penaltyPointY")]
    pub penalty_point_y_ratio: f64,
}

/// Color palette for a football pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootballColors {
    pub main_lines_color: RgbaColor,
    pub turf_color: RgbaColor,
}

/// A football pitch: template plus colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootballField {
    pub template: FootballTemplate,
    pub colors: FootballColors,
}

// ═══════════════════════════════════════════════════════════════════════
// Sport-agnostic model
// ═══════════════════════════════════════════════════════════════════════

/// Any field model. Stored payloads carry no sport tag; the two sports have
/// disjoint required keys, so [`FieldModel::from_slice`] picks the sport from
/// the keys present and decodes that shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldModel {
    Basketball(BasketballField),
    Football(FootballField),
}

impl From<BasketballField> for FieldModel {
    fn from(field: BasketballField) -> Self {
        FieldModel::Basketball(field)
    }
}

impl From<FootballField> for FieldModel {
    fn from(field: FootballField) -> Self {
        FieldModel::Football(field)
    }
}

impl FieldModel {
    /// Decode a stored payload of either sport.
    ///
    /// Errors carry the message of the sport the payload resembles (a
    /// missing key or a wrong type), not a generic mismatch.
    pub fn from_slice(data: &[u8]) -> Result<Self, FieldError> {
        let value: serde_json::Value = serde_json::from_slice(data).map_err(FieldError::Decode)?;
        let model = match detect_sport(&value) {
            Sport::Basketball => {
                serde_json::from_value::<BasketballField>(value).map(FieldModel::from)
            }
            Sport::Football => serde_json::from_value::<FootballField>(value).map(FieldModel::from),
        }
        .map_err(FieldError::Decode)?;
        warn_out_of_range(&model.ratios());
        Ok(model)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, FieldError> {
        serde_json::to_vec(self).map_err(FieldError::Encode)
    }

    pub fn sport(&self) -> Sport {
        match self {
            FieldModel::Basketball(_) => Sport::Basketball,
            FieldModel::Football(_) => Sport::Football,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldModel::Basketball(f) => f.template.kind,
            FieldModel::Football(f) => f.template.kind,
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        match self {
            FieldModel::Basketball(f) => f.template.aspect_ratio,
            FieldModel::Football(f) => f.template.aspect_ratio,
        }
    }

    pub fn line_size(&self) -> LineSize {
        match self {
            FieldModel::Basketball(f) => f.template.main_lines_size,
            FieldModel::Football(f) => f.template.main_lines_size,
        }
    }

    /// Named ratios of the template, in declaration order.
    pub fn ratios(&self) -> Vec<(&'static str, f64)> {
        match self {
            FieldModel::Basketball(f) => f.template.ratios(),
            FieldModel::Football(f) => f.template.ratios(),
        }
    }

    /// Strict check: every ratio in [0, 1] and a positive, finite aspect
    /// ratio. Decoding and rendering never call this.
    pub fn validate(&self) -> Result<(), FieldError> {
        check_aspect_ratio(self.aspect_ratio())?;
        for (name, value) in self.ratios() {
            if !(0.0..=1.0).contains(&value) {
                return Err(FieldError::RatioOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

/// Football unless the payload carries basketball markings; a payload with
/// neither sport's keys decodes as basketball and reports its missing keys.
fn detect_sport(value: &serde_json::Value) -> Sport {
    let has = |pointer: &str| value.pointer(pointer).is_some();
    if has("/template/threePointLineStartingXRatio") {
        Sport::Basketball
    } else if has("/template/penaltyAreaStartingXRatio") || has("/colors/turfColor") {
        Sport::Football
    } else {
        Sport::Basketball
    }
}

fn warn_out_of_range(ratios: &[(&'static str, f64)]) {
    for &(name, value) in ratios {
        if !(0.0..=1.0).contains(&value) {
            log::warn!("{name} = {value} is outside [0, 1]; markings may leave the field");
        }
    }
}

fn check_aspect_ratio(value: f64) -> Result<(), FieldError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FieldError::RatioOutOfRange { name: "aspectRatio", value })
    }
}

impl BasketballTemplate {
    pub fn ratios(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("fieldInteriorRatio", self.field_interior_ratio),
            ("threePointLineStartingXRatio", self.three_point_line_starting_x_ratio),
            ("threePointLineVerticalYRatio", self.three_point_line_vertical_y_ratio),
            ("threePointLineBottomCornerYRatio", self.three_point_line_bottom_corner_y_ratio),
            ("threePointLineCurveControlXRatio", self.three_point_line_curve_control_x_ratio),
            ("passingLineYRatio", self.passing_line_y_ratio),
            ("interiorLineStartingXRatio", self.interior_line_starting_x_ratio),
            ("interiorLineVerticalYRatio", self.interior_line_vertical_y_ratio),
            ("reboundXRatio", self.rebound_x_ratio),
            ("reboundYRatio", self.rebound_y_ratio),
            ("threeSecondZoneLineStartingXRatio", self.three_second_zone_line_starting_x_ratio),
            ("threeSecondZoneLineVerticalYRatio", self.three_second_zone_line_vertical_y_ratio),
        ]
    }
}

impl FootballTemplate {
    pub fn ratios(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("fieldInteriorRatio", self.field_interior_ratio),
            ("penaltyAreaStartingXRatio", self.penalty_area_starting_x_ratio),
            ("penaltyAreaVerticalYRatio", self.penalty_area_vertical_y_ratio),
            ("bigPenaltyAreaStartingXRatio", self.big_penalty_area_starting_x_ratio),
            ("bigPenaltyAreaVerticalYRatio", self.big_penalty_area_vertical_y_ratio),
            ("arcXRatio", self.arc_x_ratio),
            ("arcControlPointYRatio", self.arc_control_point_y_ratio),
            ("goalpostStartingXRatio", self.goalpost_starting_x_ratio),
            ("goalpostVerticalYRatio", self.goalpost_vertical_y_ratio),
            ("penaltyPointYRatio", self.penalty_point_y_ratio),
        ]
    }
}

impl BasketballField {
    pub fn from_slice(data: &[u8]) -> Result<Self, FieldError> {
        let field: BasketballField = serde_json::from_slice(data).map_err(FieldError::Decode)?;
        warn_out_of_range(&field.template.ratios());
        Ok(field)
    }
}

impl FootballField {
    pub fn from_slice(data: &[u8]) -> Result<Self, FieldError> {
        let field: FootballField = serde_json::from_slice(data).map_err(FieldError::Decode)?;
        warn_out_of_range(&field.template.ratios());
        Ok(field)
    }
}

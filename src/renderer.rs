//! Field renderer — converts a field model into drawable output.
//!
//! One quarter of the field is built from the derived geometry, reflected
//! into the remaining quadrants, and topped with the centre markings and
//! border. The result is a [`FieldDrawing`] (styled vector paths) that can
//! be serialized to a self-contained SVG string.

mod compose;
mod constants;
pub mod derived;
pub mod path;
pub mod shapes;
mod svg_builder;

use serde::Serialize;

use crate::config::RenderConfig;
use crate::model::*;
use compose::{border, center_shapes, mirror_quarter, CenterMarks};
use derived::{BasketballGeometry, FieldFrame, FootballGeometry};
use path::Path;
use shapes::{basketball_quarter, football_quarter, QuarterShapes};
use svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Drawable output
// ═══════════════════════════════════════════════════════════════════════

/// How a path is painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Style {
    Stroke { color: RgbaColor, width: f64 },
    Fill { color: RgbaColor },
}

/// A path with its paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub path: Path,
    pub style: Style,
}

impl Shape {
    pub fn new(path: Path, style: Style) -> Self {
        Self { path, style }
    }

    pub fn mirrored_x(&self, axis: f64) -> Self {
        Self::new(self.path.mirrored_x(axis), self.style)
    }

    pub fn mirrored_y(&self, axis: f64) -> Self {
        Self::new(self.path.mirrored_y(axis), self.style)
    }
}

/// A fully composed field, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDrawing {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<Shape>,
}

impl FieldDrawing {
    pub fn to_svg(&self) -> String {
        let mut svg = SvgBuilder::new(self.width, self.height);
        for shape in &self.shapes {
            svg.shape(shape);
        }
        svg.build()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render any field model.
pub fn render_field(model: &FieldModel, config: &RenderConfig) -> FieldDrawing {
    match model {
        FieldModel::Basketball(field) => render_basketball(field, config),
        FieldModel::Football(field) => render_football(field, config),
    }
}

/// Render a field model straight to SVG.
pub fn render_field_to_svg(model: &FieldModel, config: &RenderConfig) -> String {
    render_field(model, config).to_svg()
}

pub fn render_basketball(field: &BasketballField, config: &RenderConfig) -> FieldDrawing {
    let g = BasketballGeometry::compute(&field.template, config.width);
    let quarter = basketball_quarter(&g, &field.colors);
    let stroke = Style::Stroke {
        color: field.colors.main_lines_color,
        width: g.frame.line_width,
    };
    let marks = CenterMarks {
        circle_radius: g.center_circle_radius,
        spot_radius: None,
        stroke,
        spot_fill: Style::Fill { color: field.colors.main_lines_color },
    };
    log::debug!(
        "rendering {:?} basketball field at {}x{}",
        field.template.kind, g.frame.full_width, g.frame.full_height
    );
    assemble(&quarter, &g.frame, field.template.kind, &marks)
}

pub fn render_football(field: &FootballField, config: &RenderConfig) -> FieldDrawing {
    let g = FootballGeometry::compute(&field.template, config.width);
    let quarter = football_quarter(&g, &field.colors);
    let stroke = Style::Stroke {
        color: field.colors.main_lines_color,
        width: g.frame.line_width,
    };
    let marks = CenterMarks {
        circle_radius: g.center_circle_radius,
        spot_radius: Some(g.spot_radius),
        stroke,
        spot_fill: Style::Fill { color: field.colors.main_lines_color },
    };
    log::debug!(
        "rendering {:?} football field at {}x{}",
        field.template.kind, g.frame.full_width, g.frame.full_height
    );
    assemble(&quarter, &g.frame, field.template.kind, &marks)
}

/// Underlays of every quadrant, then their line work, then the centre
/// markings and border.
fn assemble(
    quarter: &QuarterShapes,
    frame: &FieldFrame,
    kind: FieldKind,
    marks: &CenterMarks,
) -> FieldDrawing {
    let all = mirror_quarter(quarter, frame, kind);

    let mut shapes = all.underlay;
    shapes.extend(all.overlay);
    shapes.extend(center_shapes(frame, kind, marks));
    shapes.push(border(frame, marks.stroke));

    FieldDrawing {
        width: frame.full_width,
        height: frame.full_height,
        shapes,
    }
}

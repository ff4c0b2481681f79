//! Field composition — quarter → half → full by reflection, plus the centre
//! markings and outer border that belong to the whole field.

use crate::geometry::Point;
use crate::model::FieldKind;

use super::constants::*;
use super::derived::FieldFrame;
use super::path;
use super::shapes::QuarterShapes;
use super::{Shape, Style};

/// Centre markings a sport adds on top of the reflected quarters.
pub(super) struct CenterMarks {
    pub(super) circle_radius: f64,
    /// Filled centre spot radius, if the sport has one.
    pub(super) spot_radius: Option<f64>,
    pub(super) stroke: Style,
    pub(super) spot_fill: Style,
}

/// Reflect the quarter across the centre of the width, then, for a full
/// field, reflect the resulting half across the middle of the height.
pub(super) fn mirror_quarter(
    quarter: &QuarterShapes,
    frame: &FieldFrame,
    kind: FieldKind,
) -> QuarterShapes {
    let mut half = quarter.clone();
    half.append(quarter.mirrored_x(frame.quarter_width));

    match kind {
        FieldKind::Half => half,
        FieldKind::Full => {
            let mut full = half.clone();
            full.append(half.mirrored_y(frame.quarter_height));
            full
        }
    }
}

/// Centre line, centre circle (or its half on the bottom edge of a half
/// field) and centre spot.
pub(super) fn center_shapes(
    frame: &FieldFrame,
    kind: FieldKind,
    marks: &CenterMarks,
) -> Vec<Shape> {
    let w = frame.full_width;
    let h = frame.full_height;
    let mut shapes = Vec::new();

    match kind {
        FieldKind::Half => {
            let center = Point::new(w / 2.0, h);
            shapes.push(Shape::new(
                path::arc(center, marks.circle_radius, ANGLE_LEFT, FULL_TURN, true),
                marks.stroke,
            ));
            if let Some(r) = marks.spot_radius {
                // Upper half only; the lower half would fall off the field.
                shapes.push(Shape::new(
                    path::arc(center, r, ANGLE_LEFT, FULL_TURN, true).close(),
                    marks.spot_fill,
                ));
            }
        }
        FieldKind::Full => {
            let center = Point::new(w / 2.0, h / 2.0);
            shapes.push(Shape::new(
                path::line(Point::new(0.0, h / 2.0), Point::new(w, h / 2.0)),
                marks.stroke,
            ));
            shapes.push(Shape::new(path::circle(center, marks.circle_radius), marks.stroke));
            if let Some(r) = marks.spot_radius {
                shapes.push(Shape::new(path::circle(center, r), marks.spot_fill));
            }
        }
    }

    shapes
}

pub(super) fn border(frame: &FieldFrame, stroke: Style) -> Shape {
    Shape::new(
        path::rectangle(Point::new(0.0, 0.0), frame.full_width, frame.full_height),
        stroke,
    )
}

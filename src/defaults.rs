//! Built-in field models the app ships with.

use crate::error::FieldError;
use crate::model::*;

fn basketball_template(kind: FieldKind, aspect_ratio: f64) -> BasketballTemplate {
    BasketballTemplate {
        kind,
        main_lines_size: LineSize::Medium,
        aspect_ratio,
        field_interior_ratio: 1.0,
        three_point_line_starting_x_ratio: 0.12,
        three_point_line_vertical_y_ratio: 0.66,
        three_point_line_bottom_corner_y_ratio: 0.3,
        three_point_line_curve_control_x_ratio: 0.35,
        passing_line_y_ratio: 0.66,
        interior_line_starting_x_ratio: 0.6,
        interior_line_vertical_y_ratio: 0.39,
        rebound_x_ratio: 0.83,
        rebound_y_ratio: 0.0833,
        three_second_zone_line_starting_x_ratio: 0.8,
        three_second_zone_line_vertical_y_ratio: 0.19,
    }
}

fn basketball_colors() -> BasketballColors {
    BasketballColors {
        main_lines_color: RgbaColor::rgb(255.0, 255.0, 255.0),
        interior_fill_color: RgbaColor::rgb(255.0, 0.0, 0.0),
        three_point_line_interior_fill_color: RgbaColor::rgb(0.0, 255.0, 0.0),
        interior_line_fill_color: RgbaColor::rgb(0.0, 0.0, 255.0),
    }
}

fn football_template(kind: FieldKind, aspect_ratio: f64) -> FootballTemplate {
    FootballTemplate {
        kind,
        main_lines_size: LineSize::Medium,
        aspect_ratio,
        field_interior_ratio: 1.0,
        penalty_area_starting_x_ratio: 0.68,
        penalty_area_vertical_y_ratio: 0.12,
        big_penalty_area_starting_x_ratio: 0.34,
        big_penalty_area_vertical_y_ratio: 0.296,
        arc_x_ratio: 0.75,
        arc_control_point_y_ratio: 0.385,
        goalpost_starting_x_ratio: 0.85,
        goalpost_vertical_y_ratio: 0.03,
        penalty_point_y_ratio: 0.207,
    }
}

fn football_colors() -> FootballColors {
    FootballColors {
        main_lines_color: RgbaColor::rgb(0.0, 0.0, 0.0),
        turf_color: RgbaColor::rgb(127.0, 204.0, 76.0),
    }
}

/// Half basketball court, aspect ratio 0.95.
pub fn half_basketball() -> BasketballField {
    BasketballField {
        template: basketball_template(FieldKind::Half, 0.95),
        colors: basketball_colors(),
    }
}

/// Full basketball court, aspect ratio 1.7.
pub fn full_basketball() -> BasketballField {
    BasketballField {
        template: basketball_template(FieldKind::Full, 1.7),
        colors: basketball_colors(),
    }
}

/// Half football pitch, aspect ratio 0.85.
pub fn half_football() -> FootballField {
    FootballField {
        template: football_template(FieldKind::Half, 0.85),
        colors: football_colors(),
    }
}

/// Full football pitch, aspect ratio 1.5.
pub fn full_football() -> FootballField {
    FootballField {
        template: football_template(FieldKind::Full, 1.5),
        colors: football_colors(),
    }
}

pub fn all() -> Vec<FieldModel> {
    vec![
        half_basketball().into(),
        full_basketball().into(),
        half_football().into(),
        full_football().into(),
    ]
}

/// Look up a default by name, e.g. `"half-basketball"` or `"full-football"`.
pub fn by_name(name: &str) -> Result<FieldModel, FieldError> {
    match name {
        "half-basketball" => Ok(half_basketball().into()),
        "full-basketball" => Ok(full_basketball().into()),
        "half-football" => Ok(half_football().into()),
        "full-football" => Ok(full_football().into()),
        _ => Err(FieldError::UnknownDefault(name.to_string())),
    }
}

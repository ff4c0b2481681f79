//! Fixed proportions of the derived markings. These are not template
//! parameters: every field uses them.

// ── Basketball ──────────────────────────────────────────────────────
/// Free-throw circle radius as a share of the key's distance to the centre line.
pub(super) const FREE_THROW_RADIUS_FACTOR: f64 = 0.7;
/// Rim radius as a share of the backboard's length within the quarter.
pub(super) const BASKET_RADIUS_FACTOR: f64 = 0.35;
/// Throw-in mark length as a share of the three-point line's baseline offset.
pub(super) const PASSING_LINE_LENGTH_FACTOR: f64 = 0.5;

// ── Football ────────────────────────────────────────────────────────
/// Corner arc radius as a share of the goal's distance to the centre line.
pub(super) const CORNER_ARC_RADIUS_FACTOR: f64 = 0.5;
/// Penalty and centre spot radius as a share of the quarter width.
pub(super) const SPOT_RADIUS_FACTOR: f64 = 0.02;

// ── Arc angles (degrees, clockwise from 3 o'clock) ──────────────────
pub(super) const ANGLE_RIGHT: f64 = 0.0;
pub(super) const ANGLE_DOWN: f64 = 90.0;
pub(super) const ANGLE_LEFT: f64 = 180.0;
pub(super) const ANGLE_UP: f64 = 270.0;
pub(super) const FULL_TURN: f64 = 360.0;

// ── SVG output ──────────────────────────────────────────────────────
/// Below this, arcs and segments are treated as degenerate and skipped.
pub(super) const EPSILON: f64 = 1e-9;

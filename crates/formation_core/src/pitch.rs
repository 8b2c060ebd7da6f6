//! Pitch dimensions (FIFA standard, meters)
//!
//! ## Coordinate System
//! - X: 0 = left touchline, 68 = right touchline (WIDTH direction)
//! - Y: 0 = own goal line, 105 = opponent goal line (LENGTH direction)
//! - Z: height above the pitch plane

use nalgebra::Point3;

/// Position on (or above) the pitch in meters
pub type Point3D = Point3<f32>;

/// Field length in meters
pub const PITCH_LENGTH: f32 = 105.0;
/// Field width in meters
pub const PITCH_WIDTH: f32 = 68.0;

/// Field dimensions and marking sizes
pub mod field {
    use super::{PITCH_LENGTH, PITCH_WIDTH};

    /// Center X coordinate (meters, across the width)
    pub const CENTER_X: f32 = PITCH_WIDTH * 0.5;
    /// Center Y coordinate (meters, along the length)
    pub const CENTER_Y: f32 = PITCH_LENGTH * 0.5;
    /// Distance kept clear between a goal line and the nearest player line
    pub const GOAL_LINE_MARGIN_M: f32 = 5.0;
    /// Center circle radius (meters)
    pub const CENTER_CIRCLE_RADIUS_M: f32 = 9.15;
    /// Penalty area width, measured along the goal line
    pub const PENALTY_AREA_WIDTH_M: f32 = 40.3;
    /// Penalty area depth from goal line
    pub const PENALTY_AREA_DEPTH_M: f32 = 16.5;
    /// Goal area width, measured along the goal line
    pub const GOAL_AREA_WIDTH_M: f32 = 7.32;
    /// Goal area depth from goal line
    pub const GOAL_AREA_DEPTH_M: f32 = 5.5;
    /// Upper bound of the height axis when the pitch is drawn
    pub const VIEW_HEIGHT_M: f32 = 5.0;
}

/// Returns true if the point lies on the pitch plane inside the touchlines
/// and goal lines (edges included).
pub fn is_on_pitch(p: &Point3D) -> bool {
    (0.0..=PITCH_WIDTH).contains(&p.x) && (0.0..=PITCH_LENGTH).contains(&p.y) && p.z == 0.0
}

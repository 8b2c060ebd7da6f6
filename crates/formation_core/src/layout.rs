//! Player position layout
//!
//! Places the goalkeeper and every tactical line of a [`Formation`] on the
//! pitch. Lines are spread evenly between the two goal-line margins; players
//! in a line are spread evenly across the full width.

use serde::{Deserialize, Serialize};

use crate::formation::Formation;
use crate::pitch::{field, Point3D, PITCH_LENGTH, PITCH_WIDTH};

/// Goalkeeper position: centered, one margin in front of the own goal line
pub const GOALKEEPER_POSITION: (f32, f32, f32) = (field::CENTER_X, field::GOAL_LINE_MARGIN_M, 0.0);

/// Positions for one team, goalkeeper first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerLayout {
    positions: Vec<Point3D>,
    line_depths: Vec<f32>,
}

impl PlayerLayout {
    pub fn goalkeeper(&self) -> &Point3D {
        // positions always starts with the goalkeeper
        &self.positions[0]
    }

    /// Outfield players, defenders first, each line in ascending x
    pub fn field_players(&self) -> &[Point3D] {
        &self.positions[1..]
    }

    pub fn positions(&self) -> &[Point3D] {
        &self.positions
    }

    /// Depth (y) of each tactical line, in formation order
    pub fn line_depths(&self) -> &[f32] {
        &self.line_depths
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Never true: the goalkeeper is always present
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3D> {
        self.positions.iter()
    }

    pub fn into_positions(self) -> Vec<Point3D> {
        self.positions
    }
}

impl<'a> IntoIterator for &'a PlayerLayout {
    type Item = &'a Point3D;
    type IntoIter = std::slice::Iter<'a, Point3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Distance between consecutive tactical lines for `num_lines` lines
pub fn depth_step(num_lines: usize) -> f32 {
    (PITCH_LENGTH - 2.0 * field::GOAL_LINE_MARGIN_M) / (num_lines as f32 + 1.0)
}

/// X coordinates of a line with `players_in_line` players.
///
/// A lone player is centered; otherwise players are evenly spaced so that
/// nobody stands on a touchline.
pub fn line_x_positions(players_in_line: u32) -> Vec<f32> {
    if players_in_line == 1 {
        return vec![field::CENTER_X];
    }
    let spacing = PITCH_WIDTH / (players_in_line as f32 + 1.0);
    (0..players_in_line)
        .map(|j| spacing * (j as f32 + 1.0))
        .collect()
}

/// Generate positions for the goalkeeper and each tactical line.
///
/// Total over its input: an empty formation yields only the goalkeeper.
pub fn generate_positions(formation: &Formation) -> PlayerLayout {
    let num_lines = formation.num_lines();
    let step = depth_step(num_lines);

    let (gk_x, gk_y, gk_z) = GOALKEEPER_POSITION;
    let mut positions = Vec::with_capacity(1 + formation.num_lines());
    positions.push(Point3D::new(gk_x, gk_y, gk_z));

    let mut line_depths = Vec::with_capacity(num_lines);
    for (i, &players_in_line) in formation.lines().iter().enumerate() {
        let y = field::GOAL_LINE_MARGIN_M + step * (i as f32 + 1.0);
        line_depths.push(y);
        positions.extend(
            line_x_positions(players_in_line)
                .into_iter()
                .map(|x| Point3D::new(x, y, 0.0)),
        );
    }

    log::debug!(
        "Generated {} positions for formation '{}' (depth step {:.2}m)",
        positions.len(),
        formation,
        step
    );

    PlayerLayout {
        positions,
        line_depths,
    }
}

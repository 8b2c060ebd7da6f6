//! Pitch markings geometry
//!
//! Every marking is a polyline on the z = 0 plane. Closed shapes repeat their
//! first point at the end so renderers can draw consecutive segments only.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::pitch::{field, Point3D, PITCH_LENGTH, PITCH_WIDTH};

/// Default sample count for the center circle
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkingKind {
    Surface,
    Boundary,
    HalfwayLine,
    CenterCircle,
    PenaltyArea,
    GoalArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineColor {
    Green,
    White,
    Red,
}

/// Which goal a box marking belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchEnd {
    Own,
    Opponent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchMarking {
    pub kind: MarkingKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub end: Option<PitchEnd>,
    pub color: LineColor,
    pub line_width: f32,
    pub points: Vec<Point3D>,
}

impl PitchMarking {
    fn new(kind: MarkingKind, color: LineColor, line_width: f32, points: Vec<Point3D>) -> Self {
        Self {
            kind,
            end: None,
            color,
            line_width,
            points,
        }
    }

    fn at_end(mut self, end: PitchEnd) -> Self {
        self.end = Some(end);
        self
    }

    /// Consecutive point pairs
    pub fn segments(&self) -> impl Iterator<Item = (&Point3D, &Point3D)> {
        self.points.iter().zip(self.points.iter().skip(1))
    }
}

fn flat(x: f32, y: f32) -> Point3D {
    Point3D::new(x, y, 0.0)
}

fn rectangle(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<Point3D> {
    vec![flat(x0, y0), flat(x1, y0), flat(x1, y1), flat(x0, y1), flat(x0, y0)]
}

/// Box of `width` centered on the goal, reaching `depth` into the pitch
fn goal_box(width: f32, depth: f32, end: PitchEnd) -> Vec<Point3D> {
    let x0 = field::CENTER_X - width / 2.0;
    let x1 = field::CENTER_X + width / 2.0;
    match end {
        PitchEnd::Own => rectangle(x0, 0.0, x1, depth),
        PitchEnd::Opponent => rectangle(x0, PITCH_LENGTH - depth, x1, PITCH_LENGTH),
    }
}

/// `segments` points evenly spaced over [0, 2π], both ends included
pub fn center_circle(segments: usize) -> Vec<Point3D> {
    let r = field::CENTER_CIRCLE_RADIUS_M;
    let denom = segments.saturating_sub(1).max(1) as f32;
    (0..segments)
        .map(|i| {
            let theta = TAU * i as f32 / denom;
            flat(
                field::CENTER_X + r * theta.cos(),
                field::CENTER_Y + r * theta.sin(),
            )
        })
        .collect()
}

/// All markings in drawing order: surface first, goal areas last
pub fn pitch_markings(circle_segments: usize) -> Vec<PitchMarking> {
    let outline = rectangle(0.0, 0.0, PITCH_WIDTH, PITCH_LENGTH);
    let mut markings = vec![
        PitchMarking::new(MarkingKind::Surface, LineColor::Green, 4.0, outline.clone()),
        PitchMarking::new(MarkingKind::Boundary, LineColor::White, 2.0, outline),
        PitchMarking::new(
            MarkingKind::HalfwayLine,
            LineColor::White,
            2.0,
            vec![flat(0.0, field::CENTER_Y), flat(PITCH_WIDTH, field::CENTER_Y)],
        ),
        PitchMarking::new(
            MarkingKind::CenterCircle,
            LineColor::White,
            1.5,
            center_circle(circle_segments),
        ),
    ];

    for end in [PitchEnd::Own, PitchEnd::Opponent] {
        markings.push(
            PitchMarking::new(
                MarkingKind::PenaltyArea,
                LineColor::White,
                1.5,
                goal_box(field::PENALTY_AREA_WIDTH_M, field::PENALTY_AREA_DEPTH_M, end),
            )
            .at_end(end),
        );
    }
    for end in [PitchEnd::Own, PitchEnd::Opponent] {
        markings.push(
            PitchMarking::new(
                MarkingKind::GoalArea,
                LineColor::White,
                1.0,
                goal_box(field::GOAL_AREA_WIDTH_M, field::GOAL_AREA_DEPTH_M, end),
            )
            .at_end(end),
        );
    }

    markings
}

//! Renderer-neutral description of the pitch view

use serde::{Deserialize, Serialize};

use crate::layout::PlayerLayout;
use crate::markings::{pitch_markings, LineColor, PitchMarking, DEFAULT_CIRCLE_SEGMENTS};
use crate::pitch::{field, Point3D, PITCH_LENGTH, PITCH_WIDTH};

pub const SCENE_TITLE: &str = "3D Soccer Field with Formation";
pub const MARKER_SIZE: f32 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Samples used for the center circle
    pub circle_segments: usize,
    /// Height of the shirt-number label above its player
    pub label_offset: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            label_offset: 0.5,
        }
    }
}

/// Inclusive axis range in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub min: f32,
    pub max: f32,
}

impl AxisLimits {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
    pub limits: AxisLimits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMarker {
    /// 1-based, goalkeeper is 1
    pub number: usize,
    pub position: Point3D,
    pub label_position: Point3D,
    pub color: LineColor,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchScene {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub z_axis: Axis,
    pub markings: Vec<PitchMarking>,
    pub players: Vec<PlayerMarker>,
}

impl PitchScene {
    pub fn build(layout: &PlayerLayout, config: &SceneConfig) -> Self {
        let players = layout
            .iter()
            .enumerate()
            .map(|(idx, p)| PlayerMarker {
                number: idx + 1,
                position: *p,
                label_position: Point3D::new(p.x, p.y, p.z + config.label_offset),
                color: LineColor::Red,
                size: MARKER_SIZE,
            })
            .collect();

        Self {
            title: SCENE_TITLE.to_string(),
            x_axis: Axis {
                label: "Width (m)".to_string(),
                limits: AxisLimits::new(0.0, PITCH_WIDTH),
            },
            y_axis: Axis {
                label: "Length (m)".to_string(),
                limits: AxisLimits::new(0.0, PITCH_LENGTH),
            },
            z_axis: Axis {
                label: "Height (m)".to_string(),
                limits: AxisLimits::new(0.0, field::VIEW_HEIGHT_M),
            },
            markings: pitch_markings(config.circle_segments),
            players,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::Formation;
    use crate::layout::generate_positions;

    #[test]
    fn test_markers_follow_layout_order() {
        let layout = generate_positions(&Formation::from(vec![4, 4, 2]));
        let scene = PitchScene::build(&layout, &SceneConfig::default());

        assert_eq!(scene.players.len(), 11);
        assert_eq!(scene.players[0].number, 1);
        assert_eq!(scene.players[0].position, *layout.goalkeeper());
        assert_eq!(scene.players[10].number, 11);
        for (marker, p) in scene.players.iter().zip(layout.iter()) {
            assert_eq!(marker.position, *p);
            assert_eq!(marker.label_position.z, 0.5);
            assert_eq!(marker.color, LineColor::Red);
        }
    }

    #[test]
    fn test_axes() {
        let layout = generate_positions(&Formation::empty());
        let scene = PitchScene::build(&layout, &SceneConfig::default());
        assert_eq!(scene.title, SCENE_TITLE);
        assert_eq!(scene.x_axis.limits, AxisLimits::new(0.0, 68.0));
        assert_eq!(scene.y_axis.limits.span(), 105.0);
        assert_eq!(scene.z_axis.label, "Height (m)");
    }

    #[test]
    fn test_config_controls_circle_and_labels() {
        let config = SceneConfig {
            circle_segments: 12,
            label_offset: 1.0,
        };
        let layout = generate_positions(&Formation::from(vec![1]));
        let scene = PitchScene::build(&layout, &config);
        let circle = scene
            .markings
            .iter()
            .find(|m| m.kind == crate::markings::MarkingKind::CenterCircle)
            .unwrap();
        assert_eq!(circle.points.len(), 12);
        assert_eq!(scene.players[1].label_position.z, 1.0);
    }
}

//! # formation_core - Formation Layout Engine
//!
//! Turns a formation string such as `4-3-3` into player positions on a
//! 105m x 68m pitch, and describes the pitch view for renderers.
//!
//! ## Pipeline
//! - [`parse_formation`]: text → [`Formation`]
//! - [`generate_positions`]: [`Formation`] → [`PlayerLayout`]
//! - [`PitchScene::build`]: layout → markings + player markers
//! - [`render::PitchRenderer`]: scene → terminal or JSON output
//!
//! ```rust
//! use formation_core::{generate_positions, parse_formation};
//!
//! let layout = generate_positions(&parse_formation("4-3-3"));
//! assert_eq!(layout.len(), 11);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod formation;
pub mod layout;
pub mod markings;
pub mod pitch;
pub mod render;
pub mod roster;
pub mod scene;

// Re-export main API functions
pub use api::{layout_formation_json, LayoutRequest, LayoutResponse};
pub use config::{AsciiConfig, OutputFormat, ViewerConfig};
pub use error::{ConfigError, FormationError, RenderError, RenderResult};
pub use formation::{parse_formation, try_parse_formation, Formation, FormationParser};
pub use layout::{generate_positions, PlayerLayout};
pub use markings::{pitch_markings, MarkingKind, PitchMarking};
pub use pitch::{Point3D, PITCH_LENGTH, PITCH_WIDTH};
pub use roster::{reconcile_player_count, PlayerCount, DEFAULT_PLAYER_COUNT};
pub use scene::{PitchScene, PlayerMarker, SceneConfig};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

//! Scene renderers
//!
//! A renderer consumes a finished [`PitchScene`]; nothing flows back into the
//! layout. Backends write to any `io::Write` sink.

pub mod ascii;
pub mod json;

pub use ascii::AsciiRenderer;
pub use json::JsonRenderer;

use crate::error::RenderResult;
use crate::scene::PitchScene;

/// Core rendering trait that all backends implement
pub trait PitchRenderer {
    /// Draw the whole scene once
    fn render(&mut self, scene: &PitchScene) -> RenderResult<()>;

    /// Backend name for diagnostics
    fn name(&self) -> &'static str;
}

/// Render with any backend, logging which one was used
pub fn render_scene<R: PitchRenderer + ?Sized>(
    renderer: &mut R,
    scene: &PitchScene,
) -> RenderResult<()> {
    log::debug!(
        "Rendering {} markings and {} players with {} backend",
        scene.markings.len(),
        scene.players.len(),
        renderer.name()
    );
    renderer.render(scene)
}

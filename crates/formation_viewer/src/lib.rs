//! Formation Viewer
//!
//! 입력 (선수 수, 포메이션 문자열) → 배치 계산 → 피치 렌더링
//! Prompts for whatever the command line did not provide, then drives
//! `formation_core` from parsing to rendering.

pub mod prompt;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use formation_core::render::{render_scene, AsciiRenderer, JsonRenderer};
use formation_core::{
    generate_positions, reconcile_player_count, Formation, OutputFormat, PitchScene, PlayerCount,
    ViewerConfig,
};

pub const BANNER: &str = "=== 3D Soccer Field Viewer ===";

/// Values supplied on the command line; `None` means "ask"
#[derive(Debug, Clone, Default)]
pub struct ViewRequest {
    pub players: Option<i64>,
    pub formation: Option<String>,
}

impl ViewRequest {
    pub fn is_complete(&self) -> bool {
        self.players.is_some() && self.formation.is_some()
    }
}

/// Everything computed for one run
#[derive(Debug, Clone)]
pub struct ViewOutcome {
    pub formation: Formation,
    pub players: PlayerCount,
    pub scene: PitchScene,
}

/// Fill in missing request values from the interactive input
pub fn resolve_request<R: BufRead, W: Write>(
    request: ViewRequest,
    config: &ViewerConfig,
    input: &mut R,
    output: &mut W,
) -> Result<(i64, String)> {
    if !request.is_complete() {
        writeln!(output, "{}", BANNER)?;
    }

    let players = match request.players {
        Some(n) => n,
        None => prompt::read_player_count(input, output, config.default_players)?,
    };
    let formation = match request.formation {
        Some(text) => text,
        None => prompt::read_formation(input, output)?,
    };
    Ok((players, formation))
}

/// Parse, reconcile the squad size, lay out and assemble the scene
pub fn build_view(
    requested_players: i64,
    formation_text: &str,
    config: &ViewerConfig,
) -> ViewOutcome {
    let formation = config.parser().parse(formation_text);
    let players = reconcile_player_count(requested_players, &formation);
    let layout = generate_positions(&formation);
    let scene = PitchScene::build(&layout, &config.scene);

    log::info!(
        "Formation '{}' laid out with {} players",
        formation,
        players.effective
    );

    ViewOutcome {
        formation,
        players,
        scene,
    }
}

/// Draw the scene with the backend selected by `format`
pub fn render_to<W: Write>(
    scene: &PitchScene,
    format: OutputFormat,
    config: &ViewerConfig,
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Ascii => render_scene(&mut AsciiRenderer::new(writer, config.ascii), scene),
        OutputFormat::Json => render_scene(&mut JsonRenderer::new(writer), scene),
    }
    .context("Failed to render pitch")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_resolve_uses_given_values_without_prompting() {
        let request = ViewRequest {
            players: Some(11),
            formation: Some("4-4-2".to_string()),
        };
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let (players, formation) =
            resolve_request(request, &ViewerConfig::default(), &mut input, &mut output).unwrap();
        assert_eq!(players, 11);
        assert_eq!(formation, "4-4-2");
        assert!(output.is_empty());
    }

    #[test]
    fn test_resolve_prompts_for_missing_values() {
        let mut input = Cursor::new(b"\n3-5-2\n".to_vec());
        let mut output = Vec::new();
        let (players, formation) = resolve_request(
            ViewRequest::default(),
            &ViewerConfig::default(),
            &mut input,
            &mut output,
        )
        .unwrap();
        assert_eq!(players, 11);
        assert_eq!(formation, "3-5-2");

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with(BANNER));
        assert!(shown.contains("Enter number of players (default 11): "));
        assert!(shown.contains("Enter formation (e.g., 4-3-3): "));
    }

    #[test]
    fn test_build_view_overrides_player_count() {
        let outcome = build_view(10, "4-3-3", &ViewerConfig::default());
        assert_eq!(outcome.formation.lines(), &[4, 3, 3]);
        assert_eq!(outcome.players.effective, 11);
        assert!(outcome.players.adjusted);
        assert_eq!(outcome.scene.players.len(), 11);
    }

    #[test]
    fn test_negative_count_from_prompt_is_overridden() {
        let mut input = Cursor::new(b"-3\n4-3-3\n".to_vec());
        let mut output = Vec::new();
        let (players, text) = resolve_request(
            ViewRequest::default(),
            &ViewerConfig::default(),
            &mut input,
            &mut output,
        )
        .unwrap();
        assert_eq!(players, -3);

        let outcome = build_view(players, &text, &ViewerConfig::default());
        assert_eq!(outcome.players.requested, -3);
        assert_eq!(outcome.players.effective, 11);
        assert!(outcome.players.adjusted);
    }

    #[test]
    fn test_build_view_invalid_formation() {
        let outcome = build_view(11, "four-four-two", &ViewerConfig::default());
        assert!(outcome.formation.is_empty());
        assert_eq!(outcome.scene.players.len(), 1);
        assert_eq!(outcome.players.effective, 1);
    }

    #[test]
    fn test_render_to_both_formats() {
        let config = ViewerConfig::default();
        let outcome = build_view(11, "4-4-2", &config);

        let mut ascii = Vec::new();
        render_to(&outcome.scene, OutputFormat::Ascii, &config, &mut ascii).unwrap();
        let ascii = String::from_utf8(ascii).unwrap();
        assert!(ascii.starts_with("3D Soccer Field with Formation"));

        let mut json = Vec::new();
        render_to(&outcome.scene, OutputFormat::Json, &config, &mut json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["players"].as_array().unwrap().len(), 11);
    }

    #[test]
    fn test_render_to_file_with_config_delimiter() {
        let mut config = ViewerConfig::compact();
        config.delimiter = '/';
        let outcome = build_view(11, "4/2/3/1", &config);
        assert_eq!(outcome.formation.lines(), &[4, 2, 3, 1]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pitch.txt");
        let file = std::fs::File::create(&path).unwrap();
        render_to(&outcome.scene, OutputFormat::Ascii, &config, file).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        // title + grid + axis legend + one line per player
        assert_eq!(text.lines().count(), 1 + config.ascii.rows + 1 + 11);
    }
}

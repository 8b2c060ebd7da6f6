//! Formation Viewer CLI
//!
//! 포메이션 문자열 → 피치 위 선수 배치 (터미널 / JSON 출력)

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use formation_core::{OutputFormat, ViewerConfig};
use formation_viewer::{build_view, render_to, resolve_request, ViewRequest};

#[derive(Parser)]
#[command(name = "formation_viewer")]
#[command(about = "Lay out a soccer formation on a 105m x 68m pitch", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of players including the goalkeeper (prompted if omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    players: Option<i64>,

    /// Formation such as 4-3-3 (prompted if omitted)
    #[arg(short, long)]
    formation: Option<String>,

    /// YAML or JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Write the rendering to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Ascii,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Ascii => OutputFormat::Ascii,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output);

    let request = ViewRequest {
        players: cli.players,
        formation: cli.formation,
    };
    let stdin = io::stdin();
    let (players, formation_text) =
        resolve_request(request, &config, &mut stdin.lock(), &mut io::stdout())?;

    let outcome = build_view(players, &formation_text, &config);

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            render_to(&outcome.scene, format, &config, BufWriter::new(file))?;
            log::info!("Pitch written to {}", path.display());
        }
        None => render_to(&outcome.scene, format, &config, io::stdout().lock())?,
    }

    Ok(())
}

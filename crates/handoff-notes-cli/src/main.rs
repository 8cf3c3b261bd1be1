mod viewer;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use handoff_notes_config::Config;
use handoff_notes_engine::{
    RenderedNotes, io,
    render::{html::to_html, text::to_plain_text},
    render_notes,
};
use log::{LevelFilter, debug, info};
use std::io::{IsTerminal, stdin};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "handoff-notes")]
#[command(version)]
#[command(about = "Render shift-handoff notes to HTML, JSON, text, or a terminal view", long_about = None)]
struct Cli {
    /// Notes file to render (`-` reads stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Config file (defaults to ~/.config/handoff-notes/config.toml)
    #[arg(long, value_name = "PATH", env = "HANDOFF_NOTES_CONFIG")]
    config: Option<PathBuf>,

    /// Write a default config file (to --config or the default location) and exit
    #[arg(long)]
    init_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
    Text,
    /// Interactive, scrollable terminal view
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.init_config {
        return init_config(cli.config.as_deref());
    }

    let config = load_config(cli.config.as_deref())?;
    let notes = read_input(cli.input.as_deref(), &config)?;
    let rendered = render_notes(Some(&notes), &config.theme);
    info!("rendered {} elements", rendered.elements.len());

    match cli.format {
        Format::Html => print!("{}", to_html(&rendered, &config.theme)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&rendered)?),
        Format::Text => print!("{}", to_plain_text(&rendered)),
        Format::Tui => show(&rendered)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, wins over the -v flags
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Writes `Config::default()` unless a config file already exists.
fn init_config(path: Option<&Path>) -> Result<()> {
    let target = path.map_or_else(Config::config_path, Path::to_path_buf);
    if target.exists() {
        bail!("Config file already exists at {}", target.display());
    }
    match path {
        Some(path) => Config::default().save_to_path(path)?,
        None => Config::default().save()?,
    }
    println!("Wrote default config to {}", target.display());
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    match loaded {
        Some(config) => Ok(config),
        None => {
            debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Resolves the notes body: explicit file, `-` or piped stdin, then the
/// config's `notes_path`.
fn read_input(input: Option<&Path>, config: &Config) -> Result<String> {
    match input {
        Some(path) if path == Path::new("-") => Ok(io::read_notes_from(stdin().lock())?),
        Some(path) => {
            io::read_notes(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None if !stdin().is_terminal() => Ok(io::read_notes_from(stdin().lock())?),
        None => match &config.notes_path {
            Some(path) => io::read_notes(path).with_context(|| {
                format!("Failed to read notes_path '{}' from config", path.display())
            }),
            None => bail!(
                "No notes file given and no notes_path in {}",
                Config::config_path().display()
            ),
        },
    }
}

fn show(rendered: &RenderedNotes) -> Result<()> {
    let text = viewer::to_text(rendered);
    viewer::run(&rendered.label, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_config_writes_loadable_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("handoff").join("config.toml");

        init_config(Some(config_file.as_path())).unwrap();
        let loaded = load_config(Some(config_file.as_path())).unwrap();

        assert!(loaded.notes_path.is_none());
        assert_eq!(loaded.theme, handoff_notes_engine::Theme::default());
    }

    #[test]
    fn init_config_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[theme]\nlabel = \"Mine\"\n").unwrap();

        assert!(init_config(Some(config_file.as_path())).is_err());
        assert_eq!(load_config(Some(config_file.as_path())).unwrap().theme.label, "Mine");
    }

    #[test]
    fn explicit_config_path_that_is_missing_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(Some(temp_dir.path().join("none.toml").as_path())).unwrap();

        assert_eq!(config.theme.label, "Handoff Notes");
    }
}

//! Terminal menu player.
//!
//! Loads a menu file and plays it on stdin/stdout:
//!
//! ```text
//! menu-cli demos/example.ron --start start --width 60
//! ```
mod terminal;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use menu_content::MenuFileLoader;
use menu_core::{DispatchOutcome, MenuConfig, MenuSource, MergeType, SessionRegistry};
use terminal::TerminalCaller;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Play a menu file in the terminal
#[derive(Parser)]
#[command(name = "menu-cli")]
#[command(about = "Play a tree menu in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Menu file to load (.ron or .toml)
    #[arg(value_name = "MENU_FILE")]
    menu_file: PathBuf,

    /// Node to start at (overrides MENU_START_NODE)
    #[arg(short, long, value_name = "NODE")]
    start: Option<String>,

    /// Disable the built-in quit command
    #[arg(long)]
    no_quit: bool,

    /// Width budget for the option table (overrides CLIENT_DEFAULT_WIDTH)
    #[arg(short, long, value_name = "COLUMNS")]
    width: Option<usize>,

    /// How the menu commands combine with other commands (Replace, Union)
    #[arg(long, value_name = "TYPE")]
    mergetype: Option<MergeType>,

    /// Priority of the menu command set
    #[arg(long, value_name = "N")]
    priority: Option<i32>,

    /// Directory for log files (defaults to platform-specific location)
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> MenuConfig {
        let mut config = MenuConfig::from_env();
        if let Some(start) = &self.start {
            config = config.with_start_node(start.clone());
        }
        if self.no_quit {
            config = config.with_allow_quit(false);
        }
        if let Some(width) = self.width {
            config = config.with_text_width(width);
        }
        let merge_type = self.mergetype.unwrap_or(config.cmdset_merge_type);
        let priority = self.priority.unwrap_or(config.cmdset_priority);
        config.with_cmdset(merge_type, priority)
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = setup_logging(cli.log_dir.clone())?;

    let config = cli.config();
    let menu = MenuFileLoader::load_menu(&cli.menu_file)?;

    let mut registry = SessionRegistry::new();
    let mut caller = TerminalCaller::new("player", io::stdout());
    registry
        .start(&mut caller, MenuSource::module(menu), &config)
        .with_context(|| format!("Failed to start menu {}", cli.menu_file.display()))?;

    play(io::stdin().lock(), &mut caller, &mut registry)
}

/// Feeds input lines to the caller until its menu closes or input ends.
fn play<R, W>(
    input: R,
    caller: &mut TerminalCaller<W>,
    registry: &mut SessionRegistry<TerminalCaller<W>>,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match caller.execute(registry, &line) {
            Some(Ok(DispatchOutcome::Close)) => break,
            Some(Ok(DispatchOutcome::Continue)) | None => {}
            // Already reported to the player; the menu stays where it was.
            Some(Err(err)) => tracing::warn!(target: "menu::cli", error = %err, "Menu input failed"),
        }
    }

    if registry.close(caller) {
        tracing::info!(target: "menu::cli", "Input ended with menu still open");
    }
    Ok(())
}

/// Setup logging to a file, or to stderr when no log directory is usable
fn setup_logging(log_dir: Option<PathBuf>) -> Result<Option<WorkerGuard>> {
    let log_dir = log_dir
        .or_else(|| std::env::var_os("MENU_LOG_DIR").map(PathBuf::from))
        .unwrap_or_else(default_log_dir);

    // Create env filter
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    if let Err(err) = std::fs::create_dir_all(&log_dir) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
        tracing::warn!("Log directory {} unavailable: {}", log_dir.display(), err);
        return Ok(None);
    }

    let file_appender = tracing_appender::rolling::never(&log_dir, "menu.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}", log_dir.join("menu.log").display());
    Ok(Some(guard))
}

/// Get the platform-specific log directory
///
/// - macOS: `~/Library/Caches/menu/logs`
/// - Linux: `~/.cache/menu/logs` (or `$XDG_CACHE_HOME/menu/logs`)
/// - Windows: `%LOCALAPPDATA%\menu\logs`
/// - Fallback: `/tmp/menu/logs`
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "menu")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| Path::new("/tmp/menu").to_path_buf())
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::{Caller, NodeModule, NodeResult, OptionSpec};

    #[test]
    fn cli_flags_override_config() {
        let cli = Cli::parse_from([
            "menu-cli",
            "menu.ron",
            "--start",
            "lobby",
            "--no-quit",
            "--width",
            "40",
            "--mergetype",
            "union",
        ]);
        let config = cli.config();

        assert_eq!(config.start_node, "lobby");
        assert!(!config.allow_quit);
        assert_eq!(config.text_width, 40);
        assert_eq!(config.cmdset_merge_type, MergeType::Union);
    }

    #[test]
    fn play_stops_when_menu_closes() {
        type Term = TerminalCaller<Vec<u8>>;
        let menu = NodeModule::new()
            .node("start", |_: &mut Term| {
                Ok(NodeResult::new("Ready?").option(OptionSpec::new().key("go").goto("done")))
            })
            .node("done", |_: &mut Term| Ok(NodeResult::new("Done.")));

        let mut registry = SessionRegistry::new();
        let mut caller = TerminalCaller::new("tester", Vec::new());
        registry
            .start(&mut caller, MenuSource::module(menu), &MenuConfig::default())
            .unwrap();

        play("nope\ngo\nignored\n".as_bytes(), &mut caller, &mut registry).unwrap();

        assert!(registry.is_empty());
        let text = String::from_utf8(caller.into_inner()).unwrap();
        assert!(text.contains("Choose an option or try 'help'."));
        assert!(text.contains("Done."));
        assert!(!text.contains("Huh?"));
    }

    #[test]
    fn end_of_input_closes_open_menu() {
        type Term = TerminalCaller<Vec<u8>>;
        let menu = NodeModule::new().node("start", |_: &mut Term| {
            Ok(NodeResult::new("Stay").option(OptionSpec::new().fallback().goto("start")))
        });

        let mut registry = SessionRegistry::new();
        let mut caller = TerminalCaller::new("tester", Vec::new());
        registry
            .start(&mut caller, MenuSource::module(menu), &MenuConfig::default())
            .unwrap();

        play("a\nb\n".as_bytes(), &mut caller, &mut registry).unwrap();
        assert!(!registry.is_active(&caller.id()));
    }
}

//! Hopline - a terminal line editor with hop-to-character navigation.
//!
//! # Usage
//!
//! ```bash
//! hopline
//! hopline --tab-width 2 --line-width 80
//! hopline --theme dark --save
//! ```

use anyhow::{Context, Result};
use clap::Parser;

use hopline::app::App;
use hopline::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use hopline::editor::{DEFAULT_LINE_WIDTH, DEFAULT_TAB_WIDTH};

/// A terminal line editor with hop-to-character navigation
#[derive(Parser, Debug)]
#[command(name = "hopline", version, about, long_about = None)]
struct Cli {
    /// Indentation step in cells
    #[arg(long, value_name = "CELLS")]
    tab_width: Option<usize>,

    /// Maximum line width in cells
    #[arg(long, value_name = "CELLS")]
    line_width: Option<usize>,

    /// Grid color theme (light or dark)
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Save current command-line flags as defaults in the config file
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in the config file
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let tab_width = effective.tab_width.unwrap_or(DEFAULT_TAB_WIDTH);
    let line_width = effective.line_width.unwrap_or(DEFAULT_LINE_WIDTH);
    if tab_width == 0 {
        anyhow::bail!("--tab-width must be at least 1");
    }
    if line_width < tab_width {
        anyhow::bail!("--line-width must be at least the tab width ({tab_width})");
    }

    let mut app = App::new()
        .with_tab_width(tab_width)
        .with_line_width(line_width)
        .with_theme(effective.theme.unwrap_or_default());

    app.run().context("Application error")
}

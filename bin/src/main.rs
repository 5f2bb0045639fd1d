//! wickmark CLI - Candlestick icon generator for documentation.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "wickmark")]
#[command(about = "Candlestick icon generator for documentation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Options shared by commands that render SVG.
#[derive(Args, Clone, Debug)]
pub(crate) struct RenderArgs {
    /// Write inline SVG fragments (style-sized root, no XML declaration)
    #[arg(long)]
    embedded: bool,

    /// Chart configuration file (JSON, partial documents allowed)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pattern catalog file (JSON object of name -> definition)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Only render these patterns (repeatable)
    #[arg(long)]
    only: Vec<String>,
}

/// Options shared by commands that convert to PNG.
#[derive(Args, Clone, Debug)]
pub(crate) struct ToolArgs {
    /// Inkscape-compatible rasterizer
    #[arg(long, default_value = "inkscape")]
    rasterizer: PathBuf,

    /// pngquant-compatible compressor
    #[arg(long, default_value = "pngquant")]
    compressor: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every catalog pattern to <svg-dir>/<NAME>.svg
    Generate {
        /// Output directory for SVG files
        svg_dir: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Convert a tree of SVG files into a mirrored tree of compressed PNGs
    Rasterize {
        /// Source directory of SVG files
        svg_dir: PathBuf,

        /// Output directory for PNG files
        png_dir: PathBuf,

        /// Chart configuration file (JSON); sets the export size
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        tools: ToolArgs,
    },

    /// Generate the SVG icons, then convert them to PNG
    Build {
        /// Directory for SVG files
        svg_dir: PathBuf,

        /// Directory for PNG files
        png_dir: PathBuf,

        #[command(flatten)]
        render: RenderArgs,

        #[command(flatten)]
        tools: ToolArgs,
    },

    /// List catalog patterns
    List {
        /// Pattern catalog file (JSON object of name -> definition)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    display::init_logging(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Generate { svg_dir, render } => {
            commands::generate::generate(&svg_dir, &render, cli.quiet).map(|_| ())
        }
        Commands::Rasterize {
            svg_dir,
            png_dir,
            config,
            tools,
        } => {
            let chart = display::load_config(config.as_deref(), false)?;
            commands::rasterize::rasterize(&svg_dir, &png_dir, &chart, &tools, cli.quiet)
        }
        Commands::Build {
            svg_dir,
            png_dir,
            render,
            tools,
        } => commands::build::build(&svg_dir, &png_dir, &render, &tools, cli.quiet),
        Commands::List { catalog } => commands::list::list_patterns(catalog.as_deref()),
    }
}

//! CLI entry point for fsview

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use fsview::output::to_json;
use fsview::{
    BrowseFormatter, Error, FsLister, OutputConfig, RenderConfig, Session, StatusReporter,
    TreeRenderer, print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fsview")]
#[command(about = "Browse a folder lazily and export its structure as an ASCII tree")]
#[command(version)]
struct Cli {
    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto", global = true)]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print or save the whole folder as an ASCII tree
    Export(ExportArgs),
    /// Show the folder as a lazily expanded tree
    Browse(BrowseArgs),
    /// Print the full path of an entry
    CopyPath(CopyArgs),
    /// Print the name of an entry
    CopyName(CopyArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Folder to export
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Save to FILE instead of printing
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Stop after N entries
    #[arg(long = "max-entries", value_name = "N")]
    max_entries: Option<usize>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,
}

#[derive(Args, Debug)]
struct BrowseArgs {
    /// Folder to browse
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Expand the entry at this path relative to the folder (repeatable)
    #[arg(short = 'e', long = "expand", value_name = "REL")]
    expand: Vec<PathBuf>,

    /// Load every directory before displaying
    #[arg(long = "load-all")]
    load_all: bool,

    /// Open every loaded directory
    #[arg(long = "expand-all")]
    expand_all: bool,

    /// Prefix entries with an icon
    #[arg(long = "icons")]
    icons: bool,
}

#[derive(Args, Debug)]
struct CopyArgs {
    /// Folder containing the entry
    root: PathBuf,

    /// Entry path relative to the folder
    entry: PathBuf,
}

/// Absolute form of a user-supplied folder, which must exist.
fn resolve_root(path: &Path) -> fsview::Result<PathBuf> {
    let root = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    if !root.is_dir() {
        return Err(Error::MissingFolder(path.to_path_buf()));
    }
    Ok(root)
}

fn export(args: &ExportArgs, status: &StatusReporter) -> fsview::Result<()> {
    let root = resolve_root(&args.path)?;
    let renderer = TreeRenderer::new(FsLister).with_config(RenderConfig {
        max_depth: args.level,
        max_entries: args.max_entries,
    });

    if args.json {
        let snapshot = renderer
            .snapshot(&root)
            .ok_or_else(|| Error::Unreadable(root.clone()))?;
        match &args.output {
            Some(dest) => {
                std::fs::write(dest, to_json(&snapshot)?)?;
                status.success(&format!("Saved to {}", dest.display()))?;
            }
            None => print_json(&snapshot)?,
        }
        return Ok(());
    }

    match &args.output {
        Some(dest) => {
            renderer.render_to_file(&root, dest)?;
            status.success(&format!("Saved to {}", dest.display()))?;
        }
        None => {
            let rendered = renderer
                .render_report(&root)
                .ok_or_else(|| Error::Unreadable(root.clone()))?;
            println!("{}", rendered.text);
        }
    }
    Ok(())
}

fn browse(args: &BrowseArgs, use_color: bool, status: &StatusReporter) -> fsview::Result<()> {
    let root = resolve_root(&args.path)?;
    let mut session = Session::new(FsLister);
    let root_id = session.open_folder(&root);

    for rel in &args.expand {
        let tree = session.tree_mut();
        match tree.resolve_relative(rel) {
            Some(id) => tree.expand(id),
            None => status.warning(&format!("no such entry: {}", rel.display()))?,
        }
    }
    if args.load_all {
        session.tree_mut().materialize(root_id, None);
    }
    if args.expand_all {
        session.expand_all();
    }

    let formatter = BrowseFormatter::new(OutputConfig {
        use_color,
        icons: args.icons,
    });
    formatter.print(session.tree())?;
    Ok(())
}

fn copy_name(args: &CopyArgs, status: &StatusReporter) -> fsview::Result<()> {
    let mut session = Session::new(FsLister);
    session.open_folder(&resolve_root(&args.root)?);
    session.select_path(&args.entry)?;

    let name = session.copy_name()?;
    println!("{}", name);
    status.success(&format!("Copied: {}", name))?;
    Ok(())
}

fn copy_path(args: &CopyArgs, status: &StatusReporter) -> fsview::Result<()> {
    let mut session = Session::new(FsLister);
    session.open_folder(&resolve_root(&args.root)?);
    session.select_path(&args.entry)?;

    let path = session.copy_full_path()?;
    println!("{}", path.display());
    status.success(&format!("Copied: {}", path.display()))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    fsview::logging::init(cli.verbose);

    let use_color = should_use_color(cli.color);
    let status = StatusReporter::new(use_color);

    let result = match &cli.command {
        Command::Export(args) => export(args, &status),
        Command::Browse(args) => browse(args, use_color, &status),
        Command::CopyName(args) => copy_name(args, &status),
        Command::CopyPath(args) => copy_path(args, &status),
    };

    if let Err(e) = result {
        eprintln!("fsview: {}", e);
        process::exit(1);
    }
}

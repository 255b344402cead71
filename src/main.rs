//! arbor - print or export a directory tree, skipping ignored directories.
//!
//! Usage:
//!   arbor [PATH]             Print the tree
//!   arbor export [PATH]      Export the tree to JSON
//!   arbor --help             Show help

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use arbor_core::{DirTree, NodeId};
use arbor_scan::{BuildConfig, TreeBuilder};

#[derive(Parser)]
#[command(
    name = "arbor",
    version,
    about = "Build an in-memory tree of a directory",
    long_about = "arbor walks a directory and prints its tree.\n\n\
                  Directories named in the root's .gitignore (one literal name \
                  per line) are listed but not descended into."
)]
struct Cli {
    /// Path to display (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    #[command(flatten)]
    build: BuildArgs,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Clone)]
struct BuildArgs {
    /// Additional directory name to ignore (repeatable)
    #[arg(short = 'I', long = "ignore", value_name = "NAME", global = true)]
    ignore: Vec<String>,

    /// Do not follow symbolic links; list them as files
    #[arg(long, global = true)]
    no_follow: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Export the tree to JSON
    Export {
        /// Path to export
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Command::Export { path, output }) => {
            run_export(&path, &cli.build, output).await?;
        }
        None => {
            run_print(&cli.path, &cli.build).await?;
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

/// Build the tree for a path with CLI overrides applied.
async fn build_tree(path: &Path, args: &BuildArgs) -> Result<DirTree> {
    let config = BuildConfig::builder()
        .root(path)
        .follow_symlinks(!args.no_follow)
        .extra_ignores(args.ignore.clone())
        .build()
        .context("Invalid arguments")?;

    TreeBuilder::new()
        .build_async(config)
        .await
        .with_context(|| format!("Failed to build tree for {}", path.display()))
}

/// Print the tree and a summary line.
async fn run_print(path: &Path, args: &BuildArgs) -> Result<()> {
    let tree = build_tree(path, args).await?;

    print_node(&tree, tree.root_id(), "", true);

    println!();
    println!(
        "{} directories ({} ignored), {} files",
        tree.stats.total_dirs.saturating_sub(1),
        tree.stats.ignored_dirs,
        tree.stats.total_files
    );

    Ok(())
}

/// Export the tree to JSON.
async fn run_export(path: &Path, args: &BuildArgs, output: Option<PathBuf>) -> Result<()> {
    let tree = build_tree(path, args).await?;

    let json = serde_json::to_string_pretty(&tree)?;

    match output {
        Some(output_path) => {
            std::fs::write(&output_path, json)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            eprintln!("Exported to {}", output_path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

/// Print a node and its children with box-drawing guides.
fn print_node(tree: &DirTree, id: NodeId, prefix: &str, is_last: bool) {
    let Some(node) = tree.get(id) else {
        return;
    };

    let label = if node.is_root() {
        node.path.display().to_string()
    } else if node.is_dir() {
        format!("{}/", node.name)
    } else {
        node.name.to_string()
    };
    let marker = if node.ignored { "  [ignored]" } else { "" };

    if node.is_root() {
        println!("{}{}", label, marker);
    } else {
        let branch = if is_last { "└── " } else { "├── " };
        println!("{}{}{}{}", prefix, branch, label, marker);
    }

    let child_prefix = if node.is_root() {
        String::new()
    } else if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        print_node(tree, *child, &child_prefix, i + 1 == count);
    }
}

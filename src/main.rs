//! cellnav: heading hierarchy navigation for notebook cells.
#![allow(clippy::multiple_crate_versions)]

use cellnav::{config, hierarchy, navigate, notebook, render, Order};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cellnav")]
#[command(about = "Heading hierarchy navigation for notebook cells", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(ClapArgs)]
struct Target {
    /// Notebook (.ipynb) to navigate
    #[arg(value_name = "NOTEBOOK")]
    notebook: PathBuf,

    /// Index of the anchor cell
    #[arg(long, short = 'c')]
    cell: usize,
}

#[derive(Subcommand)]
enum Command {
    /// Print the heading hierarchy
    Tree {
        /// Notebook (.ipynb) to outline
        #[arg(value_name = "NOTEBOOK")]
        notebook: PathBuf,

        /// Columns per nesting level
        #[arg(long)]
        indent: Option<usize>,
    },
    /// List cells in traversal order, starting at the anchor
    Walk {
        #[command(flatten)]
        target: Target,

        /// Traversal order
        #[arg(long, short = 'o', value_enum)]
        order: Option<Order>,

        /// Stop after this many cells
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the n-th cell of a traversal (0 is the anchor itself)
    Step {
        #[command(flatten)]
        target: Target,

        /// Traversal order
        #[arg(long, short = 'o', value_enum)]
        order: Option<Order>,

        /// Position in the traversal
        #[arg(long, short = 'n', default_value_t = 1)]
        nth: usize,
    },
    /// Print the heading cell containing the anchor
    Parent {
        #[command(flatten)]
        target: Target,
    },
    /// Print the cell range covered by the anchor's section
    Subtree {
        #[command(flatten)]
        target: Target,
    },
    /// Print the cell range covered by the anchor and its siblings
    Siblings {
        #[command(flatten)]
        target: Target,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let cfg = config::Config::load();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(args, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, cfg: &config::Config) -> cellnav::Result<()> {
    let json = args.json;
    let default_order = cfg.order().unwrap_or(Order::DepthFirst);

    match args.command {
        Command::Tree {
            notebook: path,
            indent,
        } => {
            let cells = notebook::load(&path)?;
            let tree = hierarchy::build_markdown(&cells)?;
            if json {
                emit_json(&render::outline(&tree, &cells))
            } else {
                print!(
                    "{}",
                    render::render_tree(&tree, &cells, indent.unwrap_or(cfg.indent_width))
                );
                Ok(())
            }
        }
        Command::Walk {
            target,
            order,
            limit,
        } => {
            let tree = build(&target)?;
            let visited = navigate::cells(&tree, target.cell, order.unwrap_or(default_order))?
                .take(limit.unwrap_or(usize::MAX))
                .collect::<Vec<_>>();
            if json {
                emit_json(&visited)
            } else {
                for cell in visited {
                    println!("{cell}");
                }
                Ok(())
            }
        }
        Command::Step { target, order, nth } => {
            let tree = build(&target)?;
            let found = navigate::step(&tree, target.cell, order.unwrap_or(default_order), nth)?;
            emit_cell(found, json)
        }
        Command::Parent { target } => {
            let tree = build(&target)?;
            emit_cell(navigate::parent_cell(&tree, target.cell)?, json)
        }
        Command::Subtree { target } => {
            let tree = build(&target)?;
            let range = navigate::subtree_range(&tree, target.cell)?;
            emit_range(&range, json)
        }
        Command::Siblings { target } => {
            let tree = build(&target)?;
            let range = navigate::siblings_range(&tree, target.cell)?;
            emit_range(&range, json)
        }
    }
}

fn build(target: &Target) -> cellnav::Result<cellnav::CellTree> {
    let cells = notebook::load(&target.notebook)?;
    hierarchy::build_markdown(&cells)
}

fn emit_json<T: Serialize + ?Sized>(value: &T) -> cellnav::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn emit_cell(cell: Option<usize>, json: bool) -> cellnav::Result<()> {
    if json {
        return emit_json(&cell);
    }
    if let Some(cell) = cell {
        println!("{cell}");
    }
    Ok(())
}

fn emit_range(range: &std::ops::Range<usize>, json: bool) -> cellnav::Result<()> {
    if json {
        return emit_json(range);
    }
    println!("{}..{}", range.start, range.end);
    Ok(())
}

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use treeforge::cli::{Args, Mode};
use treeforge::materialize::materialize;
use treeforge::render::{render_tree, RenderConfig};
use treeforge::tree::{
    build_ignore_set, build_ignore_set_no_defaults, parse_tree_file, walk_tree, Classifier,
    ParseOptions, WalkConfig,
};

fn main() {
    let args = Args::parse().validated();
    init_tracing(args.verbose);

    if let Err(e) = run_app(&args) {
        eprintln!("treeforge: {e:#}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise the level follows `-v`.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn run_app(args: &Args) -> Result<()> {
    match args.mode {
        Mode::Create => create_from_tree(args),
        Mode::Show => show_tree(args),
    }
}

fn create_from_tree(args: &Args) -> Result<()> {
    let Some(input) = args.input.as_deref() else {
        anyhow::bail!(
            "input file must be specified with --input\n\n{}",
            Args::command().render_usage()
        );
    };

    let classifier = Classifier::default().with_file_names(&args.file_names);
    let options = ParseOptions {
        strict: args.strict,
    };
    let tree = parse_tree_file(input, &classifier, options)
        .context("failed to parse tree structure")?;
    if tree.is_empty() {
        tracing::warn!(input = %input.display(), "tree file contains no entries");
    }

    let mut progress: Box<dyn Write> = if args.quiet {
        Box::new(io::sink())
    } else {
        Box::new(io::stdout().lock())
    };
    writeln!(
        progress,
        "Creating project structure in: {}",
        args.output.display()
    )
    .context("failed to write progress output")?;
    let summary = materialize(&args.output, &tree, &mut progress)
        .context("failed to create project structure")?;
    writeln!(
        progress,
        "Project structure created successfully! ({} directories, {} files)",
        summary.directories, summary.files
    )
    .context("failed to write progress output")?;
    Ok(())
}

fn show_tree(args: &Args) -> Result<()> {
    let config = WalkConfig {
        ignore_patterns: if args.no_default_ignores {
            build_ignore_set_no_defaults(&args.ignore)
        } else {
            build_ignore_set(&args.ignore)
        },
        sort: args.sort,
    };
    let tree = walk_tree(&args.path, &config).context("failed to build tree")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_tree(&mut out, &tree, &RenderConfig { style: args.style })
        .context("failed to write tree")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_log_level(0), "warn");
        assert_eq!(default_log_level(1), "info");
        assert_eq!(default_log_level(2), "debug");
        assert_eq!(default_log_level(9), "trace");
    }
}

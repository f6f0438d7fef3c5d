use crate::render::BranchStyle;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  treeforge --mode create --input layout.txt --output ./my-project
  treeforge -m 0 -i layout.txt
  treeforge --mode show --path ./my-project > layout.txt
  treeforge -m 1 -p . -I target --sort

Long flags take two dashes (--mode, --input); single-dash spellings such as
-mode are read as -m with the value \"ode\" and rejected.";

/// What the invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Create directories and empty files from a tree diagram
    #[value(name = "create", alias = "0")]
    Create,
    /// Print an existing directory as a tree diagram
    #[value(name = "show", alias = "1")]
    Show,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "treeforge",
    version,
    about = "Scaffold directories from tree diagrams, or print a directory as one",
    after_help = EXAMPLES
)]
pub struct Args {
    /// create (0): diagram to filesystem; show (1): filesystem to diagram
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = Mode::Create)]
    pub mode: Mode,

    /// Tree diagram file (required in create mode)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory under which create mode builds the structure
    #[arg(short = 'o', long = "output", value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Directory that show mode walks
    #[arg(short = 'p', long = "path", value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Reject indented first entries and multi-level indentation jumps
    #[arg(long = "strict")]
    pub strict: bool,

    /// Extension-less name to treat as a file (repeatable; LICENSE is built in)
    #[arg(long = "file-name", value_name = "NAME", action = clap::ArgAction::Append)]
    pub file_names: Vec<String>,

    /// Glob patterns to exclude in show mode (repeatable)
    #[arg(short = 'I', long = "ignore", value_name = "GLOB", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Do not ignore .git and .gitignore by default
    #[arg(long = "no-default-ignores")]
    pub no_default_ignores: bool,

    /// Sort show output: directories first, then case-insensitive alpha
    #[arg(long = "sort")]
    pub sort: bool,

    /// Branch drawing style for show mode
    #[arg(long = "style", value_enum, default_value_t = BranchStyle::Uniform)]
    pub style: BranchStyle,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress lines
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }
}

//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// hop - machine environment descriptor
///
/// Find projects, bundles, systems and accounts declared for this machine,
/// and audit the declaration against the filesystem.
#[derive(Parser, Debug)]
#[command(
    name = "hop",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Machine environment descriptor for tools and AI agents",
    long_about = "hop reads the machine descriptor (hop.json) to answer where projects live, \
                  which projects form a system or bundle, and which accounts exist, and audits \
                  the descriptor against what is actually on disk.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  hop where\n    \
                  hop project api\n    \
                  hop system payments --format json\n    \
                  hop bundle checkout\n    \
                  hop audit --scan"
)]
pub struct Cli {
    /// Use this descriptor instead of searching for one
    #[arg(long, short = 'c', global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for query commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the path of the descriptor in use
    Where,

    /// Show machine identity and a summary of the descriptor
    Show,

    /// List projects
    Projects(ProjectsArgs),

    /// Show one project
    Project(NameArgs),

    /// List systems derived from project and infra-repo tags
    Systems,

    /// Show the projects and infra repos of one system
    System(NameArgs),

    /// List bundles
    Bundles,

    /// Show one bundle with its resolved projects
    Bundle(NameArgs),

    /// Show the infra-repo block
    Infra,

    /// List accounts
    Accounts,

    /// Show one account (username or service:username)
    Account(NameArgs),

    /// Compare the descriptor with the filesystem
    Audit(AuditArgs),

    /// Check required fields and cross-references
    Validate,

    /// Print the descriptor in canonical form
    Normalize,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the projects command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  All projects:\n    hop projects\n\n\
                  Projects in a system:\n    hop projects --system payments\n\n\
                  Projects of a type:\n    hop projects --type service")]
pub struct ProjectsArgs {
    /// Only projects tagged with this system
    #[arg(long)]
    pub system: Option<String>,

    /// Only projects of this type
    #[arg(long = "type", value_name = "TYPE")]
    pub project_type: Option<String>,
}

/// A single name argument
#[derive(Parser, Debug)]
pub struct NameArgs {
    pub name: String,
}

/// Arguments for the audit command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check managed directories and project paths:\n    hop audit\n\n\
                  Also look for unregistered repositories under $HOME:\n    hop audit --scan\n\n\
                  Exit status is 1 when orphans or stale projects are found.")]
pub struct AuditArgs {
    /// Scan the home directory (two levels) for unregistered repositories
    #[arg(long, short = 's')]
    pub scan: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    hop completions --shell bash > ~/.bash_completion.d/hop\n\n\
                  Generate zsh completions:\n    hop completions --shell zsh > ~/.zfunc/_hop")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

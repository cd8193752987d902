use clap::{ArgGroup, Parser, ValueEnum};
use clap_complete::Shell;
use mdsection::input::ContentSource;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdsection")]
#[command(version)]
#[command(about = "Replace or extend heading-delimited sections of a markdown file")]
#[command(
    long_about = "mdsection - Edit a markdown file one section at a time.\n\n\
    A section is a heading plus everything up to the next heading of the same or\n\
    higher level. Nested subsections belong to their parent. Titles match\n\
    case-insensitively, and a heading containing the title also matches; the first\n\
    match in the document wins unless --exact is given.\n\n\
    Examples:\n  \
    mdsection -l notes.md                                   # List sections\n  \
    mdsection notes.md -s \"Thinking Level\" --content new.md  # Replace a section body\n  \
    mdsection notes.md -a Usage --content-inline \"More\"     # Append after a section\n  \
    cat body.md | mdsection notes.md -s Usage --content-stdin --dry-run"
)]
#[command(args_conflicts_with_subcommands = true)]
#[command(group(
    ArgGroup::new("content_source")
        .args(["content", "content_stdin", "content_inline"])
        .multiple(false)
))]
pub struct Cli {
    /// Markdown file to edit
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// List all section headings and exit
    ///
    /// Each heading is indented by its level and shown with its # markers.
    #[arg(short = 'l', long = "list-sections", conflicts_with_all = ["section", "append_after"])]
    pub list_sections: bool,

    /// Output format for --list-sections
    #[arg(short = 'o', long = "output", default_value = "plain")]
    pub output: OutputFormat,

    /// Replace the body of the section with this title
    ///
    /// The heading line is kept; everything up to the next heading of the
    /// same or higher level is replaced.
    #[arg(short = 's', long = "section", value_name = "TITLE", conflicts_with = "append_after")]
    pub section: Option<String>,

    /// Insert content after the section with this title
    ///
    /// The section, including nested subsections, is left unchanged.
    #[arg(short = 'a', long = "append-after", value_name = "TITLE")]
    pub append_after: Option<String>,

    /// Read new content from a file
    #[arg(long = "content", value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub content: Option<PathBuf>,

    /// Read new content from stdin
    #[arg(long = "content-stdin")]
    pub content_stdin: bool,

    /// New content given inline
    #[arg(long = "content-inline", value_name = "TEXT")]
    pub content_inline: Option<String>,

    /// Print the result instead of writing the file
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Prefer a heading whose title matches exactly over earlier partial matches
    #[arg(long = "exact")]
    pub exact: bool,

    /// Use this config file instead of the default location
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The content source selected on the command line, if any.
    pub fn content_source(&self) -> Option<ContentSource> {
        if let Some(ref path) = self.content {
            Some(ContentSource::File(path.clone()))
        } else if self.content_stdin {
            Some(ContentSource::Stdin)
        } else {
            self.content_inline.clone().map(ContentSource::Inline)
        }
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print a shell completion script
    ///
    /// Example: mdsection completions zsh > ~/.zfunc/_mdsection
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Indented heading list
    Plain,
    /// JSON document with line, level and title per heading
    Json,
}

//! # mdsection
//!
//! Replace or extend heading-delimited sections of a markdown file.
//!
//! ## Usage
//!
//! List sections:
//! ```sh
//! mdsection -l notes.md
//! ```
//!
//! Replace a section body:
//! ```sh
//! mdsection notes.md --section "Thinking Level" --content body.md
//! ```
//!
//! Append after a section:
//! ```sh
//! mdsection notes.md --append-after Usage --content-inline "More text"
//! ```

mod cli;

use clap::{CommandFactory, Parser as ClapParser};
use cli::{Cli, Command, OutputFormat};
use color_eyre::Result;
use mdsection::{Config, MatchMode, Operation, input, logging, outline, section, writer};
use std::path::Path;
use std::process;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    if let Some(Command::Completions { shell }) = &args.command {
        clap_complete::generate(*shell, &mut Cli::command(), "mdsection", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::resolve(args.config.as_deref())?;
    logging::init(&config.logging, args.verbose);

    let Some(file) = args.file.as_deref() else {
        eprintln!("ERROR: a markdown file argument is required");
        eprintln!("\nUsage: mdsection [OPTIONS] <FILE>");
        process::exit(1);
    };

    let text = input::read_text(file).unwrap_or_else(|e| fail(e));

    if args.list_sections {
        print_outline(&text, &args.output)?;
        return Ok(());
    }

    handle_edit(&args, &config, file, &text)
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", err);
    process::exit(1);
}

fn print_outline(text: &str, format: &OutputFormat) -> Result<()> {
    let headings = mdsection::extract_outline(text);
    match format {
        OutputFormat::Plain => {
            for line in outline::list_outline(&headings) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            println!("{}", outline::outline_json(&headings)?);
        }
    }
    Ok(())
}

fn handle_edit(args: &Cli, config: &Config, file: &Path, text: &str) -> Result<()> {
    let (title, operation, flag) = match (&args.section, &args.append_after) {
        (Some(title), _) => (title, Operation::Replace, "--section"),
        (None, Some(title)) => (title, Operation::Append, "--append-after"),
        (None, None) => {
            Cli::command().print_help()?;
            process::exit(1);
        }
    };

    let Some(source) = args.content_source() else {
        fail(format!(
            "{} requires content (--content, --content-stdin, or --content-inline)",
            flag
        ));
    };
    let content = source.read_content().unwrap_or_else(|e| fail(e));

    let mode = if args.exact {
        MatchMode::PreferExact
    } else {
        config.matching.mode
    };

    let outcome = section::edit(text, title, operation, &content, mode).unwrap_or_else(|e| fail(e));
    tracing::info!(
        %operation,
        heading = %outcome.heading.title,
        start = outcome.range.start_line,
        end = outcome.range.end_line,
        "section updated"
    );

    if args.dry_run {
        println!("{}", outcome.text);
    } else {
        writer::write_document(file, &outcome.text, config.write.atomic)?;
        println!("Updated: {}", file.display());
    }

    Ok(())
}

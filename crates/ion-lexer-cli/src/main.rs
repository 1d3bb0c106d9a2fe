#![allow(clippy::print_stderr, clippy::print_stdout)]

mod lex;
mod logging;
mod print;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use strum::VariantNames;
use tracing::{info, warn};
use walkdir::WalkDir;

use ion_lexer::buffer::{self_test, SELF_TEST_LEN};
use ion_lexer::{LexerOptions, OverflowPolicy};

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use lex::{lex_and_print, LexPrintConfig, LexStats};

#[derive(Parser)]
#[command(name = "Ion Lexer")]
#[command(version, author, about, long_about = None)]
/// Runs the buffer self-test, then optionally lexes Ion sources
struct Cli {
    /// A file or folder path to lex, or `-` to read stdin until EOF.
    /// If a folder is provided, reads all files with the `--ext` extension.
    /// Without it only the self-test runs.
    file_or_dir: Option<PathBuf>,

    /// Print the tokens to the console. Ignored if a folder is provided.
    #[arg(short, long)]
    print: bool,

    /// Print tokens with spans and codes. Implies `--print`.
    #[arg(long)]
    pretty: bool,

    /// Print only errors and totals only if errors were found.
    #[arg(short, long)]
    err_only: bool,

    /// What an integer literal evaluates to when it doesn't fit into 64 bits.
    #[arg(
        long,
        env = "ION_OVERFLOW",
        default_value_t = OverflowPolicy::Saturate,
        value_parser = overflow_parser()
    )]
    overflow: OverflowPolicy,

    /// File extension to pick when walking a folder.
    #[arg(long, default_value = "ion")]
    ext: String,

    /// Skip the buffer self-test.
    #[arg(long)]
    skip_self_test: bool,

    /// Raise log verbosity. Repeat for more. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn overflow_parser() -> impl TypedValueParser<Value = OverflowPolicy> {
    PossibleValuesParser::new(OverflowPolicy::VARIANTS.iter().copied())
        .try_map(|s| s.parse::<OverflowPolicy>())
}

/// Where the sources to lex come from.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Stdin,
    Dir(&'a Path),
    File(&'a Path),
}

impl Cli {
    fn input(&self) -> Option<Input<'_>> {
        let path = self.file_or_dir.as_deref()?;

        Some(if path == Path::new("-") {
            Input::Stdin
        } else if path.is_dir() {
            Input::Dir(path)
        } else {
            Input::File(path)
        })
    }
}

fn run_self_test() -> bool {
    match self_test(SELF_TEST_LEN) {
        Ok(()) => {
            info!(len = SELF_TEST_LEN, "buffer self-test passed");
            true
        }
        Err(err) => {
            eprintln!("Buffer self-test failed: {err}");
            false
        }
    }
}

fn lex_file(
    dst: &mut impl Write,
    path: &Path,
    options: LexerOptions,
    config: &LexPrintConfig,
) -> io::Result<Option<LexStats>> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let file_name = path.display().to_string();
            lex_and_print(dst, &contents, options, config, Some(&file_name))
        }
        Err(err) => {
            warn!(%err, path = %path.display(), "failed to read file");
            eprintln!("Failed to read file: {}", path.display());
            Ok(None)
        }
    }
}

fn lex_dir(
    dst: &mut impl Write,
    dir: &Path,
    ext: &str,
    options: LexerOptions,
    config: &LexPrintConfig,
) -> io::Result<()> {
    let mut files = 0usize;
    let mut totals = LexStats::default();

    for entry in WalkDir::new(dir).into_iter().filter_map(Result::ok) {
        let entry_path = entry.path();

        if entry_path.extension().and_then(|e| e.to_str()) != Some(ext) {
            continue;
        }

        if let Some(stats) = lex_file(dst, entry_path, options, config)? {
            files += 1;
            totals.tokens += stats.tokens;
            totals.errors += stats.errors;
            totals.duration += stats.duration;
        }
    }

    info!(
        files,
        tokens = totals.tokens,
        errors = totals.errors,
        duration = ?totals.duration,
        "folder lexed"
    );

    Ok(())
}

fn run(cli: &Cli, input: Input<'_>) -> io::Result<()> {
    let options = LexerOptions::default().with_overflow(cli.overflow);

    let stdout = io::stdout();
    let mut dst = stdout.lock();

    match input {
        Input::Dir(path) => {
            // Token dumps of whole folders are never useful
            let config = LexPrintConfig {
                print_file_name: true,
                print_tokens: false,
                pretty: false,
                print_errors: true,
                err_only: cli.err_only,
            };

            lex_dir(&mut dst, path, &cli.ext, options, &config)
        }
        Input::File(path) => {
            let config = LexPrintConfig {
                print_file_name: true,
                print_tokens: cli.print || cli.pretty,
                pretty: cli.pretty,
                print_errors: true,
                err_only: cli.err_only,
            };

            lex_file(&mut dst, path, options, &config).map(|_| ())
        }
        Input::Stdin => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;

            let config = LexPrintConfig {
                print_file_name: false,
                print_tokens: cli.print || cli.pretty,
                pretty: cli.pretty,
                print_errors: true,
                err_only: cli.err_only,
            };

            lex_and_print(&mut dst, &source, options, &config, None).map(|_| ())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(cli.debug);

    if !cli.skip_self_test && !run_self_test() {
        return ExitCode::FAILURE;
    }

    let Some(input) = cli.input() else {
        return ExitCode::SUCCESS;
    };

    match run(&cli, input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

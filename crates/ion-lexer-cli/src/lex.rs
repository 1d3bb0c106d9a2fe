use ion_lexer::{lex_with_options, LexerOptions};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, error};

use crate::print::{print_errors, print_tokens};

pub(super) struct LexPrintConfig {
    pub(super) print_file_name: bool,
    pub(super) print_tokens: bool,
    pub(super) pretty: bool,
    pub(super) print_errors: bool,
    /// Print totals only when errors were found
    pub(super) err_only: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct LexStats {
    pub(super) tokens: usize,
    pub(super) errors: usize,
    pub(super) duration: Duration,
}

/// Lexes `source` and prints what `print_config` asks for into `dst`.
///
/// Returns `None` if the source couldn't be lexed at all.
pub(super) fn lex_and_print(
    dst: &mut impl Write,
    source: &str,
    options: LexerOptions,
    print_config: &LexPrintConfig,
    file_name: Option<&str>,
) -> io::Result<Option<LexStats>> {
    let source_str = if let Some(file_name) = file_name {
        format!("file: {file_name}")
    } else {
        "from stdin".to_string()
    };

    if print_config.print_file_name {
        writeln!(dst, "Lexing {source_str}")?;
    }

    let start = Instant::now();

    let result = match lex_with_options(source, options) {
        Ok(result) => result,
        Err(err) => {
            error!(%err, source = %source_str, "lexing failed");
            writeln!(dst, "Error: {err}")?;
            return Ok(None);
        }
    };

    let stats = LexStats {
        tokens: result.tokens.len(),
        errors: result.errors.len(),
        duration: start.elapsed(),
    };

    debug!(?stats, source = %source_str, "lexed");

    if print_config.print_tokens && !print_config.err_only {
        writeln!(dst, "Tokens:")?;
        print_tokens(dst, &result.tokens, print_config.pretty)?;
    }

    if print_config.print_errors && !result.errors.is_empty() {
        writeln!(dst, "Errors:")?;
        print_errors(dst, &result.errors)?;
    }

    if !print_config.err_only || stats.errors > 0 {
        writeln!(dst, "Done! Found {} tokens.", stats.tokens)?;

        if stats.errors > 0 {
            writeln!(dst, "Errors: {}", stats.errors)?;
        }
    }

    Ok(Some(stats))
}

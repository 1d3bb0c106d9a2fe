#![allow(dead_code)]

use ion_lexer::{print::to_pretty_string, print::token_to_string, Token};

/// Renders tokens one per line, the way the CLI prints them.
pub(crate) fn render_tokens(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(token_to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders tokens one per line with spans and codes.
pub(crate) fn render_tokens_pretty(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(to_pretty_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Checks that tokens cover all offsets of `source` from 0 to the end
/// and that exactly the last token is the end of stream.
pub(crate) fn check_full_coverage(source: &str, tokens: &[Token<'_>]) {
    let mut end = 0;

    for token in tokens {
        // Check that the token starts where the previous token ended
        assert_eq!(
            token.span().start().get(),
            end,
            "Token <{}> does not start where the previous token ended",
            to_pretty_string(token)
        );

        end = token.span().end().get();
    }

    let Some((eof, rest)) = tokens.split_last() else {
        panic!("No tokens at all, expected at least EOF");
    };

    assert!(eof.is_eof(), "Last token is not EOF");
    assert!(!rest.iter().any(Token::is_eof), "EOF before the end");
    assert_eq!(end as usize, source.len(), "Tokens don't cover the source");

    // Gluing the token texts back gives the source
    let glued: String = rest
        .iter()
        .map(|t| t.span().text(source).unwrap())
        .collect();
    assert_eq!(glued, source);
}

/// Functions to print tokens and diagnostics
use super::token::{Payload, Token};
use crate::error::ErrorInfo;

/// Human readable form of a token: integers in decimal, names as their
/// exact source text, punctuation as the literal character.
#[must_use]
pub fn token_to_string(token: &Token<'_>) -> String {
    match token.payload() {
        Payload::Integer(value) => format!("TOKEN VALUE: {value}"),
        Payload::Name(text) => format!("TOKEN NAME: {text}"),
        Payload::None if token.is_eof() => "TOKEN <EOF>".to_string(),
        Payload::None => format!("TOKEN {}", token.kind()),
    }
}

/// Debug form of a token with its span, kind and payload.
#[must_use]
pub fn to_pretty_string(token: &Token<'_>) -> String {
    let span = token.span();
    let kind = token.kind();
    let code = kind.code();

    let payload_str = match token.payload() {
        Payload::Integer(value) => value.to_string(),
        Payload::Name(text) => format!("{text:?}"),
        Payload::None => "<None>".to_string(),
    };

    format!("[{span},<{kind}>,code={code},pl={payload_str}]")
}

#[must_use]
pub fn error_to_string(error: &ErrorInfo) -> String {
    format!(
        "{} at byte {} (token #{})",
        error.error_kind(),
        error.at_byte_offset(),
        error.on_token()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::lex;
    use crate::text::ByteOffset;
    use rstest::rstest;

    #[test]
    fn test_token_to_string_reference_stream() {
        let result = lex("+()_HELLO1,234+FOO!994").unwrap();

        let rendered: Vec<String> = result.tokens.iter().map(token_to_string).collect();

        assert_eq!(
            rendered,
            vec![
                "TOKEN '+'",
                "TOKEN '('",
                "TOKEN ')'",
                "TOKEN NAME: _HELLO1",
                "TOKEN ','",
                "TOKEN VALUE: 234",
                "TOKEN '+'",
                "TOKEN NAME: FOO",
                "TOKEN '!'",
                "TOKEN VALUE: 994",
                "TOKEN <EOF>",
            ]
        );
    }

    #[rstest]
    #[case::int("42", "[0:2,<INT>,code=1114112,pl=42]")]
    #[case::name("ab", "[0:2,<NAME>,code=1114113,pl=\"ab\"]")]
    #[case::punct(";", "[0:1,<';'>,code=59,pl=<None>]")]
    #[case::eof("", "[0:0,<EOF>,code=0,pl=<None>]")]
    fn test_to_pretty_string(#[case] source: &str, #[case] expected: &str) {
        let result = lex(source).unwrap();
        let first = result.tokens.first().unwrap();

        assert_eq!(to_pretty_string(first), expected);
    }

    #[test]
    fn test_error_to_string() {
        let error = ErrorInfo::new(ErrorKind::IntegerLiteralOverflow, ByteOffset::new(7), 3);

        assert_eq!(
            error_to_string(&error),
            "Integer literal does not fit into 64 bits at byte 7 (token #3)"
        );
    }
}

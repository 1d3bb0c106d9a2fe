use crate::{
    error::{ErrorInfo, ErrorKind},
    lex_with_options,
    print::to_pretty_string,
    LexerOptions, Payload, Token, TokenKind,
};

pub(crate) trait TokenTestCase {
    fn kind(&self) -> TokenKind;
    fn text(&self) -> String;
    fn payload<'a>(&self, text: &'a str) -> Payload<'a>;
}

/// Single character token
impl TokenTestCase for char {
    fn kind(&self) -> TokenKind {
        TokenKind::Punct(*self)
    }

    fn text(&self) -> String {
        self.to_string()
    }

    fn payload<'a>(&self, _text: &'a str) -> Payload<'a> {
        Payload::None
    }
}

/// Integer literal with its source text and value
impl TokenTestCase for (&str, u64) {
    fn kind(&self) -> TokenKind {
        TokenKind::Int
    }

    fn text(&self) -> String {
        self.0.to_owned()
    }

    fn payload<'a>(&self, _text: &'a str) -> Payload<'a> {
        Payload::Integer(self.1)
    }
}

/// Integer literal written exactly as its value
impl TokenTestCase for u64 {
    fn kind(&self) -> TokenKind {
        TokenKind::Int
    }

    fn text(&self) -> String {
        self.to_string()
    }

    fn payload<'a>(&self, _text: &'a str) -> Payload<'a> {
        Payload::Integer(*self)
    }
}

/// Name
impl TokenTestCase for &str {
    fn kind(&self) -> TokenKind {
        TokenKind::Name
    }

    fn text(&self) -> String {
        (*self).to_owned()
    }

    fn payload<'a>(&self, text: &'a str) -> Payload<'a> {
        Payload::Name(text)
    }
}

pub(crate) trait ErrorTestCase {
    fn error_kind(&self) -> ErrorKind;
    fn at_byte_offset(&self) -> Option<u32>;
}

impl ErrorTestCase for ErrorKind {
    fn error_kind(&self) -> ErrorKind {
        *self
    }

    fn at_byte_offset(&self) -> Option<u32> {
        None
    }
}

impl ErrorTestCase for (ErrorKind, u32) {
    fn error_kind(&self) -> ErrorKind {
        self.0
    }

    fn at_byte_offset(&self) -> Option<u32> {
        Some(self.1)
    }
}

fn format_tokens_for_trace(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| format!("- {}", to_pretty_string(token)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn assert_lexing_with_options(
    source: &str,
    options: LexerOptions,
    expected_tokens: Vec<impl TokenTestCase>,
    expected_errors: Vec<impl ErrorTestCase>,
) {
    let result = lex_with_options(source, options).unwrap();
    let tokens = result.tokens.as_slice();

    // Check total token count
    assert_eq!(
        expected_tokens.len() + 1,
        tokens.len(),
        "Expected {} tokens including EOF, got {}:\n{}",
        expected_tokens.len() + 1,
        tokens.len(),
        format_tokens_for_trace(tokens)
    );

    // Nothing is skipped, so each token starts where the previous one ended
    let mut cur_start = 0u32;

    for (expected_tok, lexed_token) in expected_tokens.iter().zip(tokens) {
        let expected_text = expected_tok.text();
        let lexed_text = lexed_token.span().text(source).unwrap();

        assert_eq!(
            lexed_token.span().start().get(),
            cur_start,
            "Expected token start {cur_start}, got {}",
            to_pretty_string(lexed_token)
        );

        assert_eq!(
            lexed_text,
            expected_text,
            "Expected text {expected_text:?}, got {}",
            to_pretty_string(lexed_token)
        );

        assert_eq!(
            lexed_token.kind(),
            expected_tok.kind(),
            "Expected kind {}, got {}",
            expected_tok.kind(),
            to_pretty_string(lexed_token)
        );

        assert_eq!(
            lexed_token.payload(),
            expected_tok.payload(lexed_text),
            "Expected payload {:?}, got {}",
            expected_tok.payload(lexed_text),
            to_pretty_string(lexed_token)
        );

        cur_start = lexed_token.span().end().get();
    }

    let eof = tokens.last().unwrap();
    assert!(eof.is_eof(), "Expected EOF, got {}", to_pretty_string(eof));
    assert_eq!(
        eof.span().start().get(),
        cur_start,
        "Expected EOF at {cur_start}, got {}",
        to_pretty_string(eof)
    );

    // And the only EOF is the last one
    assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);

    // Check errors
    let errors: Vec<ErrorInfo> = result.errors.into_iter().collect();

    assert_eq!(
        expected_errors.len(),
        errors.len(),
        "Expected {} errors, got {:?}",
        expected_errors.len(),
        errors
    );

    for (expected_err, error) in expected_errors.iter().zip(&errors) {
        assert_eq!(error.error_kind(), expected_err.error_kind());

        if let Some(offset) = expected_err.at_byte_offset() {
            assert_eq!(
                error.at_byte_offset().get(),
                offset,
                "Expected error at {offset}, got {error:?}"
            );
        }
    }
}

pub(crate) fn assert_lexing(
    source: &str,
    expected_tokens: Vec<impl TokenTestCase>,
    expected_errors: Vec<impl ErrorTestCase>,
) {
    assert_lexing_with_options(
        source,
        LexerOptions::default(),
        expected_tokens,
        expected_errors,
    );
}

/// Shorthand for a heterogeneous token list
pub(crate) type Expected = Box<dyn TokenTestCase>;

impl TokenTestCase for Expected {
    fn kind(&self) -> TokenKind {
        (**self).kind()
    }

    fn text(&self) -> String {
        (**self).text()
    }

    fn payload<'a>(&self, text: &'a str) -> Payload<'a> {
        (**self).payload(text)
    }
}

macro_rules! toks {
    ($($tok:expr),* $(,)?) => {
        vec![$(Box::new($tok) as $crate::lexer::tests::util::Expected),*]
    };
}

pub(crate) use toks;

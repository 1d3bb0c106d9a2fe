//! # Ion Lexer
//! The load-bearing primitives of the Ion compiler front end: a stretchy
//! buffer for variable-length compiler data, and a lexer that turns a
//! character stream into integer, name and single-character tokens.
//!
//! ## Usage
//! ```rust
//! use ion_lexer::{lex, print::token_to_string, StretchyBuf};
//!
//! let result = lex("+()_HELLO1,234+FOO!994").unwrap();
//!
//! for token in &result.tokens {
//!     println!("{}", token_to_string(token));
//! }
//!
//! let mut buf = StretchyBuf::new();
//! buf.push(1u32);
//! assert_eq!((buf.len(), buf.capacity()), (1, 1));
//! ```
//!
//! ## Features
//!
//! * `serde`: Enables serialization of tokens, spans and diagnostics using the `serde` library.

pub mod buffer;
pub mod error;
mod lexer;
mod text;

pub use buffer::StretchyBuf;
pub use lexer::print;
pub use lexer::{
    lex, lex_with_options, LexResult, Lexer, LexerOptions, OverflowPolicy, Payload, Token,
    TokenKind,
};
pub use text::{ByteOffset, Span};

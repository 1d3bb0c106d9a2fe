use std::io::{self, Write};

use ion_lexer::error::ErrorInfo;
use ion_lexer::print::{error_to_string, to_pretty_string, token_to_string};
use ion_lexer::Token;

pub(crate) fn print_tokens<'a, 'src: 'a, I>(
    dst: &mut impl Write,
    tokens: I,
    pretty: bool,
) -> io::Result<()>
where
    I: IntoIterator<Item = &'a Token<'src>>,
{
    for token in tokens {
        if pretty {
            writeln!(dst, "{}", to_pretty_string(token))?;
        } else {
            writeln!(dst, "{}", token_to_string(token))?;
        }
    }

    Ok(())
}

pub(crate) fn print_errors<'a, I>(dst: &mut impl Write, errors: I) -> io::Result<()>
where
    I: IntoIterator<Item = &'a ErrorInfo>,
{
    for error in errors {
        writeln!(dst, "{}", error_to_string(error))?;
    }

    Ok(())
}

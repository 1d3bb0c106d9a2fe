/// ASCII only valid Ion name start character
#[inline]
pub(super) fn is_valid_name_start(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '_')
}

/// ASCII only valid Ion name continue character
#[inline]
pub(super) fn is_valid_name_continue(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_')
}

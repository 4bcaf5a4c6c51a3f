/// Longest local name the controller accepts, in bytes, not counting the
/// terminating NUL.
pub const MAX_NAME_LENGTH: usize = 248;

/// Longest short name the controller accepts, in bytes, not counting the
/// terminating NUL.
pub const MAX_SHORT_NAME_LENGTH: usize = 10;

/// Truncates `name` to at most [`MAX_NAME_LENGTH`] bytes. Names that already
/// fit are returned unchanged.
///
/// The cut never splits a UTF-8 sequence: a multi-byte character that
/// straddles the limit is dropped, so the result can be a few bytes shorter
/// than the maximum.
pub fn truncate_name(name: &str) -> &str {
    truncate_to(name, MAX_NAME_LENGTH)
}

/// Truncates `name` to at most [`MAX_SHORT_NAME_LENGTH`] bytes. Names that
/// already fit are returned unchanged.
///
/// As with [`truncate_name`], a multi-byte character that straddles the
/// limit is dropped rather than split.
pub fn truncate_short_name(name: &str) -> &str {
    truncate_to(name, MAX_SHORT_NAME_LENGTH)
}

// never splits a UTF-8 sequence, so a multi-byte character that straddles
// `max_len` is dropped entirely
pub(crate) fn truncate_to(name: &str, max_len: usize) -> &str {
    if name.len() <= max_len {
        return name;
    }

    let mut end = max_len;
    while !name.is_char_boundary(end) {
        end -= 1;
    }

    &name[..end]
}

/// Converts a byte offset into `source` to a character position.
///
/// Offsets past the end of `source` yield its character count.
///
/// ## Parameters
/// - `source`: The line being scanned.
/// - `byte_offset`: A byte offset into `source`.
///
/// ## Example
/// ```
/// use arithc::util::text::char_position;
///
/// assert_eq!(char_position("3 + 4", 2), 2);
/// // `é` takes two bytes but counts as one character.
/// assert_eq!(char_position("\"é\" + 1", 4), 3);
/// ```
#[must_use]
pub fn char_position(source: &str, byte_offset: usize) -> usize {
    source.char_indices()
          .take_while(|(index, _)| *index < byte_offset)
          .count()
}

/// Returns `true` for characters kept inside a token.
///
/// Word characters are Unicode letters, digits and `_`.
fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

/// Splits raw text into normalized tokens.
///
/// - Lowercases the whole input
/// - Drops every character that is neither a word character nor whitespace
///   (`"don't"` becomes `"dont"`)
/// - Splits on whitespace runs and discards empty pieces
///
/// Pure function of its input.
pub fn tokenize(text: &str) -> Vec<String> {
	text.to_lowercase()
		.chars()
		.filter(|c| is_word_char(*c) || c.is_whitespace())
		.collect::<String>()
		.split_whitespace()
		.map(str::to_owned)
		.collect()
}

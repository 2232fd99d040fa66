use std::path::Path;

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::error::Result;
use crate::io;

/// Normalizes raw corpus text into word tokens.
///
/// Processing, in order:
/// - lowercase the entire text
/// - delete every decimal digit in place (`"abc123def"` → `"abcdef"`)
/// - delete every character that is neither a word character nor whitespace
/// - split on whitespace
///
/// Decimal digits are the `Nd` category only: `²`, `½` or `Ⅻ` are numbers
/// but not digits, so they stay. Word characters are letters, numbers and
/// `_`; combining marks are not word characters.
pub fn tokenize(text: &str) -> Vec<String> {
	let cleaned: String = text
		.to_lowercase()
		.chars()
		.filter(|c| !is_decimal_digit(*c))
		.filter(|c| is_word_char(*c) || c.is_whitespace())
		.collect();

	cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Splits a query phrase into lowercase words.
///
/// Unlike [`tokenize`], digits and punctuation are kept: a query carrying
/// them can only match nothing.
pub fn tokenize_query(phrase: &str) -> Vec<String> {
	phrase.to_lowercase().split_whitespace().map(str::to_owned).collect()
}

/// Reads a corpus (file or directory of `.txt` files) and tokenizes it.
///
/// # Errors
/// Propagates I/O and decoding failures untouched.
pub fn tokenize_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
	Ok(tokenize(&io::read_corpus(path)?))
}

fn is_decimal_digit(c: char) -> bool {
	c.general_category() == GeneralCategory::DecimalNumber
}

fn is_word_char(c: char) -> bool {
	matches!(c.general_category_group(), GeneralCategoryGroup::Letter | GeneralCategoryGroup::Number)
		|| c == '_'
}

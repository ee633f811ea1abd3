//! Character classes used when deciding whether a character sits inside a
//! word.

use serde::{
  Deserialize,
  Serialize,
};

/// Which characters count as part of a word.
///
/// `Ascii` matches the regex `\w` class without Unicode support:
/// `[A-Za-z0-9_]`. `Unicode` widens letters and digits to every script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordClass {
  #[default]
  Ascii,
  Unicode,
}

impl WordClass {
  #[inline]
  pub fn is_word(self, ch: char) -> bool {
    match self {
      WordClass::Ascii => char_is_ascii_word(ch),
      WordClass::Unicode => char_is_word(ch),
    }
  }

  /// Like [`WordClass::is_word`], with a missing character counting as a
  /// non-word.
  #[inline]
  pub fn is_word_opt(self, ch: Option<char>) -> bool {
    ch.is_some_and(|ch| self.is_word(ch))
  }
}

#[inline]
pub fn char_is_word(ch: char) -> bool {
  ch.is_alphanumeric() || ch == '_'
}

#[inline]
pub fn char_is_ascii_word(ch: char) -> bool {
  ch.is_ascii_alphanumeric() || ch == '_'
}

//! Static table of pairable characters.
//!
//! Every opening character maps to exactly one closing character. Brackets
//! are asymmetric (`(` closes with `)`), quotes are symmetric: the same
//! glyph opens and closes.
//!
//! Characters are partitioned into six [`Group`]s which are the unit of
//! configuration. Lookups are total: anything that is not in the table
//! resolves to `None` or `false`, with one exception. Resolving a group by
//! name fails loudly with [`InvalidGroupError`], since an unknown name can
//! only come from a caller mistake.

use std::{
  fmt,
  str::FromStr,
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

/// Opening → closing.
pub const PAIRS: &[(char, char)] = &[
  ('(', ')'),
  ('[', ']'),
  ('{', '}'),
  ('<', '>'),
  ('"', '"'),
  ('\'', '\''),
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error(
  "invalid autopair group '{name}', expected one of: {expected}",
  expected = Group::names().join(", ")
)]
pub struct InvalidGroupError {
  pub name: String,
}

pub type Result<T> = std::result::Result<T, InvalidGroupError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Group {
  RoundBrackets,
  SquareBrackets,
  CurlyBrackets,
  AngleBrackets,
  DoubleQuotes,
  SingleQuotes,
}

impl Group {
  pub const ALL: [Group; 6] = [
    Group::RoundBrackets,
    Group::SquareBrackets,
    Group::CurlyBrackets,
    Group::AngleBrackets,
    Group::DoubleQuotes,
    Group::SingleQuotes,
  ];

  pub const fn name(self) -> &'static str {
    match self {
      Group::RoundBrackets => "roundBrackets",
      Group::SquareBrackets => "squareBrackets",
      Group::CurlyBrackets => "curlyBrackets",
      Group::AngleBrackets => "angleBrackets",
      Group::DoubleQuotes => "doubleQuotes",
      Group::SingleQuotes => "singleQuotes",
    }
  }

  /// Characters belonging to the group. Quote groups hold a single glyph.
  pub const fn chars(self) -> &'static [char] {
    match self {
      Group::RoundBrackets => &['(', ')'],
      Group::SquareBrackets => &['[', ']'],
      Group::CurlyBrackets => &['{', '}'],
      Group::AngleBrackets => &['<', '>'],
      Group::DoubleQuotes => &['"'],
      Group::SingleQuotes => &['\''],
    }
  }

  /// The group owning `ch`, if any.
  pub fn of(ch: char) -> Option<Group> {
    Self::ALL
      .into_iter()
      .find(|group| group.chars().contains(&ch))
  }

  pub fn names() -> Vec<&'static str> {
    Self::ALL.iter().map(|group| group.name()).collect()
  }
}

impl fmt::Display for Group {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Group {
  type Err = InvalidGroupError;

  fn from_str(name: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|group| group.name() == name)
      .ok_or_else(|| {
        InvalidGroupError {
          name: name.to_string(),
        }
      })
  }
}

#[inline]
pub fn is_opening(ch: char) -> bool {
  PAIRS.iter().any(|&(open, _)| open == ch)
}

#[inline]
pub fn is_closing(ch: char) -> bool {
  PAIRS.iter().any(|&(_, close)| close == ch)
}

#[inline]
pub fn is_pair_char(ch: char) -> bool {
  is_opening(ch) || is_closing(ch)
}

#[inline]
pub fn is_quote(ch: char) -> bool {
  matches!(ch, '"' | '\'')
}

pub fn closing_for(open: char) -> Option<char> {
  PAIRS
    .iter()
    .find(|&&(o, _)| o == open)
    .map(|&(_, close)| close)
}

/// Reverse lookup: the first opening character whose closing is `close`.
pub fn opening_for(close: char) -> Option<char> {
  PAIRS
    .iter()
    .find(|&&(_, c)| c == close)
    .map(|&(open, _)| open)
}

pub fn is_matching_pair(open: char, close: char) -> bool {
  is_opening(open) && is_closing(close) && closing_for(open) == Some(close)
}

pub fn resolve_group(name: &str) -> Result<&'static [char]> {
  name.parse::<Group>().map(Group::chars)
}

pub fn is_group(name: &str) -> bool {
  name.parse::<Group>().is_ok()
}

/// Returns the only `char` of `text`, or `None` when `text` is empty or
/// longer than one character.
pub fn single_char(text: &str) -> Option<char> {
  let mut chars = text.chars();
  match (chars.next(), chars.next()) {
    (Some(ch), None) => Some(ch),
    _ => None,
  }
}

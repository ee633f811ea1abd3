//! Which character groups auto-pair.
//!
//! Absent groups are enabled. Later entries win over earlier ones, both when
//! collecting from an iterator and when merging two configs.

use std::collections::BTreeMap;

use serde::{
  Deserialize,
  Deserializer,
  Serialize,
};
pub use the_core::chars::WordClass;

use crate::{
  adjacency::AdjacencyPolicy,
  pairs::{
    Group,
    InvalidGroupError,
  },
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct AutopairConfig {
  #[serde(deserialize_with = "deserialize_groups")]
  groups:     BTreeMap<Group, bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  word_class: Option<WordClass>,
}

impl AutopairConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build from group names, failing on the first unknown one.
  pub fn from_names<'a, I>(entries: I) -> Result<Self, InvalidGroupError>
  where
    I: IntoIterator<Item = (&'a str, bool)>,
  {
    entries
      .into_iter()
      .map(|(name, enabled)| name.parse::<Group>().map(|group| (group, enabled)))
      .collect()
  }

  #[must_use]
  pub fn with_group(mut self, group: Group, enabled: bool) -> Self {
    self.groups.insert(group, enabled);
    self
  }

  #[must_use]
  pub fn with_word_class(mut self, word_class: WordClass) -> Self {
    self.word_class = Some(word_class);
    self
  }

  pub fn is_enabled(&self, group: Group) -> bool {
    self.groups.get(&group).copied().unwrap_or(true)
  }

  /// Explicitly configured groups, in group order.
  pub fn explicit(&self) -> impl Iterator<Item = (Group, bool)> + '_ {
    self.groups.iter().map(|(group, enabled)| (*group, *enabled))
  }

  pub fn enabled_groups(&self) -> impl Iterator<Item = Group> + '_ {
    Group::ALL
      .into_iter()
      .filter(|group| self.is_enabled(*group))
  }

  /// Characters of every enabled group.
  pub fn active_chars(&self) -> Vec<char> {
    self
      .enabled_groups()
      .flat_map(|group| group.chars().iter().copied())
      .collect()
  }

  pub fn word_class(&self) -> WordClass {
    self.word_class.unwrap_or_default()
  }

  pub fn policy(&self) -> AdjacencyPolicy {
    AdjacencyPolicy::new(self.word_class())
  }

  /// Layer `other` on top of `self`: whatever `other` sets explicitly wins.
  #[must_use]
  pub fn merge(mut self, other: Self) -> Self {
    self.groups.extend(other.groups);
    self.word_class = other.word_class.or(self.word_class);
    self
  }
}

impl FromIterator<(Group, bool)> for AutopairConfig {
  fn from_iter<T: IntoIterator<Item = (Group, bool)>>(iter: T) -> Self {
    Self {
      groups:     iter.into_iter().collect(),
      word_class: None,
    }
  }
}

fn deserialize_groups<'de, D>(deserializer: D) -> Result<BTreeMap<Group, bool>, D::Error>
where
  D: Deserializer<'de>,
{
  BTreeMap::<String, bool>::deserialize(deserializer)?
    .into_iter()
    .map(|(name, enabled)| {
      name
        .parse::<Group>()
        .map(|group| (group, enabled))
        .map_err(serde::de::Error::custom)
    })
    .collect()
}

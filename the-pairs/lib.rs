//! Bracket and quote auto-pairing.
//!
//! [`pairs`] holds the fixed pair table and its named groups, [`adjacency`]
//! decides when a quote may close, and [`auto_pairs`] turns a keystroke into
//! one atomic [`host::PairEdit`] against any [`host::PairHost`].
//! [`document::Document`] is a rope-backed host with undo and embedded nodes.

use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod adjacency;
pub mod auto_pairs;
pub mod config;
pub mod document;
pub mod host;
pub mod pairs;
pub mod selection;
pub mod transaction;

pub type Tendril = SmartString<LazyCompact>;

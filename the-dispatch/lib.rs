//! # the-dispatch
//!
//! Routes key input to the auto-pairing hooks.
//!
//! A [`DispatchTable`] maps each [`Trigger`] (a typed character or the delete
//! key) to a handler. [`autopair_extension`] builds the table once from an
//! [`AutopairConfig`](the_pairs::config::AutopairConfig): every character of
//! an enabled group is bound to the pairing hook and the delete key to the
//! paired-delete hook. Anything without a binding continues to the host's
//! default behaviour.
//!
//! ```rust
//! use the_dispatch::{
//!   DispatchResult,
//!   KeyInput,
//!   autopair_extension,
//! };
//! use the_pairs::{
//!   config::AutopairConfig,
//!   document::Document,
//! };
//!
//! let extension = autopair_extension::<Document>(AutopairConfig::default());
//! let mut doc = Document::new("");
//!
//! assert_eq!(extension.dispatch(&mut doc, KeyInput::Text("(")), DispatchResult::Handled);
//! assert_eq!(doc.to_string(), "()");
//!
//! // Not a pair character: the host inserts it itself.
//! assert_eq!(extension.dispatch(&mut doc, KeyInput::Text("x")), DispatchResult::Continue);
//! ```

mod extension;
mod plugin;
mod registry;

pub use extension::{
  AutopairExtension,
  KeyInput,
  autopair_extension,
  build_table,
};
pub use plugin::{
  DispatchPlugin,
  DispatchResult,
};
pub use registry::{
  DispatchTable,
  DynHandler,
  Trigger,
};

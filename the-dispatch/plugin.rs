//! Plugin API the host's key pipeline talks to.
//!
//! A plugin either handles an input, suppressing the host's default
//! behaviour for it, or lets it continue down the chain.

/// Result of a dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchResult {
  /// Pass the input to the next handler.
  #[default]
  Continue,
  /// Input was handled; stop the chain.
  Handled,
}

impl DispatchResult {
  /// Convenience for a handled result.
  pub const fn handled() -> Self {
    Self::Handled
  }

  /// Convenience for a continue result.
  pub const fn r#continue() -> Self {
    Self::Continue
  }

  pub const fn from_handled(handled: bool) -> Self {
    if handled { Self::Handled } else { Self::Continue }
  }

  pub const fn is_handled(self) -> bool {
    matches!(self, Self::Handled)
  }
}

/// Minimal plugin interface for dispatch pipelines.
pub trait DispatchPlugin<Ctx, Input> {
  fn dispatch(&mut self, ctx: &mut Ctx, input: Input) -> DispatchResult;
}

use std::{
  collections::HashMap,
  fmt,
  sync::Arc,
};

use crate::plugin::DispatchResult;

/// What a handler is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Trigger {
  /// A typed character.
  Char(char),
  /// The delete key.
  Delete,
}

pub type DynHandler<Ctx> = Arc<dyn Fn(&mut Ctx, Trigger) -> DispatchResult + Send + Sync>;

/// Handlers keyed by [`Trigger`]. Setting a trigger twice keeps the last
/// handler.
pub struct DispatchTable<Ctx> {
  handlers: HashMap<Trigger, DynHandler<Ctx>>,
}

impl<Ctx> Clone for DispatchTable<Ctx> {
  fn clone(&self) -> Self {
    Self {
      handlers: self.handlers.clone(),
    }
  }
}

impl<Ctx> Default for DispatchTable<Ctx> {
  fn default() -> Self {
    Self::new()
  }
}

impl<Ctx> fmt::Debug for DispatchTable<Ctx> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DispatchTable")
      .field("triggers", &self.triggers())
      .finish()
  }
}

impl<Ctx> DispatchTable<Ctx> {
  pub fn new() -> Self {
    Self {
      handlers: HashMap::new(),
    }
  }

  pub fn set(&mut self, trigger: Trigger, handler: DynHandler<Ctx>) {
    self.handlers.insert(trigger, handler);
  }

  pub fn get(&self, trigger: Trigger) -> Option<&DynHandler<Ctx>> {
    self.handlers.get(&trigger)
  }

  pub fn remove(&mut self, trigger: Trigger) -> Option<DynHandler<Ctx>> {
    self.handlers.remove(&trigger)
  }

  pub fn contains(&self, trigger: Trigger) -> bool {
    self.handlers.contains_key(&trigger)
  }

  pub fn len(&self) -> usize {
    self.handlers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.handlers.is_empty()
  }

  /// Bound triggers, sorted.
  pub fn triggers(&self) -> Vec<Trigger> {
    let mut triggers: Vec<_> = self.handlers.keys().copied().collect();
    triggers.sort_unstable();
    triggers
  }

  /// Run the handler bound to `trigger`, continuing when there is none.
  pub fn call(&self, ctx: &mut Ctx, trigger: Trigger) -> DispatchResult {
    match self.handlers.get(&trigger) {
      Some(handler) => handler(ctx, trigger),
      None => DispatchResult::Continue,
    }
  }
}

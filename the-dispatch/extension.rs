use std::{
  fmt,
  sync::Arc,
};

use the_pairs::{
  auto_pairs::{
    delete_hook,
    hook,
  },
  config::AutopairConfig,
  host::PairHost,
  pairs::single_char,
};

use crate::{
  plugin::{
    DispatchPlugin,
    DispatchResult,
  },
  registry::{
    DispatchTable,
    DynHandler,
    Trigger,
  },
};

/// Input as the host's key pipeline reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput<'a> {
  /// Text the user typed. Only single characters can trigger pairing.
  Text(&'a str),
  /// The delete key.
  Delete,
}

impl KeyInput<'_> {
  pub fn trigger(self) -> Option<Trigger> {
    match self {
      KeyInput::Text(text) => single_char(text).map(Trigger::Char),
      KeyInput::Delete => Some(Trigger::Delete),
    }
  }
}

/// Bind every active character to the pairing hook and the delete key to the
/// paired-delete hook.
pub fn build_table<H>(config: &AutopairConfig) -> DispatchTable<H>
where
  H: PairHost + 'static,
{
  let policy = config.policy();
  let char_handler: DynHandler<H> = Arc::new(move |host: &mut H, trigger: Trigger| {
    match trigger {
      Trigger::Char(ch) => DispatchResult::from_handled(hook(host, ch, &policy)),
      Trigger::Delete => DispatchResult::Continue,
    }
  });
  let delete_handler: DynHandler<H> =
    Arc::new(|host: &mut H, _: Trigger| DispatchResult::from_handled(delete_hook(host)));

  let mut table = DispatchTable::new();
  for ch in config.active_chars() {
    table.set(Trigger::Char(ch), char_handler.clone());
  }
  table.set(Trigger::Delete, delete_handler);

  tracing::debug!(triggers = table.len(), "built autopair dispatch table");
  table
}

/// Installable auto-pairing extension.
///
/// The dispatch table is built once from the configuration and never changes
/// for the lifetime of the extension.
pub struct AutopairExtension<H> {
  config: AutopairConfig,
  table:  DispatchTable<H>,
}

impl<H> Clone for AutopairExtension<H> {
  fn clone(&self) -> Self {
    Self {
      config: self.config.clone(),
      table:  self.table.clone(),
    }
  }
}

impl<H> fmt::Debug for AutopairExtension<H> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AutopairExtension")
      .field("config", &self.config)
      .field("table", &self.table)
      .finish()
  }
}

/// Build the extension for `config`.
pub fn autopair_extension<H>(config: AutopairConfig) -> AutopairExtension<H>
where
  H: PairHost + 'static,
{
  AutopairExtension::new(config)
}

impl<H> AutopairExtension<H>
where
  H: PairHost + 'static,
{
  pub fn new(config: AutopairConfig) -> Self {
    let table = build_table(&config);
    Self { config, table }
  }

  pub fn config(&self) -> &AutopairConfig {
    &self.config
  }

  pub fn table(&self) -> &DispatchTable<H> {
    &self.table
  }

  pub fn triggers(&self) -> Vec<Trigger> {
    self.table.triggers()
  }

  pub fn dispatch(&self, host: &mut H, input: KeyInput<'_>) -> DispatchResult {
    let Some(trigger) = input.trigger() else {
      return DispatchResult::Continue;
    };
    tracing::trace!(?trigger, "autopair dispatch");
    self.table.call(host, trigger)
  }
}

impl<'a, H> DispatchPlugin<H, KeyInput<'a>> for AutopairExtension<H>
where
  H: PairHost + 'static,
{
  fn dispatch(&mut self, ctx: &mut H, input: KeyInput<'a>) -> DispatchResult {
    AutopairExtension::dispatch(self, ctx, input)
  }
}

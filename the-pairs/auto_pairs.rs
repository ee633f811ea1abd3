//! Automatic bracket and quote pairing.
//!
//! When the user types a pairable character the engine picks one of four
//! behaviours, checked in this order:
//!
//! 1. **Wrap** - with a non-empty selection, an opening character wraps it:
//!    `«wrap me»` → type `(` → `(wrap me)|`
//! 2. **Skip close** - typing a closing character that already sits after the
//!    cursor moves past it: `(|)` → type `)` → `()|`
//! 3. **Insert pair** - typing an opening character inserts both halves and
//!    puts the cursor between them: `|` → type `(` → `(|)`
//! 4. **Unhandled** - anything else is left to the host's default insertion.
//!
//! Quotes only auto-close when neither neighbour is a word character (see
//! [`AdjacencyPolicy`]), so `don|t` → type `'` stays a single apostrophe.
//!
//! On delete, an empty cursor sitting between a matching pair removes both
//! characters: `(|)` → delete → `|`.
//!
//! # Usage
//!
//! ```
//! use the_pairs::{
//!   adjacency::AdjacencyPolicy,
//!   auto_pairs::{
//!     delete_hook,
//!     hook,
//!   },
//!   document::Document,
//! };
//!
//! let policy = AdjacencyPolicy::default();
//! let mut doc = Document::new("");
//!
//! assert!(hook(&mut doc, '(', &policy));
//! assert_eq!(doc.to_string(), "()");
//!
//! assert!(delete_hook(&mut doc));
//! assert_eq!(doc.to_string(), "");
//! ```
//!
//! Decisions are pure functions of the host snapshot ([`decide`],
//! [`decide_delete`]); the hooks apply the decided edit as one atomic change
//! and report whether the keystroke was handled.

use crate::{
  Tendril,
  adjacency::{
    AdjacencyPolicy,
    Interaction,
    permits_skip,
  },
  host::{
    PairEdit,
    PairHost,
  },
  pairs::{
    closing_for,
    is_closing,
    is_matching_pair,
    is_opening,
    is_pair_char,
    single_char,
  },
};

/// Decide what typing `ch` should do, without touching the host.
pub fn decide<H>(host: &H, ch: char, policy: &AdjacencyPolicy) -> Option<PairEdit>
where
  H: PairHost + ?Sized,
{
  if !is_pair_char(ch) {
    return None;
  }

  let range = host.selection();
  tracing::trace!(?range, ch = ?ch, "autopairs decide");

  if !range.is_empty() {
    return wrap(host, range.from(), range.to(), ch, policy);
  }

  let cursor = range.head;
  let before = host.neighbor_before(cursor);
  let after = host.neighbor_after(cursor);

  if is_closing(ch) && permits_skip(true, after, ch) {
    return Some(PairEdit::MoveCursor { cursor: cursor + 1 });
  }

  if is_opening(ch) && policy.permits_auto_close(ch, Interaction::Insert, before, after) {
    let close = closing_for(ch)?;
    let mut text = Tendril::new();
    text.push(ch);
    text.push(close);
    return Some(PairEdit::Insert {
      pos: cursor,
      text,
      cursor: cursor + 1,
    });
  }

  None
}

fn wrap<H>(host: &H, from: usize, to: usize, ch: char, policy: &AdjacencyPolicy) -> Option<PairEdit>
where
  H: PairHost + ?Sized,
{
  let close = closing_for(ch)?;
  let before = host.neighbor_before(from);
  let after = host.neighbor_after(to);
  if !policy.permits_auto_close(ch, Interaction::Wrap, before, after) {
    return None;
  }

  let selected = host.slice(from, to)?;
  let mut text = Tendril::new();
  text.push(ch);
  text.push_str(&selected);
  text.push(close);

  let cursor = from + text.chars().count();
  Some(PairEdit::Replace {
    from,
    to,
    text,
    cursor,
  })
}

/// Decide whether a delete at the cursor should remove a whole pair.
pub fn decide_delete<H>(host: &H) -> Option<PairEdit>
where
  H: PairHost + ?Sized,
{
  let range = host.selection();
  if !range.is_empty() {
    return None;
  }

  let cursor = range.head;
  let from = cursor.checked_sub(1)?;
  let before = host.neighbor_before(cursor).text()?;
  let after = host.neighbor_after(cursor).text()?;
  tracing::trace!(cursor, before = ?before, after = ?after, "autopairs decide delete");

  is_matching_pair(before, after).then(|| {
    PairEdit::Delete {
      from,
      to: cursor + 1,
    }
  })
}

/// Insert hook for a typed character. Returns `true` when an edit was
/// applied and the host should skip its default insertion.
pub fn hook<H: PairHost + ?Sized>(host: &mut H, ch: char, policy: &AdjacencyPolicy) -> bool {
  match decide(host, ch, policy) {
    Some(edit) => commit(host, edit),
    None => false,
  }
}

/// [`hook`] for raw text input. Anything other than a single char is left to
/// the host.
pub fn hook_str<H: PairHost + ?Sized>(host: &mut H, input: &str, policy: &AdjacencyPolicy) -> bool {
  single_char(input).is_some_and(|ch| hook(host, ch, policy))
}

/// Delete hook for removing both halves of a pair around the cursor.
pub fn delete_hook<H: PairHost + ?Sized>(host: &mut H) -> bool {
  match decide_delete(host) {
    Some(edit) => commit(host, edit),
    None => false,
  }
}

fn commit<H: PairHost + ?Sized>(host: &mut H, edit: PairEdit) -> bool {
  tracing::debug!(?edit, "auto pair edit");
  match host.apply(edit) {
    Ok(()) => true,
    Err(err) => {
      tracing::warn!("host rejected auto pair edit: {err}");
      false
    },
  }
}

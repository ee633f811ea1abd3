use the_dispatch::{
  AutopairExtension,
  DispatchResult,
  KeyInput,
  autopair_extension,
};
use the_pairs::{
  config::AutopairConfig,
  document::Document,
  pairs::Group,
  selection::Range,
};

fn extension() -> AutopairExtension<Document> {
  autopair_extension(AutopairConfig::default())
}

/// Feed `text` through the extension one char at a time, inserting whatever
/// it does not handle the way a host would.
fn type_text(extension: &AutopairExtension<Document>, doc: &mut Document, text: &str) {
  let mut buf = [0; 4];
  for ch in text.chars() {
    let input = ch.encode_utf8(&mut buf);
    if extension.dispatch(doc, KeyInput::Text(input)) == DispatchResult::Continue {
      host_insert(doc, ch);
    }
  }
}

fn host_insert(doc: &mut Document, ch: char) {
  use the_pairs::{
    Tendril,
    transaction::Transaction,
  };

  let range = doc.selection();
  let mut text = Tendril::new();
  text.push(ch);
  let tx = Transaction::change(doc.text(), (range.from(), range.to(), Some(text)))
    .unwrap()
    .with_selection(Range::point(range.from() + 1));
  doc.apply_transaction(&tx).unwrap();
}

#[test]
fn test_open_paren_on_empty_document() {
  let mut doc = Document::new("");
  assert_eq!(
    extension().dispatch(&mut doc, KeyInput::Text("(")),
    DispatchResult::Handled
  );
  assert_eq!(doc.to_string(), "()");
  assert_eq!(doc.selection(), Range::point(1));
}

#[test]
fn test_wrap_selection() {
  let mut doc = Document::new("wrap me").with_selection(Range::new(0, 7));
  assert_eq!(
    extension().dispatch(&mut doc, KeyInput::Text("(")),
    DispatchResult::Handled
  );
  assert_eq!(doc.to_string(), "(wrap me)");
  assert_eq!(doc.selection(), Range::point(9));
}

#[test]
fn test_skip_existing_close() {
  let mut doc = Document::new("()").with_selection(Range::point(1));
  assert_eq!(
    extension().dispatch(&mut doc, KeyInput::Text(")")),
    DispatchResult::Handled
  );
  assert_eq!(doc.to_string(), "()");
  assert_eq!(doc.selection(), Range::point(2));
}

#[test]
fn test_delete_pair() {
  let mut doc = Document::new("()").with_selection(Range::point(1));
  assert_eq!(
    extension().dispatch(&mut doc, KeyInput::Delete),
    DispatchResult::Handled
  );
  assert_eq!(doc.to_string(), "");
}

#[test]
fn test_quote_after_word_continues() {
  let mut doc = Document::new("word").with_selection(Range::point(4));
  assert_eq!(
    extension().dispatch(&mut doc, KeyInput::Text("\"")),
    DispatchResult::Continue
  );
  assert_eq!(doc.to_string(), "word");

  let mut doc = Document::new("a  b").with_selection(Range::point(2));
  assert_eq!(
    extension().dispatch(&mut doc, KeyInput::Text("\"")),
    DispatchResult::Handled
  );
  assert_eq!(doc.to_string(), "a \"\" b");
}

#[test]
fn test_unbound_input_continues() {
  let mut doc = Document::new("ab").with_selection(Range::point(1));
  for input in ["x", "", "((", "`", "\n"] {
    assert_eq!(
      extension().dispatch(&mut doc, KeyInput::Text(input)),
      DispatchResult::Continue
    );
  }
  assert_eq!(
    extension().dispatch(&mut doc, KeyInput::Delete),
    DispatchResult::Continue
  );
  assert_eq!(doc.to_string(), "ab");
  assert_eq!(doc.revisions(), 0);
}

#[test]
fn test_typing_a_call_expression() {
  let ext = extension();
  let mut doc = Document::new("");
  type_text(&ext, &mut doc, "f(a[0], \"x\")");
  assert_eq!(doc.to_string(), "f(a[0], \"x\")");
  assert_eq!(doc.selection(), Range::point(12));
}

#[test]
fn test_typing_a_contraction() {
  let ext = extension();
  let mut doc = Document::new("");
  type_text(&ext, &mut doc, "don't say 'hi'");
  assert_eq!(doc.to_string(), "don't say 'hi'");
}

#[test]
fn test_type_then_delete_pairs() {
  let ext = extension();
  let mut doc = Document::new("");
  type_text(&ext, &mut doc, "{[");
  assert_eq!(doc.to_string(), "{[]}");

  assert!(ext.dispatch(&mut doc, KeyInput::Delete).is_handled());
  assert_eq!(doc.to_string(), "{}");
  assert!(ext.dispatch(&mut doc, KeyInput::Delete).is_handled());
  assert_eq!(doc.to_string(), "");
  assert_eq!(doc.selection(), Range::point(0));
}

#[test]
fn test_disabled_quotes_are_typed_plainly() {
  let config = AutopairConfig::new()
    .with_group(Group::DoubleQuotes, false)
    .with_group(Group::SingleQuotes, false);
  let ext = autopair_extension(config);
  let mut doc = Document::new("");
  type_text(&ext, &mut doc, "(\"");
  assert_eq!(doc.to_string(), "(\")");
  assert_eq!(doc.selection(), Range::point(2));
}

#[test]
fn test_undo_reverts_whole_pair() {
  let ext = extension();
  let mut doc = Document::new("x").with_selection(Range::point(1));
  assert!(ext.dispatch(&mut doc, KeyInput::Text("(")).is_handled());
  assert_eq!(doc.to_string(), "x()");
  assert!(doc.undo().unwrap());
  assert_eq!(doc.to_string(), "x");
  assert_eq!(doc.selection(), Range::point(1));
}

use the_dispatch::{
  DispatchResult,
  KeyInput,
  autopair_extension,
};
use the_pairs::{
  Tendril,
  config::AutopairConfig,
  document::Document,
  selection::Range,
  transaction::Transaction,
};

fn main() {
  let extension = autopair_extension::<Document>(AutopairConfig::default());
  let mut doc = Document::new("");

  let mut buf = [0; 4];
  for ch in "print(\"it's [ok]\")".chars() {
    let input = ch.encode_utf8(&mut buf);
    if extension.dispatch(&mut doc, KeyInput::Text(input)) == DispatchResult::Handled {
      continue;
    }

    let range = doc.selection();
    let mut text = Tendril::new();
    text.push(ch);
    let tx = Transaction::change(doc.text(), (range.from(), range.to(), Some(text)))
      .map(|tx| tx.with_selection(Range::point(range.from() + 1)));
    match tx.map(|tx| doc.apply_transaction(&tx)) {
      Ok(Ok(())) => {},
      Ok(Err(err)) => eprintln!("edit failed: {err}"),
      Err(err) => eprintln!("edit failed: {err}"),
    }
  }

  println!("{doc}");
}

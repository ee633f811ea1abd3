#![no_main]

use libfuzzer_sys::fuzz_target;
use the_dispatch::{
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

const MAX_INITIAL_CHARS: usize = 256;
const MAX_KEYS: usize = 128;

fuzz_target!(|data: &[u8]| {
  let [mask, anchor, head, rest @ ..] = data else {
    return;
  };

  let config: AutopairConfig = Group::ALL
    .into_iter()
    .enumerate()
    .map(|(bit, group)| (group, mask & (1 << bit) != 0))
    .collect();
  let extension = autopair_extension::<Document>(config);

  let split = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
  let initial: String = String::from_utf8_lossy(&rest[..split])
    .chars()
    .take(MAX_INITIAL_CHARS)
    .collect();
  let keys = rest.get(split + 1..).unwrap_or_default();

  let mut doc = Document::new(&initial)
    .with_selection(Range::new(usize::from(*anchor), usize::from(*head)));

  for &key in keys.iter().take(MAX_KEYS) {
    let len_before = doc.text().len_chars();
    let revisions = doc.revisions();

    let result = if key == 0x7f {
      extension.dispatch(&mut doc, KeyInput::Delete)
    } else {
      let mut buf = [0; 4];
      let ch = char::from(key);
      extension.dispatch(&mut doc, KeyInput::Text(ch.encode_utf8(&mut buf)))
    };

    let selection = doc.selection();
    assert!(selection.to() <= doc.text().len_chars());
    match result {
      DispatchResult::Handled => assert_eq!(doc.revisions(), revisions + 1),
      DispatchResult::Continue => {
        assert_eq!(doc.revisions(), revisions);
        assert_eq!(doc.text().len_chars(), len_before);
      },
    }
    if key == 0x7f && result.is_handled() {
      assert_eq!(doc.text().len_chars() + 2, len_before);
    }
  }

  while doc.revisions() > 0 {
    assert!(doc.undo().unwrap_or(false));
  }
  assert_eq!(doc.to_string(), initial);
});

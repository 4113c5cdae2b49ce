use larch_source::SourceMap;
use pretty_assertions::assert_eq;

use crate::token_lines;

#[test]
fn renders_location_kind_and_text() {
    let mut map = SourceMap::new();
    let id = map.add("main.lar", "let x = 42");
    assert_eq!(
        token_lines(&map, id),
        vec![
            "main.lar:1:1  identifier  let",
            "main.lar:1:5  identifier  x",
            "main.lar:1:7  unknown  =",
            "main.lar:1:9  number  42",
        ]
    );
}

#[test]
fn locations_track_line_breaks() {
    let mut map = SourceMap::new();
    let id = map.add("a.lar", "// banner\nfoo\n  3.14\n");
    assert_eq!(
        token_lines(&map, id),
        vec!["a.lar:2:1  identifier  foo", "a.lar:3:3  number  3.14"]
    );
}

#[test]
fn empty_source_renders_no_lines() {
    let mut map = SourceMap::new();
    let id = map.add("empty.lar", "");
    assert_eq!(token_lines(&map, id), Vec::<String>::new());
}

#[test]
fn string_text_keeps_its_quotes() {
    let mut map = SourceMap::new();
    let id = map.add("s.lar", "\"hi\"");
    assert_eq!(token_lines(&map, id), vec!["s.lar:1:1  string  \"hi\""]);
}

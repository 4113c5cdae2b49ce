use std::io::Write as _;

use larch_lexer::Scanner;
use pretty_assertions::assert_eq;

use crate::source_map::SourceMap;
use crate::SourceId;

fn resolve_at(map: &SourceMap, id: SourceId, offset: u32) -> (u32, u32) {
    let resolved = map.resolve(map.get(id).location(offset));
    (resolved.line, resolved.column)
}

#[test]
fn empty_map_has_no_sources() {
    let map = SourceMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
}

#[test]
fn add_registers_text_under_the_given_name() {
    let mut map = SourceMap::new();
    let id = map.add("<test>", "let x");
    let source = map.get(id);
    assert_eq!(source.file_name(), "<test>");
    assert_eq!(source.text(), "let x");
    assert_eq!(map.len(), 1);
}

#[test]
fn ids_are_sequential_from_one() {
    let mut map = SourceMap::new();
    let first = map.add("a.lar", "a");
    let second = map.add("b.lar", "b");
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 2);
    assert_eq!(map.get(first).file_name(), "a.lar");
    assert_eq!(map.get(second).file_name(), "b.lar");
}

#[test]
fn source_handle_reports_its_id() {
    let mut map = SourceMap::new();
    let id = map.add("<test>", "x");
    assert_eq!(map.get(id).id(), id);
}

#[test]
fn resolves_line_starts_across_lines() {
    let mut map = SourceMap::new();
    let id = map.add("<test>", "ab\ncd\nef");
    assert_eq!(resolve_at(&map, id, 0), (1, 1));
    assert_eq!(resolve_at(&map, id, 3), (2, 1));
    assert_eq!(resolve_at(&map, id, 6), (3, 1));
}

#[test]
fn resolves_offsets_within_a_line() {
    let mut map = SourceMap::new();
    let id = map.add("<test>", "ab\ncd\nef");
    assert_eq!(resolve_at(&map, id, 1), (1, 2));
    assert_eq!(resolve_at(&map, id, 4), (2, 2));
    assert_eq!(resolve_at(&map, id, 7), (3, 2));
}

#[test]
fn newline_byte_belongs_to_its_own_line() {
    let mut map = SourceMap::new();
    let id = map.add("<test>", "ab\ncd");
    // Offset 2 is the '\n' terminating line 1.
    assert_eq!(resolve_at(&map, id, 2), (1, 3));
}

#[test]
fn end_of_source_resolves_past_the_last_byte() {
    let mut map = SourceMap::new();
    let id = map.add("<test>", "ab\ncd");
    assert_eq!(resolve_at(&map, id, 5), (2, 3));
}

#[test]
fn empty_source_resolves_to_line_one_column_one() {
    let mut map = SourceMap::new();
    let id = map.add("<test>", "");
    assert_eq!(resolve_at(&map, id, 0), (1, 1));
}

#[test]
fn trailing_newline_opens_a_final_empty_line() {
    let mut map = SourceMap::new();
    let id = map.add("<test>", "ab\n");
    assert_eq!(resolve_at(&map, id, 3), (2, 1));
}

#[test]
fn column_counts_bytes_not_chars() {
    let mut map = SourceMap::new();
    // "é" is two bytes, so the 'x' after it sits at byte column 4.
    let id = map.add("<test>", "aéx");
    assert_eq!(resolve_at(&map, id, 3), (1, 4));
}

#[test]
fn resolved_display_matches_diagnostic_format() {
    let mut map = SourceMap::new();
    let id = map.add("main.lar", "x\ny");
    let resolved = map.resolve(map.get(id).location(2));
    assert_eq!(resolved.to_string(), "main.lar:2:1");
}

#[test]
fn resolution_agrees_with_a_linear_newline_count() {
    let text = "/// doc\nfn main() {\n  let x = 3.14;\n  \"str\"\n}\n";
    let mut map = SourceMap::new();
    let id = map.add("<test>", text);
    let source = map.get(id);

    for token in Scanner::new(source.cursor()) {
        let offset = token.span.start;
        let bytes = &text.as_bytes()[..offset as usize];
        let line = bytes.iter().filter(|b| **b == b'\n').count() as u32 + 1;
        let line_start = bytes
            .iter()
            .rposition(|b| *b == b'\n')
            .map_or(0, |i| i + 1) as u32;

        let resolved = map.resolve(source.location(offset));
        assert_eq!(
            (resolved.line, resolved.column),
            (line, offset - line_start + 1)
        );
    }
}

#[test]
fn source_hands_out_a_scannable_cursor() {
    let mut map = SourceMap::new();
    let id = map.add("<test>", "one 2");
    let source = map.get(id);
    let tokens: Vec<_> = Scanner::new(source.cursor()).collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(&source.text()[tokens[0].span.to_range()], "one");
    assert_eq!(&source.text()[tokens[1].span.to_range()], "2");
}

#[test]
fn start_is_the_first_byte() {
    let mut map = SourceMap::new();
    let id = map.add("<test>", "abc");
    let resolved = map.resolve(map.get(id).start());
    assert_eq!((resolved.line, resolved.column), (1, 1));
}

#[test]
fn load_reads_a_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "let x = 1").unwrap();

    let mut map = SourceMap::new();
    let id = map.load(file.path()).unwrap();
    let source = map.get(id);
    assert_eq!(source.text(), "let x = 1\n");
    assert_eq!(source.file_name(), file.path().display().to_string());
}

#[test]
fn load_reports_a_missing_file_with_its_path() {
    let mut map = SourceMap::new();
    let err = map.load("/no/such/file.lar").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("/no/such/file.lar"), "message: {message}");
    assert!(map.is_empty());
}

#[test]
#[should_panic(expected = "was not issued by this map")]
fn get_panics_on_an_unissued_id() {
    let mut map = SourceMap::new();
    let foreign = {
        let mut other = SourceMap::new();
        other.add("a", "a");
        other.add("b", "b")
    };
    map.add("only", "x");
    let _ = map.get(foreign);
}

#[test]
#[should_panic(expected = "past the end")]
fn resolve_panics_on_an_out_of_range_offset() {
    let mut map = SourceMap::new();
    map.add("a", "ab");
    let loc = {
        let mut other = SourceMap::new();
        let long = other.add("long", "abcdefgh");
        other.get(long).location(7)
    };
    let _ = map.resolve(loc);
}

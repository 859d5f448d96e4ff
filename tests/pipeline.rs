//! End-to-end tests for the extraction pipeline and grid assembly.
//!
//! Property tests cover the grid round trip and deduplication; the rest
//! pin down literal behavior on small inputs.

use std::collections::HashSet;

use glyphgrid::extract::{extract_triples, skip_preamble};
use glyphgrid::glyph::is_valid_glyph;
use glyphgrid::{cells_from_items, grid, parse_document, CellSet, PositionedChar};
use proptest::prelude::*;

const FILL: char = '.';

fn items(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_string()).collect()
}

fn doc_table(cells: &[PositionedChar]) -> String {
    let mut html = String::from(
        "<html><body><p>Intro 3 4 5</p><table>\
         <tr><td>x-coordinate</td><td>Character</td><td>y-coordinate</td></tr>",
    );
    for c in cells {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            c.x, c.glyph, c.y
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn glyph() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["#", "@", "*", "o", "█", "▀", "▄", "░"]).prop_map(String::from)
}

fn candidates() -> impl Strategy<Value = Vec<PositionedChar>> {
    prop::collection::vec((-15i64..15, -15i64..15, glyph()), 0..60).prop_map(|v| {
        v.into_iter()
            .map(|(x, y, g)| PositionedChar::new(x, y, g))
            .collect()
    })
}

/// Non-fill positions recovered from assembled rows.
fn scan_rows(rows: &[String], cells: &CellSet) -> HashSet<(i64, i64, String)> {
    let bounds = cells.bounds();
    let mut found = HashSet::new();
    for (r, row) in rows.iter().enumerate() {
        let y = bounds.max_y - r as i64;
        for (col, ch) in row.chars().enumerate() {
            if ch != FILL {
                found.insert((bounds.min_x + col as i64, y, ch.to_string()));
            }
        }
    }
    found
}

proptest! {
    #[test]
    fn assemble_round_trips(cands in candidates()) {
        let cells = CellSet::from_candidates(cands);
        let rows = grid::assemble(&cells, FILL);

        let expected: HashSet<_> = cells.iter().map(|c| (c.x, c.y, c.glyph.clone())).collect();
        prop_assert_eq!(scan_rows(&rows, &cells), expected);
    }

    #[test]
    fn row_count_and_width(cands in candidates()) {
        let cells = CellSet::from_candidates(cands);
        let rows = grid::assemble(&cells, FILL);

        if cells.is_empty() {
            prop_assert!(rows.is_empty());
        } else {
            let bounds = cells.bounds();
            prop_assert_eq!(rows.len() as u128, bounds.height());
            let width = usize::try_from(bounds.width()).unwrap();
            for (row, y) in rows.iter().zip((bounds.min_y..=bounds.max_y).rev()) {
                prop_assert!(!row.ends_with(FILL));

                // Every glyph is one code point here, so re-padding the
                // trimmed row must give back the full pre-trim row.
                let padded = format!("{row:.<width$}");
                prop_assert_eq!(padded.chars().count(), width);
                prop_assert!(padded.starts_with(row.as_str()));
                let expected: String = (bounds.min_x..=bounds.max_x)
                    .map(|x| cells.get(x, y).map_or_else(|| FILL.to_string(), str::to_string))
                    .collect();
                prop_assert_eq!(padded, expected);
            }
        }
    }

    #[test]
    fn dedup_is_idempotent(cands in candidates()) {
        let once = CellSet::from_candidates(cands);
        let twice = CellSet::from_candidates(once.clone().into_vec());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dedup_keeps_unique_positions(cands in candidates()) {
        let cells = CellSet::from_candidates(cands.clone());
        let positions: HashSet<_> = cells.iter().map(PositionedChar::position).collect();
        prop_assert_eq!(positions.len(), cells.len());

        let expected: HashSet<_> = cands.iter().map(PositionedChar::position).collect();
        prop_assert_eq!(positions, expected);
    }

    #[test]
    fn document_table_parses_back(cands in candidates()) {
        let parsed = parse_document(&doc_table(&cands));
        prop_assert_eq!(parsed, CellSet::from_candidates(cands));
    }

    #[test]
    fn arbitrary_markup_never_panics(html in "\\PC{0,200}") {
        let cells = parse_document(&html);
        let _ = grid::assemble(&cells, ' ');
    }
}

#[test]
fn unicode_line_separators_split_items() {
    let cells = parse_document("<pre>0&#x2028;#&#x2028;0</pre>");
    assert_eq!(cells.as_slice(), &[PositionedChar::new(0, 0, "#")]);
}

#[test]
fn worked_example() {
    let list = items(&["character", "0", "#", "0", "1", "@", "1"]);
    let cells = cells_from_items(&list);
    assert_eq!(
        cells.as_slice(),
        &[PositionedChar::new(0, 0, "#"), PositionedChar::new(1, 1, "@")]
    );
    // y = 1 first; (0, 1) is empty and (1, 0) is trailing fill.
    assert_eq!(grid::assemble(&cells, '.'), vec![".@", "#"]);
}

#[test]
fn header_variants() {
    let data = ["9", "#", "9"];

    for header in ["X-Coordinate", "the x coordinate column"] {
        let mut list = items(&["5", "!", "5", header]);
        list.extend(items(&data));
        assert_eq!(skip_preamble(&list), items(&data).as_slice(), "{header}");
    }

    let mut list = items(&["5", "!", "5", "xcoordinate"]);
    list.extend(items(&data));
    assert_eq!(skip_preamble(&list).len(), list.len());
    assert_eq!(extract_triples(skip_preamble(&list)).len(), 2);
}

#[test]
fn four_char_token_is_rejected() {
    assert!(!is_valid_glyph("abcd"));
    assert!(extract_triples(&items(&["0", "abcd", "0"])).is_empty());
}

#[test]
fn duplicate_position_keeps_first_glyph() {
    let cells = cells_from_items(&items(&["2", "a", "2", "2", "b", "2"]));
    assert_eq!(cells.as_slice(), &[PositionedChar::new(2, 2, "a")]);
}

#[test]
fn empty_input_is_not_an_error() {
    let cells = cells_from_items(&[]);
    assert!(cells.is_empty());
    assert!(grid::assemble(&cells, ' ').is_empty());

    let cells = parse_document("");
    assert!(cells.is_empty());
}

#[test]
fn preamble_numbers_are_ignored() {
    let html = "<p>1</p><p>#</p><p>1</p><p>Y Coordinate</p><p>0</p><p>+</p><p>0</p>";
    let cells = parse_document(html);
    assert_eq!(cells.as_slice(), &[PositionedChar::new(0, 0, "+")]);
}

#[test]
fn script_content_is_not_data() {
    let html = "<p>character</p><p>0</p><p>#</p><p>0</p>\
        <script>\n1\n#\n1\n</script><style>\n2\n#\n2\n</style>";
    let cells = parse_document(html);
    assert_eq!(cells.len(), 1);
}

use crate::model::Table;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Associate each keyword span with its best-fit extracted table.
///
/// For each keyword (in span map order), tables are scanned in extraction
/// order and the first one whose flattened token set is a non-strict subset
/// of the span's token set is bound to that keyword. First fit, not best
/// fit: under overlapping vocabulary across sections an earlier table can
/// shadow a tighter later one. This is a known limitation, accepted for
/// its robustness to cell reordering and whitespace differences.
///
/// Keywords with no qualifying table are omitted. A table may be bound to
/// more than one keyword.
pub fn associate_tables<'a>(
    spans: &IndexMap<String, Vec<String>>,
    tables: &'a [Table],
) -> IndexMap<String, &'a Table> {
    let table_words: Vec<HashSet<&str>> = tables.iter().map(Table::word_set).collect();

    let mut result = IndexMap::new();
    for (keyword, words) in spans {
        let span_words: HashSet<&str> = words.iter().map(String::as_str).collect();
        for (table, table_set) in tables.iter().zip(&table_words) {
            if table_set.is_subset(&span_words) {
                result.insert(keyword.clone(), table);
                break;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(index: usize, cells: &[&str]) -> Table {
        Table::new(index, vec![cells.iter().map(|c| c.to_string()).collect()])
    }

    fn spans(entries: &[(&str, &[&str])]) -> IndexMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(k, words)| {
                (
                    k.to_string(),
                    words.iter().map(|w| w.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_subset_match_selects_table() {
        let tables = vec![table(0, &["100", "200"]), table(1, &["50", "60"])];
        let spans = spans(&[
            ("Revenue", &["100", "200"][..]),
            ("Expenses", &["50", "60"][..]),
        ]);

        let assoc = associate_tables(&spans, &tables);
        assert_eq!(assoc["Revenue"].index, 0);
        assert_eq!(assoc["Expenses"].index, 1);
    }

    #[test]
    fn test_first_fit_in_extraction_order() {
        // Both tables qualify for the span; extraction order decides.
        let tables = vec![table(0, &["a"]), table(1, &["a", "b"])];
        let spans = spans(&[("K", &["a", "b", "c"][..])]);

        let assoc = associate_tables(&spans, &tables);
        assert_eq!(assoc["K"].index, 0);
    }

    #[test]
    fn test_unmatched_keyword_is_omitted() {
        let tables = vec![table(0, &["x", "y"])];
        let spans = spans(&[("K", &["a", "b"][..])]);

        let assoc = associate_tables(&spans, &tables);
        assert!(assoc.is_empty());
    }

    #[test]
    fn test_table_may_serve_multiple_keywords() {
        let tables = vec![table(0, &["a"])];
        let spans = spans(&[("K1", &["a", "b"][..]), ("K2", &["a", "c"][..])]);

        let assoc = associate_tables(&spans, &tables);
        assert_eq!(assoc["K1"].index, 0);
        assert_eq!(assoc["K2"].index, 0);
    }

    #[test]
    fn test_association_order_follows_span_order() {
        let tables = vec![table(0, &["a"]), table(1, &["b"])];
        let spans = spans(&[("K2", &["b"][..]), ("K1", &["a"][..])]);

        let assoc = associate_tables(&spans, &tables);
        let keys: Vec<&String> = assoc.keys().collect();
        assert_eq!(keys, ["K2", "K1"]);
    }

    #[test]
    fn test_no_tables_yields_empty_mapping() {
        let spans = spans(&[("K", &["a"][..])]);
        let assoc = associate_tables(&spans, &[]);
        assert!(assoc.is_empty());
    }
}

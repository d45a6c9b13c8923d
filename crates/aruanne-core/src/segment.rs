use indexmap::IndexMap;
use regex::Regex;

/// Split document text into keyword-delimited spans.
///
/// For every match of every pattern, the span runs from the end of the
/// match to the start of the nearest following match of any pattern, or to
/// end of text. The span is tokenized on whitespace.
///
/// If the same keyword literal matches more than once, the later
/// occurrence's tokens overwrite the earlier entry; the entry keeps its
/// original position in the map. Returns an empty map when nothing
/// matches.
pub fn split_by_keywords(text: &str, patterns: &[Regex]) -> IndexMap<String, Vec<String>> {
    let mut result = IndexMap::new();

    for pattern in patterns {
        for m in pattern.find_iter(text) {
            let keyword = m.as_str().to_string();
            let start = m.end();
            let rest = &text[start..];

            // Nearest subsequent match of any pattern bounds the span.
            let mut end = text.len();
            for next_pattern in patterns {
                if let Some(next) = next_pattern.find(rest) {
                    end = end.min(start + next.start());
                }
            }

            let words = text[start..end]
                .split_whitespace()
                .map(str::to_string)
                .collect();
            result.insert(keyword, words);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(raw: &[&str]) -> Vec<Regex> {
        raw.iter().map(|p| Regex::new(p).unwrap()).collect()
    }

    #[test]
    fn test_span_runs_to_next_keyword() {
        let text = "Revenue 100 200\nExpenses 50 60";
        let result = split_by_keywords(text, &patterns(&["Revenue", "Expenses"]));

        assert_eq!(result["Revenue"], vec!["100", "200"]);
        assert_eq!(result["Expenses"], vec!["50", "60"]);
    }

    #[test]
    fn test_span_runs_to_end_of_text_when_nothing_follows() {
        let text = "Bilanss Raha 100";
        let result = split_by_keywords(text, &patterns(&["Bilanss"]));
        assert_eq!(result["Bilanss"], vec!["Raha", "100"]);
    }

    #[test]
    fn test_no_match_returns_empty_map() {
        let result = split_by_keywords("nothing here", &patterns(&["Bilanss"]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_insertion_order_is_pattern_then_match_order() {
        let text = "Expenses 1 Revenue 2";
        let result = split_by_keywords(text, &patterns(&["Revenue", "Expenses"]));
        let keys: Vec<&String> = result.keys().collect();
        assert_eq!(keys, ["Revenue", "Expenses"]);
    }

    #[test]
    fn test_duplicate_keyword_last_occurrence_wins() {
        let text = "Bilanss 1 2 Muu x Bilanss 3 4";
        let result = split_by_keywords(text, &patterns(&["Bilanss", "Muu"]));

        // Later occurrence overwrites, position in the map is unchanged.
        assert_eq!(result["Bilanss"], vec!["3", "4"]);
        let keys: Vec<&String> = result.keys().collect();
        assert_eq!(keys, ["Bilanss", "Muu"]);
    }

    #[test]
    fn test_span_never_crosses_a_later_occurrence_of_any_pattern() {
        let text = "Revenue a b Expenses c Revenue d";
        let result = split_by_keywords(text, &patterns(&["Revenue", "Expenses"]));

        // First Revenue span stops at Expenses; its entry is then
        // overwritten by the second occurrence anyway.
        assert_eq!(result["Revenue"], vec!["d"]);
        // Expenses span stops at the second Revenue.
        assert_eq!(result["Expenses"], vec!["c"]);
    }

    #[test]
    fn test_regex_alternation_keys_by_matched_literal() {
        let text = "Kasumiaruanne 5 6 Income statement 7 8";
        let result = split_by_keywords(text, &patterns(&["Kasumiaruanne|Income statement"]));

        assert_eq!(result["Kasumiaruanne"], vec!["5", "6"]);
        assert_eq!(result["Income statement"], vec!["7", "8"]);
    }

    #[test]
    fn test_deterministic_for_fixed_inputs() {
        let text = "Revenue 100 200\nExpenses 50 60";
        let pats = patterns(&["Revenue", "Expenses"]);
        let a = split_by_keywords(text, &pats);
        let b = split_by_keywords(text, &pats);
        assert_eq!(a, b);
    }
}

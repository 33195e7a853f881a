//! Property-based tests for the section parser.

use super::Parser;
use crate::options::ParserOptions;
use crate::value::Value;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Parsing never panics and tolerates arbitrary text
    #[test]
    fn parse_never_panics(lines in prop::collection::vec(".*", 0..20)) {
        let parser = Parser::new(ParserOptions::default()).unwrap();
        let _ = parser.parse_lines(&lines);
    }

    // Every section header produces exactly one section, however often it repeats
    #[test]
    fn repeated_headers_merge(
        names in prop::collection::vec(prop::sample::select(vec!["a", "b", "c"]), 1..12)
    ) {
        let parser = Parser::new(ParserOptions::default()).unwrap();
        let lines: Vec<String> = names
            .iter()
            .enumerate()
            .flat_map(|(i, name)| vec![format!("[{name}]"), format!("k{i} = {i}")])
            .collect();
        let config = parser.parse_lines(&lines);

        let mut unique: Vec<&str> = Vec::new();
        for name in &names {
            if !unique.contains(name) {
                unique.push(*name);
            }
        }
        prop_assert_eq!(config.section_names().collect::<Vec<_>>(), unique);

        for (i, name) in names.iter().enumerate() {
            let key = format!("k{i}");
            let expected = Value::Integer(i64::try_from(i).unwrap());
            prop_assert_eq!(config.get_value(name, &key), Some(&expected));
        }
    }

    // Integer option values survive a parse with inference enabled
    #[test]
    fn integer_options_are_typed(name in name_strategy(), n in 0i64..1_000_000_000) {
        let parser = Parser::new(ParserOptions::default()).unwrap();
        let config = parser.parse_lines(["[s]".to_string(), format!("{name} = {n}")]);
        prop_assert_eq!(config.get_value("s", &name), Some(&Value::Integer(n)));
    }

    // With inference disabled the stored value is the trimmed text
    #[test]
    fn untyped_values_are_trimmed_text(name in name_strategy(), value in "[a-z0-9.\\[\\], ]{1,20}") {
        let options = ParserOptions::default().with_type_inference(false);
        let parser = Parser::new(options).unwrap();
        let config = parser.parse_lines(["[s]".to_string(), format!("{name} = {value}")]);

        let trimmed = value.trim();
        let expected = if trimmed.is_empty() {
            Value::Null
        } else {
            Value::String(trimmed.to_string())
        };
        prop_assert_eq!(config.get_value("s", &name), Some(&expected));
    }

    // Inline comments never leak into stored values
    #[test]
    fn inline_comments_are_removed(name in name_strategy(), comment in "[^\n]{0,20}") {
        let parser = Parser::new(ParserOptions::default()).unwrap();
        let config = parser.parse_lines(["[s]".to_string(), format!("{name} = 7 #{comment}")]);
        prop_assert_eq!(config.get_value("s", &name), Some(&Value::Integer(7)));
    }

    // Options before the first header are always dropped
    #[test]
    fn leading_options_are_dropped(names in prop::collection::vec(name_strategy(), 0..8)) {
        let parser = Parser::new(ParserOptions::default()).unwrap();
        let lines: Vec<String> = names.iter().map(|n| format!("{n} = 1")).collect();
        let config = parser.parse_lines(&lines);
        prop_assert!(config.is_empty());
    }
}

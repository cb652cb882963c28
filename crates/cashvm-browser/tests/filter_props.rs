//! Filter composition properties

use cashvm_browser::{filter_rows, ActivationYear, Catalog, Query};
use cashvm_opcodes::Category;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

fn categories() -> impl Strategy<Value = Vec<Category>> {
    proptest::sample::subsequence(Category::ALL.to_vec(), 0..=Category::ALL.len())
}

fn years() -> impl Strategy<Value = BTreeSet<ActivationYear>> {
    proptest::sample::subsequence(ActivationYear::ALL.to_vec(), 0..=ActivationYear::ALL.len())
        .prop_map(|years| years.into_iter().collect())
}

fn search() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("sig".to_string()),
        Just("ADD".to_string()),
        Just("push".to_string()),
        Just(" token ".to_string()),
        "[a-z]{1,3}",
    ]
}

fn values<'a>(rows: impl IntoIterator<Item = &'a cashvm_opcodes::OpcodeRow>) -> Vec<u8> {
    rows.into_iter().map(|row| row.value).collect()
}

proptest! {
    #[test]
    fn prop_categories_respected(cats in categories()) {
        let query = Query { search: String::new(), categories: cats.clone() };
        let rows = Catalog::global().filter(&query, &BTreeSet::new());
        for row in rows {
            prop_assert!(cats.is_empty() || cats.contains(&row.category));
        }
    }

    #[test]
    fn prop_years_respected(selected in years()) {
        let catalog = Catalog::global();
        let allowed = catalog.years().union(&selected);
        let rows = catalog.filter(&Query::default(), &selected);
        if selected.is_empty() {
            prop_assert_eq!(rows.len(), 256);
        } else {
            prop_assert_eq!(rows.len(), allowed.len());
            for row in rows {
                prop_assert!(allowed.contains(&row.value));
            }
        }
    }

    #[test]
    fn prop_category_and_search_intersect(cats in categories(), text in search()) {
        let table = Catalog::global().table();
        let combined = Query { search: text.clone(), categories: cats.clone() };
        let by_category = Query { search: String::new(), categories: cats };

        let both = values(filter_rows(table.rows(), &combined, None));
        let left: HashSet<u8> = values(filter_rows(table.rows(), &by_category, None)).into_iter().collect();
        let right: HashSet<u8> = values(filter_rows(table.rows(), &Query::search(text), None)).into_iter().collect();

        let expected: Vec<u8> = table
            .rows()
            .iter()
            .map(|row| row.value)
            .filter(|value| left.contains(value) && right.contains(value))
            .collect();
        prop_assert_eq!(both, expected);
    }

    #[test]
    fn prop_order_preserved(cats in categories(), text in search(), selected in years()) {
        let query = Query { search: text, categories: cats };
        let found = values(Catalog::global().filter(&query, &selected));
        prop_assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn test_empty_query_is_whole_table() {
    let table = Catalog::global().table();
    let found = values(filter_rows(table.rows(), &Query::default(), None));
    assert_eq!(found, (0..=u8::MAX).collect::<Vec<_>>());
}

use pretty_assertions::assert_eq;

use calmaria::catalog::{filter_items, ALIGN_YOUR_BODY, FAVORITE_COLLECTIONS};
use calmaria::resources::{Locale, Resources};

#[test]
fn empty_query_returns_every_item_in_order() {
    let resources = Resources::default();
    for catalog in [&ALIGN_YOUR_BODY, &FAVORITE_COLLECTIONS] {
        let filtered = filter_items(catalog.as_slice(), &resources, "");
        assert_eq!(filtered.len(), catalog.len());
        for (got, expected) in filtered.iter().zip(catalog.iter()) {
            assert_eq!(**got, *expected);
        }
    }
}

#[test]
fn query_matches_are_case_insensitive_substrings() {
    let resources = Resources::default();

    let filtered = filter_items(&ALIGN_YOUR_BODY, &resources, "QUI");
    let labels: Vec<&str> = filtered
        .iter()
        .map(|item| resources.string(item.label))
        .collect();
    assert_eq!(labels, vec!["Quick Yoga"]);

    assert!(filter_items(&ALIGN_YOUR_BODY, &resources, "zzz").is_empty());
}

#[test]
fn result_is_a_subsequence_of_the_catalog() {
    let resources = Resources::default();
    let filtered = filter_items(&ALIGN_YOUR_BODY, &resources, "t");

    let mut catalog = ALIGN_YOUR_BODY.iter();
    for item in filtered {
        assert!(catalog.any(|original| original == item));
    }
}

#[test]
fn portuguese_labels_filter_in_portuguese() {
    let resources = Resources::new(Locale::Pt);

    let filtered = filter_items(&ALIGN_YOUR_BODY, &resources, "yoga");
    let labels: Vec<&str> = filtered
        .iter()
        .map(|item| resources.string(item.label))
        .collect();
    assert_eq!(labels, vec!["Yoga rápida", "Yoga pré-natal"]);

    // English-only substrings stop matching under the Portuguese locale.
    assert!(filter_items(&ALIGN_YOUR_BODY, &resources, "stretch").is_empty());
    assert_eq!(filter_items(&ALIGN_YOUR_BODY, &resources, "alonga").len(), 1);
}

#[test]
fn accented_queries_match_accented_labels() {
    let resources = Resources::new(Locale::Pt);
    let filtered = filter_items(&ALIGN_YOUR_BODY, &resources, "rápida");
    assert_eq!(filtered.len(), 1);
    assert_eq!(resources.string(filtered[0].label), "Yoga rápida");
}

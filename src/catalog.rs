//! Static item catalogs and the search filter.
//!
//! Both catalogs are fixed at six entries, declared once and never mutated.
//! Insertion order defines display order.

use crate::resources::{ImageRes, Resources, StringRes};

/// An immutable catalog entry pairing an image reference with a label
/// reference. The label resolves to locale-dependent display text through
/// [`Resources`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub image: ImageRes,
    pub label: StringRes,
}

impl CatalogItem {
    pub const fn new(image: ImageRes, label: StringRes) -> Self {
        Self { image, label }
    }
}

/// Body-focus exercises shown in the "Align your body" row.
pub static ALIGN_YOUR_BODY: [CatalogItem; 6] = [
    CatalogItem::new(ImageRes::Ab1Inversions, StringRes::Ab1Inversions),
    CatalogItem::new(ImageRes::Ab2QuickYoga, StringRes::Ab2QuickYoga),
    CatalogItem::new(ImageRes::Ab3Stretching, StringRes::Ab3Stretching),
    CatalogItem::new(ImageRes::Ab4Tabata, StringRes::Ab4Tabata),
    CatalogItem::new(ImageRes::Ab5Hiit, StringRes::Ab5Hiit),
    CatalogItem::new(ImageRes::Ab6PreNatalYoga, StringRes::Ab6PreNatalYoga),
];

/// Collections shown in the "Favorite collections" grid. Never filtered.
pub static FAVORITE_COLLECTIONS: [CatalogItem; 6] = [
    CatalogItem::new(ImageRes::Fc1ShortMantras, StringRes::Fc1ShortMantras),
    CatalogItem::new(ImageRes::Fc2NatureMeditations, StringRes::Fc2NatureMeditations),
    CatalogItem::new(ImageRes::Fc3StressAndAnxiety, StringRes::Fc3StressAndAnxiety),
    CatalogItem::new(ImageRes::Fc4SelfMassage, StringRes::Fc4SelfMassage),
    CatalogItem::new(ImageRes::Fc5Overwhelmed, StringRes::Fc5Overwhelmed),
    CatalogItem::new(ImageRes::Fc6NightlyWindDown, StringRes::Fc6NightlyWindDown),
];

/// Returns the items whose resolved label contains `query` as a
/// case-insensitive substring, preserving catalog order.
///
/// Matching runs against the display string for the active locale, so the
/// result set is locale-sensitive. Case folding uses [`str::to_lowercase`]
/// (Unicode simple case mapping), which is a known limitation for
/// locale-specific scripts such as dotted/dotless I.
///
/// The empty query matches every item. Pure: no state, no side effects,
/// cheap enough to re-run on every keystroke.
pub fn filter_items<'a>(
    items: &'a [CatalogItem],
    resources: &Resources,
    query: &str,
) -> Vec<&'a CatalogItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| resources.string(item.label).to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::resources::Locale;

    #[test]
    fn test_empty_query_returns_catalog_unchanged() {
        let resources = Resources::default();
        let filtered = filter_items(&ALIGN_YOUR_BODY, &resources, "");
        assert_eq!(filtered.len(), ALIGN_YOUR_BODY.len());
        for (item, original) in filtered.iter().zip(ALIGN_YOUR_BODY.iter()) {
            assert_eq!(**item, *original);
        }
    }

    #[test]
    fn test_no_match_returns_empty() {
        let resources = Resources::default();
        assert!(filter_items(&ALIGN_YOUR_BODY, &resources, "z").is_empty());
    }

    #[test]
    fn test_substring_match_preserves_order() {
        let resources = Resources::default();
        // "yoga" matches two items; they must come back in catalog order.
        let filtered = filter_items(&ALIGN_YOUR_BODY, &resources, "yoga");
        let labels: Vec<&str> = filtered
            .iter()
            .map(|item| resources.string(item.label))
            .collect();
        assert_eq!(labels, vec!["Quick Yoga", "Pre-natal Yoga"]);
    }

    #[rstest]
    #[case("YOGA")]
    #[case("yoga")]
    #[case("YoGa")]
    fn test_matching_is_case_insensitive(#[case] query: &str) {
        let resources = Resources::default();
        let filtered = filter_items(&ALIGN_YOUR_BODY, &resources, query);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let resources = Resources::default();
        let first = filter_items(&ALIGN_YOUR_BODY, &resources, "qui");
        let second = filter_items(&ALIGN_YOUR_BODY, &resources, "qui");
        assert_eq!(first, second);
    }

    #[test]
    fn test_end_to_end_example() {
        let resources = Resources::default();
        let catalog = &ALIGN_YOUR_BODY[..3];

        let filtered = filter_items(catalog, &resources, "qui");
        assert_eq!(filtered.len(), 1);
        assert_eq!(resources.string(filtered[0].label), "Quick Yoga");

        assert!(filter_items(catalog, &resources, "z").is_empty());

        let all = filter_items(catalog, &resources, "");
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_match_set_depends_on_locale() {
        let en = Resources::new(Locale::En);
        let pt = Resources::new(Locale::Pt);
        // "Stretching" vs "Alongamento": the query "alonga" only matches the
        // resolved Portuguese label.
        assert!(filter_items(&ALIGN_YOUR_BODY, &en, "alonga").is_empty());
        assert_eq!(filter_items(&ALIGN_YOUR_BODY, &pt, "alonga").len(), 1);
    }

    #[test]
    fn test_filter_does_not_mutate_catalog() {
        let resources = Resources::default();
        let before = ALIGN_YOUR_BODY;
        let _ = filter_items(&ALIGN_YOUR_BODY, &resources, "qui");
        assert_eq!(before, ALIGN_YOUR_BODY);
    }
}

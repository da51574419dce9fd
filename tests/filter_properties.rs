//! Property tests for the filter engine

use proptest::prelude::*;

use silograph::core::{Category, Record};
use silograph::filter::{Bucket, FilterEngine, FilterState};

/// Titles drawn from the vocabulary the keyword rules care about, plus noise
fn title_strategy() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "Unidentified",
        "woman",
        "man",
        "boy",
        "girl",
        "lady",
        "gentleman",
        "general",
        "captain",
        "president",
        "first lady",
        "portrait",
        "profile",
        "landscape",
        "harbor",
    ]);
    prop::collection::vec(words, 1..5).prop_map(|w| w.join(" "))
}

/// Records with position-derived filenames, so identity stays unique
fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(title_strategy(), 0..40).prop_map(|titles| {
        titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| Record {
                title,
                filename: format!("sil_{i:05}.jpg"),
                object_type: "Silhouettes".to_string(),
                ..Default::default()
            })
            .collect()
    })
}

fn bucket_strategy() -> impl Strategy<Value = Bucket> {
    prop::sample::select(vec![
        Bucket::All,
        Bucket::Unidentified,
        Bucket::Named,
        Bucket::Politics,
        Bucket::Military,
        Bucket::FirstLadies,
    ])
}

fn category_strategy() -> impl Strategy<Value = Option<Category>> {
    prop::sample::select(vec![
        None,
        Some(Category::Children),
        Some(Category::Women),
        Some(Category::Men),
    ])
}

proptest! {
    /// The filtered output is always an order-preserving subsequence of
    /// the input
    #[test]
    fn filter_output_is_ordered_subsequence(
        records in records_strategy(),
        category in category_strategy(),
        bucket in bucket_strategy(),
    ) {
        let engine = FilterEngine::new();
        let state = FilterState { category, bucket };
        let filtered = engine.apply(&records, &state);

        prop_assert!(filtered.len() <= records.len());

        // Every output record appears in the input at a strictly
        // increasing position
        let mut cursor = 0;
        for out in &filtered {
            let pos = records[cursor..]
                .iter()
                .position(|r| std::ptr::eq(r, *out));
            prop_assert!(pos.is_some());
            cursor += pos.unwrap() + 1;
        }
    }

    /// Applying the same state twice yields identical output
    #[test]
    fn filter_is_idempotent(
        records in records_strategy(),
        category in category_strategy(),
        bucket in bucket_strategy(),
    ) {
        let engine = FilterEngine::new();
        let state = FilterState { category, bucket };

        let first: Vec<String> = engine
            .apply(&records, &state)
            .iter()
            .map(|r| r.filename.clone())
            .collect();
        let second: Vec<String> = engine
            .apply(&records, &state)
            .iter()
            .map(|r| r.filename.clone())
            .collect();

        prop_assert_eq!(first, second);
    }

    /// "identified" normalizes to the named bucket and filters identically
    #[test]
    fn identified_is_alias_for_named(records in records_strategy()) {
        let engine = FilterEngine::new();

        let named = FilterState { category: None, bucket: Bucket::Named };
        let alias = FilterState {
            category: None,
            bucket: Bucket::normalize("identified"),
        };

        let a: Vec<&str> = engine
            .apply(&records, &named)
            .iter()
            .map(|r| r.filename.as_str())
            .collect();
        let b: Vec<&str> = engine
            .apply(&records, &alias)
            .iter()
            .map(|r| r.filename.as_str())
            .collect();

        prop_assert_eq!(a, b);
    }

    /// The compound filter is never larger than either dimension alone
    #[test]
    fn compound_filter_is_intersection_bound(
        records in records_strategy(),
        category in category_strategy(),
        bucket in bucket_strategy(),
    ) {
        let engine = FilterEngine::new();

        let both = engine
            .apply(&records, &FilterState { category, bucket })
            .len();
        let cat_only = engine
            .apply(&records, &FilterState { category, bucket: Bucket::All })
            .len();
        let bucket_only = engine
            .apply(&records, &FilterState { category: None, bucket })
            .len();

        prop_assert!(both <= cat_only);
        prop_assert!(both <= bucket_only);
    }

    /// Unidentified and named partition the records that pass the
    /// remaining predicates: no record is in both
    #[test]
    fn unidentified_and_named_are_disjoint(records in records_strategy()) {
        let engine = FilterEngine::new();

        let unid: Vec<&str> = engine
            .apply(&records, &FilterState { category: None, bucket: Bucket::Unidentified })
            .iter()
            .map(|r| r.filename.as_str())
            .collect();
        let named: Vec<&str> = engine
            .apply(&records, &FilterState { category: None, bucket: Bucket::Named })
            .iter()
            .map(|r| r.filename.as_str())
            .collect();

        for f in &unid {
            prop_assert!(!named.contains(f));
        }
    }
}

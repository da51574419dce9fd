//! Integration tests for Silograph

use std::path::Path;

use tempfile::tempdir;
use tokio::fs;

use silograph::bridge::SketchBridge;
use silograph::core::{Category, GalleryEngine};
use silograph::filter::Bucket;

/// Write a small but representative dataset to disk
async fn create_test_dataset(path: &Path) -> std::io::Result<()> {
    let json = r#"[
        {"title": "Unidentified woman", "objectType": "Silhouettes",
         "filename": "sil_001.jpg", "thumbnail": "https://ids.example.org/sil_001_t.jpg"},
        {"title": "Unidentified girl", "objectType": "Silhouettes",
         "filename": "sil_002.jpg", "date": "ca. 1840"},
        {"title": "General Andrew Jackson", "objectType": "Silhouettes",
         "filename": "sil_003.jpg", "indexed_topics": "Military"},
        {"title": "Dolley Madison", "objectType": "Silhouettes",
         "filename": "sil_004.jpg", "topic": "First Lady"},
        {"title": "Mr. Samuel Gridley", "objectType": "Silhouettes",
         "filename": "sil_005.jpg"},
        {"title": "Unidentified boy and his mother", "objectType": "Silhouettes",
         "filename": "sil_006.jpg"},
        {"title": "View of a harbor", "objectType": "Oil paintings",
         "filename": "not_a_sil.jpg"}
    ]"#;
    fs::write(path, json).await
}

#[tokio::test]
async fn test_full_gallery_workflow() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("dataset.json");
    create_test_dataset(&dataset).await.unwrap();

    let mut engine = GalleryEngine::load(&dataset).await.unwrap();

    // The oil painting is excluded from the silhouette subset
    assert_eq!(engine.catalog().len(), 7);
    assert_eq!(engine.catalog().silhouette_count(), 6);
    assert_eq!(engine.count_line(), "6 of 6 silhouettes");

    // Narrow by category: "boy and his mother" classifies as children
    // because the children rule outranks women
    engine.toggle_category(Category::Children);
    let visible: Vec<&str> = engine
        .visible()
        .iter()
        .map(|r| r.filename.as_str())
        .collect();
    assert_eq!(visible, vec!["sil_002.jpg", "sil_006.jpg"]);

    // Compound filter: children AND unidentified
    engine.set_bucket(Bucket::Unidentified);
    assert_eq!(engine.visible_count(), 2);

    // Clearing the category keeps the bucket
    engine.toggle_category(Category::Children);
    let visible: Vec<&str> = engine
        .visible()
        .iter()
        .map(|r| r.filename.as_str())
        .collect();
    assert_eq!(visible, vec!["sil_001.jpg", "sil_002.jpg", "sil_006.jpg"]);
}

#[tokio::test]
async fn test_bucket_scopes() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("dataset.json");
    create_test_dataset(&dataset).await.unwrap();

    let mut engine = GalleryEngine::load(&dataset).await.unwrap();

    // Military keywords match in the title and in indexed_topics
    engine.set_bucket(Bucket::Military);
    let visible: Vec<&str> = engine
        .visible()
        .iter()
        .map(|r| r.filename.as_str())
        .collect();
    assert_eq!(visible, vec!["sil_003.jpg"]);

    // "first lady" matches the politics word list too
    engine.set_bucket(Bucket::Politics);
    let visible: Vec<&str> = engine
        .visible()
        .iter()
        .map(|r| r.filename.as_str())
        .collect();
    assert_eq!(visible, vec!["sil_004.jpg"]);

    engine.set_bucket(Bucket::FirstLadies);
    assert_eq!(engine.visible_count(), 1);

    // Named = silhouette minus the unidentified prefix
    engine.set_bucket(Bucket::Named);
    assert_eq!(engine.visible_count(), 3);
}

#[tokio::test]
async fn test_selection_survives_only_visible_filters() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("dataset.json");
    create_test_dataset(&dataset).await.unwrap();

    let mut engine = GalleryEngine::load(&dataset).await.unwrap();

    engine.toggle_selection("sil_001.jpg").unwrap();
    engine.toggle_selection("sil_003.jpg").unwrap();
    assert_eq!(engine.selection().len(), 2);

    // sil_001 (women) stays visible under the women filter, sil_003 does not
    engine.toggle_category(Category::Women);
    assert_eq!(engine.selection().ids(), &["sil_001.jpg".to_string()]);

    // Selecting outside the visible set is refused
    assert!(engine.toggle_selection("sil_003.jpg").is_err());
    assert!(engine.toggle_selection("not_a_sil.jpg").is_err());
}

#[tokio::test]
async fn test_export_preserves_selection_order() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("dataset.json");
    create_test_dataset(&dataset).await.unwrap();

    let mut engine = GalleryEngine::load(&dataset).await.unwrap();

    // Select out of catalog order on purpose
    engine.toggle_selection("sil_005.jpg").unwrap();
    engine.toggle_selection("sil_001.jpg").unwrap();
    engine.toggle_selection("sil_003.jpg").unwrap();

    let bridge = SketchBridge::with_dir(&dir.path().join("cache"));
    let mut handshake = engine.export_selection(&bridge).unwrap();

    // The cache entry is on disk before any ready signal
    let raw = std::fs::read_to_string(bridge.cache().entry_path()).unwrap();
    let stored: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, vec!["sil_005.jpg", "sil_001.jpg", "sil_003.jpg"]);

    // Exactly one message, in selection order
    let message = handshake.consumer_ready().unwrap();
    assert_eq!(message.kind, "morphSelection");
    assert_eq!(message.payload, stored);
    assert!(handshake.consumer_ready().is_none());
}

#[tokio::test]
async fn test_carousel_over_selection() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("dataset.json");
    create_test_dataset(&dataset).await.unwrap();

    let mut engine = GalleryEngine::load(&dataset).await.unwrap();
    for f in [
        "sil_001.jpg",
        "sil_002.jpg",
        "sil_003.jpg",
        "sil_004.jpg",
        "sil_005.jpg",
    ] {
        engine.toggle_selection(f).unwrap();
    }

    let mut carousel = engine.open_carousel(Path::new("outlines"), "png");
    assert_eq!(carousel.len(), 5);
    assert_eq!(carousel.window().len(), 3);
    assert_eq!(
        carousel.window()[0].overlay.as_deref(),
        Some(Path::new("outlines/sil_001.jpg.png"))
    );

    // Five slides: the second page starts at 2 so the last three are shown
    carousel.next();
    assert_eq!(carousel.index(), 2);
    assert!(!carousel.has_next());

    carousel.prev();
    assert_eq!(carousel.index(), 0);
}

#[tokio::test]
async fn test_malformed_dataset_is_terminal() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("dataset.json");
    fs::write(&dataset, "{not json").await.unwrap();

    assert!(GalleryEngine::load(&dataset).await.is_err());
}

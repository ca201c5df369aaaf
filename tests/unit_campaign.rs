// Unit tests for campaign metadata.
//
// Covers copy isolation of the store, the serialized key set, loading an
// override file, and the display-vs-classifier taxonomy report.

use std::path::PathBuf;

use kefir_topics::campaign::{CampaignMetadata, CampaignStore};
use kefir_topics::classifier::Topic;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "kefir-topics-{}-{}.json",
        name,
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

// ============================================================
// Accessor: independent copies
// ============================================================

#[test]
fn mutating_returned_metadata_does_not_leak() {
    let store = CampaignStore::default();

    let mut first = store.metadata();
    first.campaign_name = "Otra campaña".to_string();
    first.categories.clear();
    first.categories.push("Nada".to_string());

    let second = store.metadata();
    assert_eq!(second.campaign_name, "Alpina - Kéfir");
    assert_eq!(second.categories.len(), 7);
    assert_eq!(second, CampaignMetadata::kefir_alpina());
}

#[test]
fn serialized_keys_match_contract() {
    let value = serde_json::to_value(CampaignStore::default().metadata()).unwrap();
    let obj = value.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["campaign_name", "categories", "last_updated", "product", "version"]
    );
    assert_eq!(value["last_updated"], "2025-11-20");
    assert_eq!(value["categories"][0], "Preguntas sobre el Producto");
}

// ============================================================
// Loading from config
// ============================================================

#[test]
fn store_without_path_uses_builtin() {
    let store = CampaignStore::from_config(None).unwrap();
    assert_eq!(store.metadata(), CampaignMetadata::kefir_alpina());
}

#[test]
fn store_loads_override_file() {
    let path = temp_file(
        "override",
        r#"{
            "campaign_name": "Alpina - Kéfir Fresa",
            "product": "Kéfir Alpina Fresa",
            "categories": ["Precio y Valor Percibido", "Otros"],
            "version": "1.1",
            "last_updated": "2026-01-15"
        }"#,
    );

    let store = CampaignStore::from_config(Some(path.as_path())).unwrap();
    let meta = store.metadata();
    assert_eq!(meta.product, "Kéfir Alpina Fresa");
    assert_eq!(meta.version, "1.1");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn malformed_date_is_rejected() {
    let path = temp_file(
        "bad-date",
        r#"{"campaign_name": "x", "product": "y", "categories": ["Otros"],
            "version": "1", "last_updated": "ayer"}"#,
    );
    assert!(CampaignMetadata::from_json_file(&path).is_err());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_categories_are_rejected() {
    let path = temp_file(
        "no-categories",
        r#"{"campaign_name": "x", "product": "y", "categories": [],
            "version": "1", "last_updated": "2025-11-20"}"#,
    );
    assert!(CampaignMetadata::from_json_file(&path).is_err());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_is_an_error() {
    let path = std::env::temp_dir().join("kefir-topics-does-not-exist.json");
    assert!(CampaignStore::from_config(Some(path.as_path())).is_err());
}

// ============================================================
// Taxonomy mismatch: reported, never reconciled
// ============================================================

#[test]
fn builtin_taxonomy_mismatch_lists_both_sides() {
    let meta = CampaignMetadata::kefir_alpina();
    let mismatch = meta.taxonomy_mismatch();

    assert_eq!(
        mismatch.display_only,
        vec![
            "Preguntas sobre el Producto",
            "Ingredientes y Salud",
            "Competencia y Disponibilidad",
            "Opinión General del Producto",
            "Fuera de Tema / No Relevante",
        ]
    );
    assert_eq!(mismatch.classifier_only.len(), 9);
    assert!(!mismatch.classifier_only.contains(&Topic::HomemadeKefir));
    assert!(!mismatch.classifier_only.contains(&Topic::Other));

    // Reporting leaves the record untouched
    assert_eq!(meta.categories.len(), 7);
}

#[test]
fn matching_taxonomy_has_no_mismatch() {
    let meta = CampaignMetadata {
        categories: Topic::ALL.iter().map(|t| t.label().to_string()).collect(),
        ..CampaignMetadata::kefir_alpina()
    };
    assert!(meta.taxonomy_mismatch().is_empty());
}

// Campaign metadata: descriptive, read-only information about the campaign.
//
// The classifier never consults this. It exists for reporting layers that
// want the campaign name, product and display taxonomy next to the topic
// counts. The display categories are a separate, shorter list than the
// classifier's labels; taxonomy_mismatch() reports the gap without trying
// to reconcile it.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classifier::Topic;

/// Format of `last_updated`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Descriptive record for one campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignMetadata {
    pub campaign_name: String,
    pub product: String,
    /// Display-oriented category names, in presentation order
    pub categories: Vec<String>,
    pub version: String,
    /// Last revision of the campaign taxonomy, as YYYY-MM-DD
    pub last_updated: String,
}

/// Labels that appear on only one side of the display/classifier taxonomies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonomyMismatch {
    /// Display categories the classifier never produces
    pub display_only: Vec<String>,
    /// Classifier topics missing from the display categories
    pub classifier_only: Vec<Topic>,
}

impl TaxonomyMismatch {
    pub fn is_empty(&self) -> bool {
        self.display_only.is_empty() && self.classifier_only.is_empty()
    }
}

impl CampaignMetadata {
    /// The built-in record for the Alpina kéfir campaign.
    pub fn kefir_alpina() -> Self {
        Self {
            campaign_name: "Alpina - Kéfir".to_string(),
            product: "Kéfir Alpina".to_string(),
            categories: [
                "Preguntas sobre el Producto",
                "Comparación con Kéfir Casero/Artesanal",
                "Ingredientes y Salud",
                "Competencia y Disponibilidad",
                "Opinión General del Producto",
                "Fuera de Tema / No Relevante",
                "Otros",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            version: "1.0".to_string(),
            last_updated: "2025-11-20".to_string(),
        }
    }

    /// Load a record from a JSON file with the same keys as the serialized form.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read campaign metadata from {}", path.display()))?;
        let metadata: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid campaign metadata in {}", path.display()))?;

        // last_updated must parse as a date
        metadata.last_updated_date()?;

        if metadata.categories.is_empty() {
            anyhow::bail!(
                "Campaign metadata in {} lists no categories",
                path.display()
            );
        }

        Ok(metadata)
    }

    /// Parse `last_updated` as a calendar date.
    pub fn last_updated_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.last_updated, DATE_FORMAT).with_context(|| {
            format!(
                "last_updated must be YYYY-MM-DD, got {:?}",
                self.last_updated
            )
        })
    }

    /// Compare the display categories with the classifier's actual labels.
    pub fn taxonomy_mismatch(&self) -> TaxonomyMismatch {
        let display_only = self
            .categories
            .iter()
            .filter(|c| Topic::from_label(c).is_none())
            .cloned()
            .collect();

        let classifier_only = Topic::ALL
            .into_iter()
            .filter(|t| !self.categories.iter().any(|c| c == t.label()))
            .collect();

        TaxonomyMismatch {
            display_only,
            classifier_only,
        }
    }
}

/// Holds the active campaign record and hands out independent copies.
#[derive(Debug)]
pub struct CampaignStore {
    metadata: CampaignMetadata,
}

impl CampaignStore {
    pub fn new(metadata: CampaignMetadata) -> Self {
        Self { metadata }
    }

    /// Use the metadata file from config when set, the built-in record otherwise.
    pub fn from_config(metadata_path: Option<&Path>) -> Result<Self> {
        let metadata = match metadata_path {
            Some(path) => {
                let metadata = CampaignMetadata::from_json_file(path)?;
                info!(
                    path = %path.display(),
                    campaign = %metadata.campaign_name,
                    "Loaded campaign metadata override"
                );
                metadata
            }
            None => CampaignMetadata::kefir_alpina(),
        };
        Ok(Self::new(metadata))
    }

    /// A deep copy of the campaign record. Mutating it never affects the store.
    pub fn metadata(&self) -> CampaignMetadata {
        self.metadata.clone()
    }
}

impl Default for CampaignStore {
    fn default() -> Self {
        Self::new(CampaignMetadata::kefir_alpina())
    }
}

// Topic: the fixed output taxonomy of the classifier.
//
// The variants are declared in cascade order. The label strings are the
// exact Spanish names the campaign reports on, so they are what gets
// serialized and displayed.

use serde::{Deserialize, Serialize};

/// One of the eleven topics a comment can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "Comparación con Kéfir Casero/Artesanal")]
    HomemadeKefir,
    #[serde(rename = "Precio y Valor Percibido")]
    Price,
    #[serde(rename = "Ingredientes y Composición")]
    Ingredients,
    #[serde(rename = "Beneficios de Salud y Experiencias")]
    HealthBenefits,
    #[serde(rename = "Sabor y Experiencia de Consumo")]
    Taste,
    #[serde(rename = "Competencia y Marcas Alternativas")]
    Competitors,
    #[serde(rename = "Disponibilidad y Distribución")]
    Availability,
    #[serde(rename = "Recetas y Usos")]
    Recipes,
    #[serde(rename = "Comentarios sobre la Publicidad")]
    Advertising,
    #[serde(rename = "Fuera de Tema / Solo Emojis")]
    OffTopic,
    #[serde(rename = "Otros")]
    Other,
}

impl Topic {
    /// Every topic, in the order the cascade considers them.
    pub const ALL: [Topic; 11] = [
        Topic::HomemadeKefir,
        Topic::Price,
        Topic::Ingredients,
        Topic::HealthBenefits,
        Topic::Taste,
        Topic::Competitors,
        Topic::Availability,
        Topic::Recipes,
        Topic::Advertising,
        Topic::OffTopic,
        Topic::Other,
    ];

    /// The label reported to campaign analysts.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::HomemadeKefir => "Comparación con Kéfir Casero/Artesanal",
            Topic::Price => "Precio y Valor Percibido",
            Topic::Ingredients => "Ingredientes y Composición",
            Topic::HealthBenefits => "Beneficios de Salud y Experiencias",
            Topic::Taste => "Sabor y Experiencia de Consumo",
            Topic::Competitors => "Competencia y Marcas Alternativas",
            Topic::Availability => "Disponibilidad y Distribución",
            Topic::Recipes => "Recetas y Usos",
            Topic::Advertising => "Comentarios sobre la Publicidad",
            Topic::OffTopic => "Fuera de Tema / Solo Emojis",
            Topic::Other => "Otros",
        }
    }

    /// Priority rank (1 = checked first, 11 = catch-all).
    pub fn rank(&self) -> u8 {
        match self {
            Topic::HomemadeKefir => 1,
            Topic::Price => 2,
            Topic::Ingredients => 3,
            Topic::HealthBenefits => 4,
            Topic::Taste => 5,
            Topic::Competitors => 6,
            Topic::Availability => 7,
            Topic::Recipes => 8,
            Topic::Advertising => 9,
            Topic::OffTopic => 10,
            Topic::Other => 11,
        }
    }

    /// Look a topic up by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Topic::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

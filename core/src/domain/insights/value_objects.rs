use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::label_analysis::entities::IngredientStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum IngredientCategory {
    Sweetener,
    #[serde(rename = "Fat/Oil")]
    FatOil,
    Sodium,
    Preservative,
    #[serde(rename = "Artificial Color")]
    ArtificialColor,
    Flavoring,
    Protein,
    #[serde(rename = "Fiber/Thickener")]
    FiberThickener,
    Nutrient,
    Other,
}

impl IngredientCategory {
    pub fn label(&self) -> &'static str {
        match self {
            IngredientCategory::Sweetener => "Sweetener",
            IngredientCategory::FatOil => "Fat/Oil",
            IngredientCategory::Sodium => "Sodium",
            IngredientCategory::Preservative => "Preservative",
            IngredientCategory::ArtificialColor => "Artificial Color",
            IngredientCategory::Flavoring => "Flavoring",
            IngredientCategory::Protein => "Protein",
            IngredientCategory::FiberThickener => "Fiber/Thickener",
            IngredientCategory::Nutrient => "Nutrient",
            IngredientCategory::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            IngredientCategory::Sweetener => "🍯",
            IngredientCategory::FatOil => "🧈",
            IngredientCategory::Sodium => "🧂",
            IngredientCategory::Preservative => "🧪",
            IngredientCategory::ArtificialColor => "🎨",
            IngredientCategory::Flavoring => "🌿",
            IngredientCategory::Protein => "💪",
            IngredientCategory::FiberThickener => "🌾",
            IngredientCategory::Nutrient => "💊",
            IngredientCategory::Other => "🔍",
        }
    }

    /// Health concern the category is judged on.
    pub fn concern(&self) -> &'static str {
        match self {
            IngredientCategory::Sweetener => "Blood Sugar Impact",
            IngredientCategory::FatOil => "Fat Quality",
            IngredientCategory::Sodium => "Blood Pressure",
            IngredientCategory::Preservative => "Chemical Load",
            IngredientCategory::ArtificialColor => "Behavioral Effects",
            IngredientCategory::Flavoring => "Artificial vs Natural",
            IngredientCategory::Protein => "Protein Quality",
            IngredientCategory::FiberThickener => "Digestive Impact",
            IngredientCategory::Nutrient => "Bioavailability",
            IngredientCategory::Other => "Processing Level",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcessingLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct StatusTally {
    pub good: usize,
    pub moderate: usize,
    pub bad: usize,
}

impl StatusTally {
    pub fn total(&self) -> usize {
        self.good + self.moderate + self.bad
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ScoreLabel {
    Excellent,
    Good,
    Fair,
    Poor,
    Terrible,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientInsight {
    pub name: String,
    pub status: IngredientStatus,
    pub status_emoji: String,
    pub category: IngredientCategory,
    pub icon: String,
    pub concern: String,
    pub processing_level: ProcessingLevel,
}

/// Locally derived commentary over a validated analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LabelInsights {
    pub score: u8,
    pub score_label: ScoreLabel,
    pub tally: StatusTally,
    pub ingredients: Vec<IngredientInsight>,
    pub nutritional: String,
    pub macro_profile: String,
    pub bioavailability: String,
    pub blood_sugar: String,
}

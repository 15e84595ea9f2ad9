use crate::domain::{
    insights::value_objects::{
        IngredientCategory, IngredientInsight, LabelInsights, ProcessingLevel, ScoreLabel,
        StatusTally,
    },
    label_analysis::entities::{IngredientAnalysis, IngredientStatus, LabelAnalysis},
};

// Ordered, first match wins.
const CATEGORY_KEYWORDS: &[(IngredientCategory, &[&str])] = &[
    (
        IngredientCategory::Sweetener,
        &["sugar", "syrup", "fructose", "glucose", "dextrose"],
    ),
    (IngredientCategory::FatOil, &["oil", "fat", "butter"]),
    (IngredientCategory::Sodium, &["sodium", "salt"]),
    (
        IngredientCategory::Preservative,
        &["preservative", "acid", "benzoate", "sulfite"],
    ),
    (
        IngredientCategory::ArtificialColor,
        &["color", "dye", "red", "yellow", "blue"],
    ),
    (IngredientCategory::Flavoring, &["flavor", "essence"]),
    (
        IngredientCategory::Protein,
        &["protein", "isolate", "concentrate"],
    ),
    (
        IngredientCategory::FiberThickener,
        &["fiber", "cellulose", "gum"],
    ),
    (
        IngredientCategory::Nutrient,
        &["vitamin", "mineral", "iron", "calcium"],
    ),
];

const HIGH_PROCESSING: &[&str] = &["hydrogenated", "modified", "isolate", "hydrolyzed"];
const MEDIUM_PROCESSING: &[&str] = &["concentrate", "extract", "powder"];

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    let name = name.to_lowercase();
    keywords.iter().any(|keyword| name.contains(keyword))
}

fn count_matching(ingredients: &[IngredientAnalysis], keywords: &[&str]) -> usize {
    ingredients
        .iter()
        .filter(|ingredient| contains_any(&ingredient.name, keywords))
        .count()
}

fn mostly_bad(ingredients: &[IngredientAnalysis]) -> bool {
    let bad = ingredients
        .iter()
        .filter(|ingredient| ingredient.status == IngredientStatus::Bad)
        .count();
    // bad > len / 2 without float division
    bad * 2 > ingredients.len()
}

pub fn classify_ingredient(name: &str) -> IngredientCategory {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(name, keywords))
        .map(|(category, _)| *category)
        .unwrap_or(IngredientCategory::Other)
}

pub fn processing_level(name: &str) -> ProcessingLevel {
    if contains_any(name, HIGH_PROCESSING) {
        ProcessingLevel::High
    } else if contains_any(name, MEDIUM_PROCESSING) {
        ProcessingLevel::Medium
    } else {
        ProcessingLevel::Low
    }
}

pub fn score_label(score: u8) -> ScoreLabel {
    match score {
        80.. => ScoreLabel::Excellent,
        70..=79 => ScoreLabel::Good,
        60..=69 => ScoreLabel::Fair,
        40..=59 => ScoreLabel::Poor,
        _ => ScoreLabel::Terrible,
    }
}

pub fn status_emoji(status: IngredientStatus) -> &'static str {
    match status {
        IngredientStatus::Good => "✅",
        IngredientStatus::Moderate => "⚠️",
        IngredientStatus::Bad => "❌",
    }
}

pub fn tally_statuses(ingredients: &[IngredientAnalysis]) -> StatusTally {
    ingredients
        .iter()
        .fold(StatusTally::default(), |mut tally, ingredient| {
            match ingredient.status {
                IngredientStatus::Good => tally.good += 1,
                IngredientStatus::Moderate => tally.moderate += 1,
                IngredientStatus::Bad => tally.bad += 1,
            }
            tally
        })
}

pub fn nutritional_insight(ingredients: &[IngredientAnalysis]) -> &'static str {
    if mostly_bad(ingredients) {
        "This product is heavily processed and contains a significant number of ingredients flagged as 'bad'. It's recommended to seek healthier alternatives."
    } else if count_matching(ingredients, &["sugar", "syrup"]) > 2 {
        "This product contains a high amount of sugar. Consuming it regularly may lead to blood sugar spikes and other health issues."
    } else if count_matching(ingredients, &["oil"]) > 1 {
        "This product contains multiple sources of oils. Consider the quality and source of these oils for your health."
    } else if count_matching(ingredients, &["sodium", "salt"]) > 1 {
        "This product contains a high amount of sodium. Consuming it regularly may lead to blood pressure spikes and other health issues."
    } else if count_matching(ingredients, &["preservative"]) > 1 {
        "This product contains multiple preservatives. Limit your intake of products with high levels of preservatives."
    } else if count_matching(ingredients, &["color", "dye"]) > 1 {
        "This product contains artificial colors. Limit your intake of products with artificial colors."
    } else {
        "This product has a relatively balanced ingredient profile. However, it is still recommended to consume it in moderation as part of a balanced diet."
    }
}

pub fn macro_profile_insight(ingredients: &[IngredientAnalysis]) -> &'static str {
    if mostly_bad(ingredients) {
        "Listen up! This macro profile is a hot mess. You've got more processed junk than a gas station convenience store. This ain't food, it's a chemistry experiment gone wrong. Your body deserves better than this industrial waste."
    } else if count_matching(ingredients, &["sugar", "syrup"]) > 2 {
        "Sugar city over here! This thing's got more sweeteners than a candy factory. Your blood sugar's about to ride a roller coaster that would make Six Flags jealous. Not exactly what I'd call balanced nutrition."
    } else if count_matching(ingredients, &["oil"]) > 1 {
        "Oil spill alert! These industrial oils are about as healthy as drinking motor oil. Your arteries are gonna stage a protest if you keep this up. Where are the real fats? Where's the grass-fed goodness?"
    } else {
        "Not terrible, but we're still playing in processed food territory. This macro profile screams 'I was made in a factory, not a kitchen.' Could be worse, could definitely be better."
    }
}

pub fn bioavailability_insight(ingredients: &[IngredientAnalysis]) -> &'static str {
    let synthetic_vitamins = ingredients.iter().any(|ingredient| {
        ingredient.status == IngredientStatus::Bad && contains_any(&ingredient.name, &["vitamin"])
    });

    if count_matching(ingredients, &["isolate", "concentrate", "modified"]) > 2 {
        "Bioavailability? More like bio-unavailability! These processed proteins and isolates are about as useful to your body as a screen door on a submarine. Your body doesn't know what to do with this lab-created nonsense."
    } else if synthetic_vitamins {
        "Synthetic vitamins? Please! Your body can't tell the difference between real nutrients and these chemical copycats... except it totally can, and it's not impressed. This stuff has the bioavailability of cardboard."
    } else {
        "The nutrient absorption here is questionable at best. Processing destroys most of the good stuff, leaving you with expensive pee and disappointed cells. Your ancestors would be confused by this 'food.'"
    }
}

pub fn blood_sugar_insight(ingredients: &[IngredientAnalysis]) -> &'static str {
    let sugars = count_matching(ingredients, &["sugar", "syrup", "fructose", "dextrose"]);

    if sugars > 2 {
        "Blood sugar impact? Think rocket ship to Mars! This sugar bomb is gonna send your glucose levels on a wild ride that ends in a crash landing. Your pancreas is about to file a complaint with HR."
    } else if count_matching(ingredients, &["flour", "starch"]) > 1 {
        "These refined carbs hit your bloodstream faster than bad news travels. One minute you're flying high, next minute you're face-first in the couch wondering why you feel like garbage. Classic processed food betrayal."
    } else if sugars > 0 {
        "Moderate sugar rush incoming! Not the worst I've seen, but your blood sugar's still gonna do a little cha-cha. At least it's not a full-blown metabolic meltdown, I guess."
    } else {
        "Blood sugar impact seems relatively stable here. No major sugar bombs detected, though that doesn't mean this is health food. Just means you won't crash as hard as usual."
    }
}

impl IngredientInsight {
    pub fn from_ingredient(ingredient: &IngredientAnalysis) -> Self {
        let category = classify_ingredient(&ingredient.name);

        Self {
            name: ingredient.name.clone(),
            status: ingredient.status,
            status_emoji: status_emoji(ingredient.status).to_string(),
            category,
            icon: category.icon().to_string(),
            concern: category.concern().to_string(),
            processing_level: processing_level(&ingredient.name),
        }
    }
}

impl LabelInsights {
    pub fn from_analysis(analysis: &LabelAnalysis) -> Self {
        let ingredients = &analysis.ingredients;

        Self {
            score: analysis.score,
            score_label: score_label(analysis.score),
            tally: tally_statuses(ingredients),
            ingredients: ingredients.iter().map(IngredientInsight::from_ingredient).collect(),
            nutritional: nutritional_insight(ingredients).to_string(),
            macro_profile: macro_profile_insight(ingredients).to_string(),
            bioavailability: bioavailability_insight(ingredients).to_string(),
            blood_sugar: blood_sugar_insight(ingredients).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, status: IngredientStatus) -> IngredientAnalysis {
        IngredientAnalysis {
            name: name.to_string(),
            status,
            reason: String::new(),
        }
    }

    #[test]
    fn test_classify_ingredient() {
        assert_eq!(
            classify_ingredient("High Fructose Corn Syrup"),
            IngredientCategory::Sweetener
        );
        assert_eq!(classify_ingredient("Red 40"), IngredientCategory::ArtificialColor);
        assert_eq!(classify_ingredient("Xanthan Gum"), IngredientCategory::FiberThickener);
        assert_eq!(classify_ingredient("Canola Oil"), IngredientCategory::FatOil);
        assert_eq!(classify_ingredient("Whey Protein Isolate"), IngredientCategory::Protein);
        assert_eq!(classify_ingredient("Water"), IngredientCategory::Other);
        assert_eq!(IngredientCategory::Other.icon(), "🔍");
    }

    #[test]
    fn test_classify_respects_order() {
        // "salt" and "acid" both match, sodium comes first
        assert_eq!(classify_ingredient("Citric Acid Salt"), IngredientCategory::Sodium);
    }

    #[test]
    fn test_processing_level() {
        assert_eq!(
            processing_level("Partially Hydrogenated Soybean Oil"),
            ProcessingLevel::High
        );
        assert_eq!(processing_level("Tomato Paste Concentrate"), ProcessingLevel::Medium);
        assert_eq!(processing_level("Whey Protein Isolate Concentrate"), ProcessingLevel::High);
        assert_eq!(processing_level("Oats"), ProcessingLevel::Low);
    }

    #[test]
    fn test_score_label_thresholds() {
        assert_eq!(score_label(100), ScoreLabel::Excellent);
        assert_eq!(score_label(80), ScoreLabel::Excellent);
        assert_eq!(score_label(79), ScoreLabel::Good);
        assert_eq!(score_label(60), ScoreLabel::Fair);
        assert_eq!(score_label(40), ScoreLabel::Poor);
        assert_eq!(score_label(39), ScoreLabel::Terrible);
        assert_eq!(score_label(0), ScoreLabel::Terrible);
    }

    #[test]
    fn test_empty_list_uses_defaults() {
        assert!(nutritional_insight(&[]).starts_with("This product has a relatively balanced"));
        assert!(macro_profile_insight(&[]).starts_with("Not terrible"));
        assert!(bioavailability_insight(&[]).starts_with("The nutrient absorption"));
        assert!(blood_sugar_insight(&[]).starts_with("Blood sugar impact seems"));
    }

    #[test]
    fn test_mostly_bad_takes_precedence() {
        let ingredients = vec![
            ingredient("Sugar", IngredientStatus::Bad),
            ingredient("Corn Syrup", IngredientStatus::Bad),
            ingredient("Water", IngredientStatus::Good),
        ];
        assert!(nutritional_insight(&ingredients).starts_with("This product is heavily processed"));
        assert!(macro_profile_insight(&ingredients).starts_with("Listen up!"));
        assert!(blood_sugar_insight(&ingredients).starts_with("Moderate sugar rush"));
    }

    #[test]
    fn test_sugar_heavy_profile() {
        let ingredients = vec![
            ingredient("Sugar", IngredientStatus::Moderate),
            ingredient("Corn Syrup", IngredientStatus::Bad),
            ingredient("Brown Sugar", IngredientStatus::Moderate),
            ingredient("Oats", IngredientStatus::Good),
        ];
        assert!(nutritional_insight(&ingredients).contains("high amount of sugar"));
        assert!(macro_profile_insight(&ingredients).starts_with("Sugar city"));
        assert!(blood_sugar_insight(&ingredients).starts_with("Blood sugar impact? Think rocket"));
    }

    #[test]
    fn test_refined_carbs_and_synthetic_vitamins() {
        let ingredients = vec![
            ingredient("Enriched Wheat Flour", IngredientStatus::Moderate),
            ingredient("Corn Starch", IngredientStatus::Moderate),
            ingredient("Vitamin D2", IngredientStatus::Bad),
        ];
        assert!(blood_sugar_insight(&ingredients).starts_with("These refined carbs"));
        assert!(bioavailability_insight(&ingredients).starts_with("Synthetic vitamins?"));
    }

    #[test]
    fn test_label_insights_from_analysis() {
        let analysis = LabelAnalysis {
            product_name: "Fruit Snacks".to_string(),
            score: 22,
            ingredients: vec![
                ingredient("Corn Syrup", IngredientStatus::Bad),
                ingredient("Red 40", IngredientStatus::Bad),
                ingredient("Pectin", IngredientStatus::Moderate),
                ingredient("Apple Juice Concentrate", IngredientStatus::Good),
            ],
            summary: String::new(),
            roast_comment: String::new(),
        };

        let insights = LabelInsights::from_analysis(&analysis);

        assert_eq!(insights.score_label, ScoreLabel::Terrible);
        assert_eq!(
            insights.tally,
            StatusTally {
                good: 1,
                moderate: 1,
                bad: 2
            }
        );
        assert_eq!(insights.tally.total(), 4);
        assert_eq!(insights.ingredients[1].category, IngredientCategory::ArtificialColor);
        assert_eq!(insights.ingredients[1].status_emoji, "❌");
        assert_eq!(insights.ingredients[3].processing_level, ProcessingLevel::Medium);
        assert!(insights.nutritional.starts_with("This product has a relatively balanced"));
    }
}

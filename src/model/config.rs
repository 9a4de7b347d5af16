use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from tally.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Supplier label printed in the report header
    #[serde(default = "default_supplier")]
    pub supplier: String,
    #[serde(default = "default_locations")]
    pub locations: Vec<LocationConfig>,
    /// The fixed unit set, first entry is the edit dialog default
    #[serde(default = "default_units")]
    pub units: Vec<String>,
    /// Catalog sections in display and report order
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionConfig>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            supplier: default_supplier(),
            locations: default_locations(),
            units: default_units(),
            sections: default_sections(),
            ui: UiConfig::default(),
        }
    }
}

fn default_supplier() -> String {
    "US Foods".to_string()
}

fn default_locations() -> Vec<LocationConfig> {
    vec![
        LocationConfig {
            id: "foodtruck".to_string(),
            name: "Food Truck".to_string(),
        },
        LocationConfig {
            id: "cr".to_string(),
            name: "CR".to_string(),
        },
    ]
}

fn default_units() -> Vec<String> {
    [
        "case",
        "sheets",
        "heads",
        "lbs",
        "qts",
        "packs",
        "dozen",
        "G",
        "st",
        "container",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_sections() -> Vec<SectionConfig> {
    let section = |title: &str, items: &[&str]| SectionConfig {
        title: title.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    };
    vec![
        section(
            "Meat & Breads",
            &[
                "Chorizo",
                "Hot Dogs",
                "Chx Sausage",
                "GF Buns",
                "Buns",
                "Hot Dog Buns",
                "Biscuits",
                "Racer",
                "Veggie patties",
            ],
        ),
        section(
            "Produce",
            &[
                "Tomatoes",
                "Lettuce",
                "Red Onion",
                "Yellow Onion",
                "Peppers",
                "Whole Eggs",
                "Avos",
                "Cilantro",
                "Limes",
                "Plantain",
            ],
        ),
        section(
            "Dairy & Misc",
            &["Crm Chz", "Sour cream", "Unsalted Butter", "Jalps"],
        ),
    ]
}

use crate::model::config::AppConfig;

impl AppConfig {
    /// Iterate all catalog item names in section order
    pub fn catalog_items(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter().map(String::as_str))
    }

    pub fn contains_item(&self, name: &str) -> bool {
        self.catalog_items().any(|item| item == name)
    }

    pub fn contains_unit(&self, unit: &str) -> bool {
        self.units.iter().any(|u| u == unit)
    }

    /// Default unit for a fresh edit dialog (first configured unit)
    pub fn default_unit(&self) -> &str {
        self.units.first().map(String::as_str).unwrap_or("case")
    }

    pub fn contains_location(&self, id: &str) -> bool {
        self.locations.iter().any(|l| l.id == id)
    }

    /// Get the display name for a location by its ID
    pub fn location_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.locations
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.name.as_str())
            .unwrap_or(id)
    }

    /// First configured location, used when no --location is given
    pub fn default_location(&self) -> Option<&str> {
        self.locations.first().map(|l| l.id.as_str())
    }
}

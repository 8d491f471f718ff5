use serde::{Deserialize, Serialize};

/// Позиции проката в порядке, в котором их показывает форма заказа
pub const DEFAULT_ITEMS: [&str; 40] = [
    "100kgs",
    "80kgs",
    "70kgs",
    "60kgs",
    "50kgs",
    "40kgs",
    "30kgs",
    "20kgs",
    "10kgs",
    "5kgs",
    "అల్యూమినియం జల్లి బుట్టలు",
    "లగన్",
    "హ్యాండ్ లెస్ కుర్చీలు",
    "బల్లలు",
    "టెంట్లు 36X36",
    "టెంట్లు 18x36",
    "టెంట్లు 15x30",
    "టెంట్లు 12x24",
    "టెంట్లు 9x18",
    "సైడ్ వాల్స్",
    "కార్పెట్స్",
    "డబుల్ గ్యాస్ పొయ్యిలు",
    "కాడ గిన్నెలు",
    "ట్రబ్బులు",
    "బకెట్స్",
    "బేసిన్లు",
    "జగ్గులు",
    "కొబ్బరి తురుము",
    "కురిఫీలు",
    "డ్రమ్ములు",
    "జిల్లి గంటెలు",
    "ఇనువ పొయ్యిలు",
    "ఇనుప గంటెలు",
    "సాంబారు గంటెలు",
    "కూర గంటెలు",
    "హస్తాలు",
    "కర్రలు",
    "ఇనుప పైపులు",
    "మేకులు",
    "టీ ప్లాస్కో",
];

/// Фиксированный каталог позиций.
///
/// Built once from configuration and handed to the form; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<String>,
}

impl Catalog {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Пустые и повторяющиеся названия недопустимы
    pub fn validate(&self) -> Result<(), String> {
        if self.items.is_empty() {
            return Err("catalog has no items".into());
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.trim().is_empty() {
                return Err(format!("catalog item #{} has an empty name", index + 1));
            }
            if self.items[..index].contains(item) {
                return Err(format!("catalog item '{}' is listed twice", item));
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert_eq!(catalog.items().len(), 40);
        assert_eq!(catalog.items()[0], "100kgs");
        assert!(catalog.items().iter().any(|item| item == "టీ ప్లాస్కో"));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        assert!(Catalog::new(Vec::<String>::new()).validate().is_err());
        assert!(Catalog::new(["Tent", "  "]).validate().is_err());
        let err = Catalog::new(["Tent", "Chair", "Tent"]).validate().unwrap_err();
        assert!(err.contains("Tent"));
    }
}

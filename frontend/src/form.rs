use shared::{FeatureName, TransactionRecord, required_features};
use std::collections::BTreeMap;

/// Raw text of every input box, keyed by feature.
#[derive(Default, Clone, PartialEq)]
pub struct FormInputs {
    values: BTreeMap<FeatureName, String>,
}

impl FormInputs {
    pub fn set(&mut self, feature: FeatureName, value: String) {
        self.values.insert(feature, value);
    }

    pub fn get(&self, feature: FeatureName) -> &str {
        self.values.get(&feature).map(String::as_str).unwrap_or("")
    }

    /// Fields that are blank or not a number are left out, so the server
    /// reports them as missing.
    pub fn to_record(&self) -> TransactionRecord {
        required_features()
            .filter_map(|feature| {
                self.get(feature)
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .map(|value| (feature.name().to_string(), value))
            })
            .collect()
    }
}

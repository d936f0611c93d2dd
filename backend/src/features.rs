use serde_json::{Map, Value};
use shared::{FEATURE_COUNT, FeatureName, required_features};

#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    #[error("Missing features: {}", .0.join(", "))]
    Missing(Vec<String>),
    #[error("could not convert value of '{feature}' to float: {value}")]
    NotNumeric { feature: FeatureName, value: String },
}

/// Selects the required features from a request body in model column order.
///
/// Keys outside the required set are ignored. A body that is not a JSON
/// object is treated as a record with no features at all.
pub fn feature_vector(body: &Value) -> Result<Vec<f64>, FeatureError> {
    let empty = Map::new();
    let record = body.as_object().unwrap_or(&empty);

    let missing: Vec<String> = required_features()
        .filter(|feature| !record.contains_key(feature.name()))
        .map(|feature| feature.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(FeatureError::Missing(missing));
    }

    let mut row = Vec::with_capacity(FEATURE_COUNT);
    for feature in required_features() {
        let value = &record[feature.name()];
        let number = numeric_value(value).ok_or_else(|| FeatureError::NotNumeric {
            feature,
            value: value.to_string(),
        })?;
        row.push(number);
    }
    Ok(row)
}

// Numeric strings and booleans coerce to floats; null and containers do not.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> Value {
        let mut record = Map::new();
        for feature in required_features() {
            record.insert(feature.to_string(), json!(feature.index() as f64));
        }
        Value::Object(record)
    }

    #[test]
    fn orders_values_by_required_list() {
        let row = feature_vector(&full_record()).unwrap();
        assert_eq!(row.len(), FEATURE_COUNT);
        assert_eq!(row[0], 0.0);
        assert_eq!(row[FeatureName::Amount.index()], 28.0);
        assert_eq!(row[FeatureName::Time.index()], 29.0);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let mut record = full_record();
        record["merchant"] = json!("acme");
        record["V29"] = json!(1.0);
        assert_eq!(feature_vector(&record).unwrap().len(), FEATURE_COUNT);
    }

    #[test]
    fn missing_keys_are_listed_in_required_order() {
        let mut record = full_record();
        let map = record.as_object_mut().unwrap();
        map.remove("Time");
        map.remove("V3");
        map.remove("Amount");
        let err = feature_vector(&record).unwrap_err();
        assert_eq!(err.to_string(), "Missing features: V3, Amount, Time");
    }

    #[test]
    fn single_key_reports_the_other_twenty_nine() {
        let err = feature_vector(&json!({"V1": 0.1})).unwrap_err();
        match err {
            FeatureError::Missing(missing) => {
                assert_eq!(missing.len(), 29);
                assert_eq!(missing.first().map(String::as_str), Some("V2"));
                assert_eq!(missing.last().map(String::as_str), Some("Time"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_object_body_misses_everything() {
        let err = feature_vector(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, FeatureError::Missing(ref m) if m.len() == FEATURE_COUNT));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let mut record = full_record();
        record["Amount"] = json!(" 149.62 ");
        let row = feature_vector(&record).unwrap();
        assert_eq!(row[FeatureName::Amount.index()], 149.62);
    }

    #[test]
    fn booleans_count_as_one_and_zero() {
        let mut record = full_record();
        record["V1"] = json!(true);
        record["V2"] = json!(false);
        let row = feature_vector(&record).unwrap();
        assert_eq!(row[0], 1.0);
        assert_eq!(row[1], 0.0);
    }

    #[test]
    fn null_and_text_values_are_rejected() {
        let mut record = full_record();
        record["V5"] = Value::Null;
        let err = feature_vector(&record).unwrap_err();
        assert_eq!(err.to_string(), "could not convert value of 'V5' to float: null");

        record["V5"] = json!("abc");
        assert!(matches!(
            feature_vector(&record),
            Err(FeatureError::NotNumeric { feature: FeatureName::V5, .. })
        ));
    }
}

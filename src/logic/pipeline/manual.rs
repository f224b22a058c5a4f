//! Manual selection -> FeatureRow

use std::collections::HashMap;

use crate::logic::features::{encode, Feature, FeatureRow, FEATURE_COUNT};

use super::PipelineError;

/// Resolve column-name keys (as sent by forms and JSON clients) to features
pub fn resolve_selection(
    named: &HashMap<String, String>,
) -> Result<HashMap<Feature, String>, PipelineError> {
    named
        .iter()
        .map(|(name, label)| -> Result<_, PipelineError> {
            Ok((name.parse::<Feature>()?, label.clone()))
        })
        .collect()
}

/// Encode one label per feature into a row
pub fn build_row_from_manual_selection<S: AsRef<str>>(
    labels: &HashMap<Feature, S>,
) -> Result<FeatureRow, PipelineError> {
    let mut codes = [0u8; FEATURE_COUNT];

    for feature in Feature::ALL {
        let label = labels
            .get(&feature)
            .ok_or(PipelineError::MissingFeature(feature))?;
        codes[feature.index()] = encode(feature, label.as_ref())?;
    }

    Ok(FeatureRow::from_codes(codes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::EncodingError;

    fn selection(pairs: &[(&str, &str)]) -> HashMap<Feature, String> {
        let named: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        resolve_selection(&named).unwrap()
    }

    fn reference_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Gender", "Boy"),
            ("Age", "1-5"),
            ("Education Level", "School"),
            ("Institution Type", "Government"),
            ("IT Student", "No"),
            ("Location in Town", "Yes"),
            ("Load-shedding", "Low"),
            ("Financial Condition", "Poor"),
            ("Internet Type", "Wifi"),
            ("Network Type", "2G"),
            ("Class Duration", "0"),
            ("Self LMS", "No"),
            ("Device", "Tab"),
        ]
    }

    #[test]
    fn test_reference_selection() {
        let row = build_row_from_manual_selection(&selection(&reference_pairs())).unwrap();
        assert_eq!(row.codes(), &[1, 0, 0, 1, 0, 1, 0, 1, 2, 1, 0, 0, 1]);
    }

    #[test]
    fn test_other_end_of_domains() {
        let row = build_row_from_manual_selection(&selection(&[
            ("Gender", "Girl"),
            ("Age", "26-30"),
            ("Education Level", "University"),
            ("Institution Type", "Non Government"),
            ("IT Student", "Yes"),
            ("Location in Town", "No"),
            ("Load-shedding", "High"),
            ("Financial Condition", "Rich"),
            ("Internet Type", "Mobile Data"),
            ("Network Type", "4G"),
            ("Class Duration", "3-6"),
            ("Self LMS", "Yes"),
            ("Device", "Computer"),
        ]))
        .unwrap();
        assert_eq!(row.codes(), &[0, 5, 2, 0, 1, 0, 1, 3, 1, 3, 2, 1, 3]);
    }

    #[test]
    fn test_unknown_label() {
        let mut pairs = reference_pairs();
        pairs[12] = ("Device", "Laptop");
        let err = build_row_from_manual_selection(&selection(&pairs)).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Encoding(EncodingError::UnknownLabel { feature: Feature::Device, .. })
        ));
    }

    #[test]
    fn test_missing_feature() {
        let pairs: Vec<_> = reference_pairs().into_iter().filter(|(k, _)| *k != "Age").collect();
        let err = build_row_from_manual_selection(&selection(&pairs)).unwrap_err();
        assert!(matches!(err, PipelineError::MissingFeature(Feature::Age)));
    }

    #[test]
    fn test_unknown_feature_name() {
        let named = HashMap::from([("Colour".to_string(), "Red".to_string())]);
        assert!(matches!(
            resolve_selection(&named),
            Err(PipelineError::Encoding(EncodingError::UnknownFeature(_)))
        ));
    }
}

//! Feature schema served to clients building their own forms

use serde::Serialize;

use crate::logic::features::{EncodingTable, Feature, LayoutInfo};

#[derive(Debug, Serialize)]
pub struct Choice {
    pub label: &'static str,
    pub code: u8,
}

#[derive(Debug, Serialize)]
pub struct FeatureDomain {
    pub name: &'static str,
    pub index: usize,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Serialize)]
pub struct FeatureSchema {
    pub layout: LayoutInfo,
    pub features: Vec<FeatureDomain>,
}

impl FeatureSchema {
    pub fn current() -> Self {
        let table = EncodingTable::global();
        let features = Feature::ALL
            .iter()
            .map(|&feature| FeatureDomain {
                name: feature.name(),
                index: feature.index(),
                choices: table
                    .feature(feature)
                    .entries()
                    .iter()
                    .map(|&(label, code)| Choice { label, code })
                    .collect(),
            })
            .collect();

        Self {
            layout: LayoutInfo::current(),
            features,
        }
    }
}

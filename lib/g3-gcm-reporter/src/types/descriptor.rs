/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricKind {
    Gauge,
    Delta,
    Cumulative,
    // unknown kinds map here, must stay the last variant
    #[default]
    #[serde(rename = "METRIC_KIND_UNSPECIFIED")]
    #[serde(other)]
    Unspecified,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Unspecified => "METRIC_KIND_UNSPECIFIED",
            MetricKind::Gauge => "GAUGE",
            MetricKind::Delta => "DELTA",
            MetricKind::Cumulative => "CUMULATIVE",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Bool,
    Int64,
    Double,
    String,
    Distribution,
    Money,
    #[default]
    #[serde(rename = "VALUE_TYPE_UNSPECIFIED")]
    #[serde(other)]
    Unspecified,
}

/// The backend side record of a metric type.
///
/// Only the fields the reporter looks at are kept, everything else in the
/// response is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub metric_kind: MetricKind,
    pub value_type: ValueType,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_gauge() {
        let s = r#"{
            "name": "projects/proj-1/metricDescriptors/custom.googleapis.com/my_gauge",
            "type": "custom.googleapis.com/my_gauge",
            "labels": [{"key": "name"}],
            "metricKind": "GAUGE",
            "valueType": "INT64",
            "description": "test gauge"
        }"#;
        let d: MetricDescriptor = serde_json::from_str(s).unwrap();
        assert_eq!(d.r#type, "custom.googleapis.com/my_gauge");
        assert_eq!(d.metric_kind, MetricKind::Gauge);
        assert_eq!(d.value_type, ValueType::Int64);
    }

    #[test]
    fn parse_unknown_kind() {
        let d: MetricDescriptor = serde_json::from_str(r#"{"metricKind": "SOMETHING_NEW"}"#).unwrap();
        assert_eq!(d.metric_kind, MetricKind::Unspecified);

        let d: MetricDescriptor = serde_json::from_str("{}").unwrap();
        assert_eq!(d.metric_kind, MetricKind::Unspecified);
        assert_eq!(d.value_type, ValueType::Unspecified);
    }

    #[test]
    fn parse_all_kinds() {
        for (s, kind) in [
            ("GAUGE", MetricKind::Gauge),
            ("DELTA", MetricKind::Delta),
            ("CUMULATIVE", MetricKind::Cumulative),
            ("METRIC_KIND_UNSPECIFIED", MetricKind::Unspecified),
        ] {
            let json = format!(r#"{{"metricKind":"{s}","valueType":"DOUBLE"}}"#);
            let d: MetricDescriptor = serde_json::from_str(&json).unwrap();
            assert_eq!(d.metric_kind, kind);
            assert_eq!(d.value_type, ValueType::Double);
            assert_eq!(kind.as_str(), s);
        }
        assert_eq!(MetricKind::default(), MetricKind::Unspecified);
        assert_eq!(ValueType::default(), ValueType::Unspecified);
    }

    #[test]
    fn display() {
        assert_eq!(MetricKind::Gauge.to_string(), "GAUGE");
        assert_eq!(MetricKind::Cumulative.to_string(), "CUMULATIVE");
        assert_eq!(
            MetricKind::Unspecified.to_string(),
            "METRIC_KIND_UNSPECIFIED"
        );
    }
}

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Metric {
    #[serde(rename = "type")]
    pub r#type: String,
    pub labels: BTreeMap<String, String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TypedValue {
    // proto3 json mapping encodes int64 as string
    #[serde(rename = "int64Value", serialize_with = "int64_as_string")]
    Int64(i64),
}

impl TypedValue {
    pub fn as_i64(&self) -> i64 {
        match self {
            TypedValue::Int64(v) => *v,
        }
    }
}

fn int64_as_string<S: Serializer>(v: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(v)
}

/// A single data point.
///
/// No interval is set, the backend fills in the time of arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Point {
    pub value: TypedValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TimeSeries {
    pub metric: Metric,
    pub points: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateTimeSeriesRequest {
    /// resource name of the project, in the form of `projects/<project_id>`
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "timeSeries")]
    pub time_series: Vec<TimeSeries>,
}

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use super::{MetricTags, RESERVED_NAME_LABEL};
use crate::types::{Metric, Point, TimeSeries, TypedValue};

/// `as` truncates toward zero, saturates out of range values and maps NaN to 0
pub(super) fn gauge_reading(value: f64) -> i64 {
    value as i64
}

pub(super) fn timer_reading(interval: Duration) -> i64 {
    i64::try_from(interval.as_millis()).unwrap_or(i64::MAX)
}

pub(super) fn build_time_series(
    metric_type: &str,
    name: &str,
    tags: Option<&MetricTags>,
    value: i64,
) -> TimeSeries {
    let mut labels = tags.cloned().unwrap_or_default();
    labels.insert(RESERVED_NAME_LABEL.to_string(), name.to_string());
    TimeSeries {
        metric: Metric {
            r#type: metric_type.to_string(),
            labels,
        },
        points: vec![Point {
            value: TypedValue::Int64(value),
        }],
    }
}

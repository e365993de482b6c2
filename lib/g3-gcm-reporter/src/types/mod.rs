/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! Wire types of the Cloud Monitoring v3 API used by the reporter.

mod descriptor;
pub use descriptor::{MetricDescriptor, MetricKind, ValueType};

mod series;
pub use series::{CreateTimeSeriesRequest, Metric, Point, TimeSeries, TypedValue};

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::{ClientError, ReporterBuildError};

mod config;
pub use config::{DEFAULT_MONITORING_ENDPOINT, GcmReporterConfig};

pub mod types;

mod client;
pub use client::{HttpMetricClient, MetricServiceClient};

mod reporter;
pub use reporter::{
    Buckets, Capabilities, FeatureSupport, GcmStatsReporter, MetricTags, REQUIRED_METRIC_KIND,
    RESERVED_NAME_LABEL, StatsReporter,
};

#[cfg(test)]
mod testing;

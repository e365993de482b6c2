/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use async_trait::async_trait;

use crate::ClientError;
use crate::types::{CreateTimeSeriesRequest, MetricDescriptor};

mod http;
pub use http::HttpMetricClient;

/// The subset of the Cloud Monitoring metric service used by the reporter.
///
/// Implementations must be safe to share between concurrent report calls.
#[async_trait]
pub trait MetricServiceClient: Send + Sync {
    /// Read the descriptor with the full resource name
    /// `projects/<project>/metricDescriptors/<metric_type>`.
    async fn get_metric_descriptor(&self, name: &str) -> Result<MetricDescriptor, ClientError>;

    async fn create_time_series(&self, req: &CreateTimeSeriesRequest) -> Result<(), ClientError>;
}

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use async_trait::async_trait;
use slog::{Discard, Logger, slog_error, slog_info, slog_o};

use super::{
    Buckets, Capabilities, FeatureSupport, MetricTags, REQUIRED_METRIC_KIND, StatsReporter, series,
};
use crate::types::CreateTimeSeriesRequest;
use crate::{GcmReporterConfig, HttpMetricClient, MetricServiceClient, ReporterBuildError};

const CAPABILITIES: Capabilities = Capabilities::new(true, true, FeatureSupport::NotYetSupported);

/// Reporter writing every metric event as one point of a single gauge metric.
///
/// The metric descriptor is verified once at construction. After that the
/// reporter holds no mutable state and can be shared between tasks. Every
/// report call awaits one `CreateTimeSeries` request, failures are logged and
/// dropped.
pub struct GcmStatsReporter<C = HttpMetricClient> {
    project_name: String,
    metric_type: String,
    client: C,
    logger: Logger,
}

impl GcmStatsReporter<HttpMetricClient> {
    pub async fn build(
        config: &GcmReporterConfig,
        logger: Option<Logger>,
    ) -> Result<Self, ReporterBuildError> {
        let client = HttpMetricClient::new(config).map_err(ReporterBuildError::HttpClient)?;
        GcmStatsReporter::with_client(config, client, logger).await
    }
}

impl<C: MetricServiceClient> GcmStatsReporter<C> {
    pub async fn with_client(
        config: &GcmReporterConfig,
        client: C,
        logger: Option<Logger>,
    ) -> Result<Self, ReporterBuildError> {
        let logger = logger.unwrap_or_else(|| Logger::root(Discard, slog_o!()));

        let descriptor_name = config.descriptor_name();
        let descriptor = client
            .get_metric_descriptor(&descriptor_name)
            .await
            .map_err(|source| ReporterBuildError::Descriptor {
                name: descriptor_name.clone(),
                source,
            })?;
        if descriptor.metric_kind != REQUIRED_METRIC_KIND {
            return Err(ReporterBuildError::MetricKindMismatch {
                actual: descriptor.metric_kind,
                expected: REQUIRED_METRIC_KIND,
            });
        }

        slog_info!(logger, "metric descriptor verified";
            "descriptor" => descriptor_name.as_str(),
            "metric_kind" => descriptor.metric_kind.as_str(),
        );
        Ok(GcmStatsReporter {
            project_name: config.project_name(),
            metric_type: config.metric_type().to_string(),
            client,
            logger,
        })
    }

    #[inline]
    pub fn metric_type(&self) -> &str {
        &self.metric_type
    }

    #[inline]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    async fn report_time_series(&self, name: &str, tags: Option<&MetricTags>, value: i64) {
        let req = CreateTimeSeriesRequest {
            name: self.project_name.clone(),
            time_series: vec![series::build_time_series(
                &self.metric_type,
                name,
                tags,
                value,
            )],
        };

        if let Err(e) = self.client.create_time_series(&req).await {
            slog_error!(self.logger, "error happened when emitting time series";
                "metric_type" => self.metric_type.as_str(),
                "metric_name" => name,
                "error" => %e,
            );
        }
    }
}

#[async_trait]
impl<C: MetricServiceClient> StatsReporter for GcmStatsReporter<C> {
    fn capabilities(&self) -> Capabilities {
        CAPABILITIES
    }

    async fn report_counter(&self, name: &str, tags: Option<&MetricTags>, value: i64) {
        self.report_time_series(name, tags, value).await
    }

    async fn report_gauge(&self, name: &str, tags: Option<&MetricTags>, value: f64) {
        self.report_time_series(name, tags, series::gauge_reading(value))
            .await
    }

    async fn report_timer(&self, name: &str, tags: Option<&MetricTags>, interval: Duration) {
        self.report_time_series(name, tags, series::timer_reading(interval))
            .await
    }

    async fn report_histogram_value_samples(
        &self,
        _name: &str,
        _tags: Option<&MetricTags>,
        _buckets: &Buckets,
        _bucket_lower_bound: f64,
        _bucket_upper_bound: f64,
        _samples: i64,
    ) {
        // see CAPABILITIES
    }

    async fn report_histogram_duration_samples(
        &self,
        _name: &str,
        _tags: Option<&MetricTags>,
        _buckets: &Buckets,
        _bucket_lower_bound: Duration,
        _bucket_upper_bound: Duration,
        _samples: i64,
    ) {
        // see CAPABILITIES
    }

    async fn flush(&self) {
        // every point is written synchronously, nothing is buffered
    }
}

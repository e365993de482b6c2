/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::types::MetricKind;

mod series;

mod gcm;
pub use gcm::GcmStatsReporter;

pub type MetricTags = BTreeMap<String, String>;

/// The label key owned by the reporter.
///
/// It always carries the metric name of the event, any caller supplied tag
/// with the same key is replaced.
pub const RESERVED_NAME_LABEL: &str = "name";

/// The kind the configured metric descriptor must have.
///
/// Counters, gauges and timers are all written as points of the same
/// configured metric type, so that single metric type has to be a gauge.
pub const REQUIRED_METRIC_KIND: MetricKind = MetricKind::Gauge;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureSupport {
    Supported,
    NotYetSupported,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    reporting: bool,
    tagging: bool,
    histograms: FeatureSupport,
}

impl Capabilities {
    pub const fn new(reporting: bool, tagging: bool, histograms: FeatureSupport) -> Self {
        Capabilities {
            reporting,
            tagging,
            histograms,
        }
    }

    #[inline]
    pub fn reporting(&self) -> bool {
        self.reporting
    }

    #[inline]
    pub fn tagging(&self) -> bool {
        self.tagging
    }

    #[inline]
    pub fn histograms(&self) -> FeatureSupport {
        self.histograms
    }
}

/// Bucket bounds of a histogram.
#[derive(Clone, Debug, PartialEq)]
pub enum Buckets {
    Values(Vec<f64>),
    Durations(Vec<Duration>),
}

impl Buckets {
    pub fn len(&self) -> usize {
        match self {
            Buckets::Values(v) => v.len(),
            Buckets::Durations(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The interface a metrics scope drives on every flush tick.
///
/// Report calls never fail, errors are handled inside the reporter.
#[async_trait]
pub trait StatsReporter: Send + Sync {
    fn capabilities(&self) -> Capabilities;

    async fn report_counter(&self, name: &str, tags: Option<&MetricTags>, value: i64);

    async fn report_gauge(&self, name: &str, tags: Option<&MetricTags>, value: f64);

    async fn report_timer(&self, name: &str, tags: Option<&MetricTags>, interval: Duration);

    async fn report_histogram_value_samples(
        &self,
        name: &str,
        tags: Option<&MetricTags>,
        buckets: &Buckets,
        bucket_lower_bound: f64,
        bucket_upper_bound: f64,
        samples: i64,
    );

    async fn report_histogram_duration_samples(
        &self,
        name: &str,
        tags: Option<&MetricTags>,
        buckets: &Buckets,
        bucket_lower_bound: Duration,
        bucket_upper_bound: Duration,
        samples: i64,
    );

    async fn flush(&self);
}

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

#[cfg(feature = "yaml")]
mod yaml;

pub const DEFAULT_MONITORING_ENDPOINT: &str = "https://monitoring.googleapis.com";

const ENV_PROJECT_ID: &str = "GCP_PROJECT_ID";
const ENV_METRIC_TYPE: &str = "GCP_METRIC_TYPE";
const ENV_ACCESS_TOKEN: &str = "GCP_ACCESS_TOKEN";
const ENV_MONITORING_ENDPOINT: &str = "GCP_MONITORING_ENDPOINT";

/// Identity of the target metric and how to reach the backend.
///
/// Empty project id or metric type are not rejected here, the backend will
/// report them as a not found descriptor at reporter construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GcmReporterConfig {
    project_id: String,
    metric_type: String,
    endpoint: String,
    access_token: Option<String>,
}

impl Default for GcmReporterConfig {
    fn default() -> Self {
        GcmReporterConfig::new(String::new(), String::new())
    }
}

impl GcmReporterConfig {
    pub fn new(project_id: String, metric_type: String) -> Self {
        GcmReporterConfig {
            project_id,
            metric_type,
            endpoint: DEFAULT_MONITORING_ENDPOINT.to_string(),
            access_token: None,
        }
    }

    pub fn from_env() -> Self {
        GcmReporterConfig::from_lookup(|k| std::env::var(k).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = GcmReporterConfig::new(
            lookup(ENV_PROJECT_ID).unwrap_or_default(),
            lookup(ENV_METRIC_TYPE).unwrap_or_default(),
        );
        if let Some(token) = lookup(ENV_ACCESS_TOKEN).filter(|s| !s.is_empty()) {
            config.set_access_token(token);
        }
        if let Some(endpoint) = lookup(ENV_MONITORING_ENDPOINT).filter(|s| !s.is_empty()) {
            config.set_endpoint(endpoint);
        }
        config
    }

    pub fn set_project_id(&mut self, project_id: String) {
        self.project_id = project_id;
    }

    pub fn set_metric_type(&mut self, metric_type: String) {
        self.metric_type = metric_type;
    }

    pub fn set_endpoint(&mut self, endpoint: String) {
        self.endpoint = endpoint;
    }

    pub fn set_access_token(&mut self, token: String) {
        self.access_token = Some(token);
    }

    #[inline]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    #[inline]
    pub fn metric_type(&self) -> &str {
        &self.metric_type
    }

    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[inline]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn project_name(&self) -> String {
        format!("projects/{}", self.project_id)
    }

    pub fn descriptor_name(&self) -> String {
        format!(
            "projects/{}/metricDescriptors/{}",
            self.project_id, self.metric_type
        )
    }
}

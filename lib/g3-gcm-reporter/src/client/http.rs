/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;

use super::MetricServiceClient;
use crate::types::{CreateTimeSeriesRequest, MetricDescriptor};
use crate::{ClientError, GcmReporterConfig};

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorStatus,
}

#[derive(Deserialize)]
struct ErrorStatus {
    #[serde(default)]
    message: String,
}

/// Cloud Monitoring v3 REST client.
///
/// No request timeout is set, a hung backend blocks the caller.
#[derive(Clone)]
pub struct HttpMetricClient {
    client: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl HttpMetricClient {
    pub fn new(config: &GcmReporterConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().build()?;
        Ok(HttpMetricClient::with_client(
            client,
            config.endpoint(),
            config.access_token().map(|s| s.to_string()),
        ))
    }

    pub fn with_client(
        client: reqwest::Client,
        endpoint: &str,
        access_token: Option<String>,
    ) -> Self {
        HttpMetricClient {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/v3/{path}", self.endpoint)
    }

    fn auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn check_response(rsp: Response) -> Result<Response, ClientError> {
        let status = rsp.status();
        if status.is_success() {
            return Ok(rsp);
        }

        let body = rsp.bytes().await?;
        let message = match serde_json::from_slice::<ErrorEnvelope>(&body) {
            Ok(envelope) => envelope.error.message,
            Err(_) => String::from_utf8_lossy(&body).into_owned(),
        };
        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl MetricServiceClient for HttpMetricClient {
    async fn get_metric_descriptor(&self, name: &str) -> Result<MetricDescriptor, ClientError> {
        let req = self.auth(self.client.get(self.api_url(name)));
        let rsp = Self::check_response(req.send().await?).await?;
        let body = rsp.bytes().await?;
        let descriptor = serde_json::from_slice(&body)?;
        Ok(descriptor)
    }

    async fn create_time_series(&self, req: &CreateTimeSeriesRequest) -> Result<(), ClientError> {
        let path = format!("{}/timeSeries", req.name);
        let http_req = self.auth(self.client.post(self.api_url(&path)).json(req));
        Self::check_response(http_req.send().await?).await?;
        Ok(())
    }
}

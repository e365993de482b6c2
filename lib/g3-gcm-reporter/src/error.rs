/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

use crate::types::MetricKind;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("error response: {status} {message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            ClientError::Status { status, .. } => Some(*status),
            ClientError::InvalidResponse(_) => None,
        }
    }
}

/// Errors that prevent a reporter from being constructed.
///
/// None of these are retried, the caller is expected to treat them as a
/// startup failure of its metrics pipeline.
#[derive(Debug, Error)]
pub enum ReporterBuildError {
    #[error("failed to create http client: {0}")]
    HttpClient(#[source] ClientError),
    #[error("failed to get metric descriptor {name}: {source}")]
    Descriptor {
        name: String,
        #[source]
        source: ClientError,
    },
    #[error("metric kind {actual} is not {expected}")]
    MetricKindMismatch {
        actual: MetricKind,
        expected: MetricKind,
    },
}

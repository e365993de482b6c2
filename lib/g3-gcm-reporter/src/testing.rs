/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::{self, Write};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use slog::{Drain, KV, Key, Never, OwnedKVList, Record, Serializer};

use crate::types::{CreateTimeSeriesRequest, MetricDescriptor, MetricKind};
use crate::{ClientError, HttpMetricClient, MetricServiceClient};

#[derive(Default)]
struct MockState {
    descriptor_kind: MetricKind,
    descriptor_error: Option<(u16, String)>,
    write_error: Option<ClientError>,
    descriptor_reads: Vec<String>,
    writes: Vec<CreateTimeSeriesRequest>,
}

/// In memory metric service recording every request it receives.
#[derive(Clone, Default)]
pub(crate) struct MockMetricClient {
    state: Arc<Mutex<MockState>>,
}

impl MockMetricClient {
    pub(crate) fn with_kind(kind: MetricKind) -> Self {
        let client = MockMetricClient::default();
        client.state.lock().unwrap().descriptor_kind = kind;
        client
    }

    pub(crate) fn with_descriptor_error(status: u16, message: &str) -> Self {
        let client = MockMetricClient::default();
        client.state.lock().unwrap().descriptor_error = Some((status, message.to_string()));
        client
    }

    pub(crate) fn fail_writes(&self, e: ClientError) {
        self.state.lock().unwrap().write_error = Some(e);
    }

    pub(crate) fn recover_writes(&self) {
        self.state.lock().unwrap().write_error = None;
    }

    pub(crate) fn descriptor_reads(&self) -> Vec<String> {
        self.state.lock().unwrap().descriptor_reads.clone()
    }

    pub(crate) fn writes(&self) -> Vec<CreateTimeSeriesRequest> {
        self.state.lock().unwrap().writes.clone()
    }
}

#[async_trait]
impl MetricServiceClient for MockMetricClient {
    async fn get_metric_descriptor(&self, name: &str) -> Result<MetricDescriptor, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.descriptor_reads.push(name.to_string());
        if let Some((status, message)) = &state.descriptor_error {
            return Err(ClientError::Status {
                status: *status,
                message: message.clone(),
            });
        }
        Ok(MetricDescriptor {
            name: name.to_string(),
            metric_kind: state.descriptor_kind,
            ..Default::default()
        })
    }

    async fn create_time_series(&self, req: &CreateTimeSeriesRequest) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        state.writes.push(req.clone());
        match &state.write_error {
            Some(ClientError::Status { status, message }) => Err(ClientError::Status {
                status: *status,
                message: message.clone(),
            }),
            Some(e) => Err(ClientError::Status {
                status: 500,
                message: e.to_string(),
            }),
            None => Ok(()),
        }
    }
}

struct PlainKvWriter<'a>(&'a mut String);

impl Serializer for PlainKvWriter<'_> {
    fn emit_arguments(&mut self, key: Key, val: &fmt::Arguments<'_>) -> slog::Result {
        let _ = write!(self.0, " {key}: {val},");
        Ok(())
    }
}

/// Drain keeping every record as a plain text line.
#[derive(Clone, Default)]
pub(crate) struct CaptureDrain {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CaptureDrain {
    pub(crate) fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    pub(crate) fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

impl Drain for CaptureDrain {
    type Ok = ();
    type Err = Never;

    fn log(&self, record: &Record<'_>, _values: &OwnedKVList) -> Result<(), Never> {
        let mut line = record.level().as_short_str().to_string();
        let mut writer = PlainKvWriter(&mut line);
        let _ = record.kv().serialize(record, &mut writer);
        let _ = write!(line, " {}", record.msg());
        self.entries.lock().unwrap().push(line);
        Ok(())
    }
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse().ok())
        .unwrap_or(0)
}

/// Plain HTTP/1.1 server answering one connection per response, in order.
///
/// The join handle yields the raw requests received.
pub(crate) async fn serve_sequence(
    responses: Vec<(&'static str, &'static str)>,
) -> (SocketAddr, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut requests = Vec::with_capacity(responses.len());
        for (status_line, body) in responses {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut tmp = [0u8; 4096];
            loop {
                let n = stream.read(&mut tmp).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&tmp[..n]);
                if let Some(p) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&buf[..p]).into_owned();
                    if buf.len() >= p + 4 + content_length(&head) {
                        break;
                    }
                }
            }
            let rsp = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(rsp.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            requests.push(String::from_utf8(buf).unwrap());
        }
        requests
    });
    (addr, handle)
}

/// Client talking to a local test server, bypassing any proxy set in env.
pub(crate) fn new_test_http_client(addr: SocketAddr, token: Option<&str>) -> HttpMetricClient {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpMetricClient::with_client(
        client,
        &format!("http://{addr}/"),
        token.map(|s| s.to_string()),
    )
}

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

use super::GcmReporterConfig;

fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

fn foreach_kv<F>(table: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    for (k, v) in table.iter() {
        if let Yaml::String(key) = k {
            f(key, v).context(format!("failed to parse value of key {key}"))?;
        } else {
            return Err(anyhow!("key in hash should be string"));
        }
    }
    Ok(())
}

fn as_string(v: &Yaml) -> anyhow::Result<String> {
    match v {
        Yaml::String(s) => Ok(s.to_string()),
        Yaml::Integer(i) => Ok(i.to_string()),
        _ => Err(anyhow!(
            "yaml value type for string should be 'string' or 'integer'"
        )),
    }
}

impl GcmReporterConfig {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        if let Yaml::Hash(map) = v {
            let mut config = GcmReporterConfig::default();
            foreach_kv(map, |k, v| config.set_by_yaml_kv(k, v))?;
            Ok(config)
        } else {
            Err(anyhow!(
                "yaml value type for 'gcm reporter config' should be 'map'"
            ))
        }
    }

    pub fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match normalize_key(k).as_str() {
            "project_id" | "project" => {
                let project = as_string(v).context(format!("invalid string value for key {k}"))?;
                self.set_project_id(project);
                Ok(())
            }
            "metric_type" => {
                let metric_type =
                    as_string(v).context(format!("invalid string value for key {k}"))?;
                self.set_metric_type(metric_type);
                Ok(())
            }
            "endpoint" | "api_endpoint" => {
                let endpoint = as_string(v).context(format!("invalid string value for key {k}"))?;
                if endpoint.is_empty() {
                    return Err(anyhow!("empty endpoint is not allowed for key {k}"));
                }
                self.set_endpoint(endpoint);
                Ok(())
            }
            "access_token" | "token" => {
                let token = as_string(v).context(format!("invalid string value for key {k}"))?;
                self.set_access_token(token);
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k}")),
        }
    }
}

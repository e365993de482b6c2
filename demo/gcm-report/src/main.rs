/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use slog::{Logger, slog_info};
use yaml_rust::YamlLoader;

use g3_gcm_reporter::{GcmReporterConfig, GcmStatsReporter, MetricTags, StatsReporter};

mod log;

const ARG_CONFIG: &str = "config";
const ARG_PROJECT_ID: &str = "project-id";
const ARG_METRIC_TYPE: &str = "metric-type";
const ARG_ENDPOINT: &str = "endpoint";
const ARG_TAG: &str = "tag";
const ARG_GAUGE: &str = "gauge";
const ARG_COUNTER: &str = "counter";
const ARG_TIMER: &str = "timer";

#[derive(Clone, Debug)]
struct NamedValue<T> {
    name: String,
    value: T,
}

impl<T> FromStr for NamedValue<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("no '=' found in {s}"))?;
        if name.is_empty() {
            return Err(anyhow!("empty name in {s}"));
        }
        let value = T::from_str(value).map_err(|e| anyhow!("invalid value for {name}: {e}"))?;
        Ok(NamedValue {
            name: name.to_string(),
            value,
        })
    }
}

fn build_cli_args() -> Command {
    Command::new("gcm-report")
        .arg(
            Arg::new(ARG_CONFIG)
                .help("Reporter config file in yaml format")
                .long(ARG_CONFIG)
                .short('c')
                .num_args(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_PROJECT_ID)
                .help("GCP project id, default to env GCP_PROJECT_ID")
                .long(ARG_PROJECT_ID)
                .num_args(1),
        )
        .arg(
            Arg::new(ARG_METRIC_TYPE)
                .help("Metric type of a gauge metric, default to env GCP_METRIC_TYPE")
                .long(ARG_METRIC_TYPE)
                .num_args(1),
        )
        .arg(
            Arg::new(ARG_ENDPOINT)
                .help("Cloud Monitoring API endpoint")
                .long(ARG_ENDPOINT)
                .num_args(1),
        )
        .arg(
            Arg::new(ARG_TAG)
                .help("Tag added to all metrics, in KEY=VALUE form")
                .long(ARG_TAG)
                .action(ArgAction::Append)
                .value_parser(value_parser!(NamedValue<String>)),
        )
        .arg(
            Arg::new(ARG_GAUGE)
                .help("Gauge to report, in NAME=VALUE form")
                .long(ARG_GAUGE)
                .action(ArgAction::Append)
                .value_parser(value_parser!(NamedValue<f64>)),
        )
        .arg(
            Arg::new(ARG_COUNTER)
                .help("Counter to report, in NAME=VALUE form")
                .long(ARG_COUNTER)
                .action(ArgAction::Append)
                .value_parser(value_parser!(NamedValue<i64>)),
        )
        .arg(
            Arg::new(ARG_TIMER)
                .help("Timer to report, in NAME=MILLISECONDS form")
                .long(ARG_TIMER)
                .action(ArgAction::Append)
                .value_parser(value_parser!(NamedValue<u64>)),
        )
}

fn load_config_file(path: &Path) -> anyhow::Result<GcmReporterConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read config file {}: {e:?}", path.display()))?;
    let docs = YamlLoader::load_from_str(&content)
        .map_err(|e| anyhow!("invalid yaml file {}: {e}", path.display()))?;
    let doc = docs
        .first()
        .ok_or_else(|| anyhow!("no yaml doc found in file {}", path.display()))?;
    GcmReporterConfig::parse_yaml(doc)
        .context(format!("invalid reporter config in file {}", path.display()))
}

fn load_config(args: &ArgMatches) -> anyhow::Result<GcmReporterConfig> {
    let mut config = match args.get_one::<PathBuf>(ARG_CONFIG) {
        Some(path) => load_config_file(path)?,
        None => GcmReporterConfig::from_env(),
    };
    if let Some(project_id) = args.get_one::<String>(ARG_PROJECT_ID) {
        config.set_project_id(project_id.clone());
    }
    if let Some(metric_type) = args.get_one::<String>(ARG_METRIC_TYPE) {
        config.set_metric_type(metric_type.clone());
    }
    if let Some(endpoint) = args.get_one::<String>(ARG_ENDPOINT) {
        config.set_endpoint(endpoint.clone());
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = build_cli_args().get_matches();
    let config = load_config(&args)?;
    let logger = log::new_stderr_logger();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow!("failed to build tokio runtime: {e}"))?;
    rt.block_on(run(&args, config, logger))
}

async fn run(args: &ArgMatches, config: GcmReporterConfig, logger: Logger) -> anyhow::Result<()> {
    let reporter = GcmStatsReporter::build(&config, Some(logger.clone()))
        .await
        .context("failed to create gcm stats reporter")?;

    let tags: MetricTags = args
        .get_many::<NamedValue<String>>(ARG_TAG)
        .into_iter()
        .flatten()
        .map(|kv| (kv.name.clone(), kv.value.clone()))
        .collect();
    let tags = Some(&tags).filter(|t| !t.is_empty());

    let gauges: Vec<&NamedValue<f64>> = args.get_many(ARG_GAUGE).into_iter().flatten().collect();
    let counters: Vec<&NamedValue<i64>> =
        args.get_many(ARG_COUNTER).into_iter().flatten().collect();
    let timers: Vec<&NamedValue<u64>> = args.get_many(ARG_TIMER).into_iter().flatten().collect();

    if gauges.is_empty() && counters.is_empty() && timers.is_empty() {
        reporter.report_gauge("foo", tags, 1.0).await;
        reporter.report_counter("bar", tags, 1).await;
    } else {
        for g in gauges {
            reporter.report_gauge(&g.name, tags, g.value).await;
        }
        for c in counters {
            reporter.report_counter(&c.name, tags, c.value).await;
        }
        for t in timers {
            reporter
                .report_timer(&t.name, tags, Duration::from_millis(t.value))
                .await;
        }
    }

    reporter.flush().await;
    slog_info!(logger, "all metrics reported";
        "project" => reporter.project_name(),
        "metric_type" => reporter.metric_type(),
    );
    Ok(())
}

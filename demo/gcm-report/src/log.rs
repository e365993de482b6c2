/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::io::{self, Write};

use chrono::Local;
use slog::{Drain, KV, Key, Logger, OwnedKVList, Record, Serializer, slog_o};

struct PlainKvWriter<'a>(&'a mut Vec<u8>);

impl Serializer for PlainKvWriter<'_> {
    fn emit_arguments(&mut self, key: Key, val: &fmt::Arguments<'_>) -> slog::Result {
        write!(self.0, " {key}: {val},")?;
        Ok(())
    }
}

struct StderrDrain;

impl Drain for StderrDrain {
    type Ok = ();
    type Err = slog::Error;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> Result<(), slog::Error> {
        let mut buf: Vec<u8> = Vec::with_capacity(256);
        write!(buf, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.6f"))?;
        write!(buf, " {}", record.level().as_short_str())?;

        let mut kv_writer = PlainKvWriter(&mut buf);
        record.kv().serialize(record, &mut kv_writer)?;
        values.serialize(record, &mut kv_writer)?;

        writeln!(buf, " {}", record.msg())?;
        io::stderr().lock().write_all(&buf)?;
        Ok(())
    }
}

pub(crate) fn new_stderr_logger() -> Logger {
    Logger::root(
        StderrDrain.ignore_res(),
        slog_o!(
            "pid" => std::process::id(),
        ),
    )
}

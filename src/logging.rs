// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Minimal stderr logger for the `log` facade.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable selecting the level: `error|warn|info|debug|trace` (or `off`).
pub const LOG_ENV: &str = "SYSBOARD_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "{} {:<5} {}: {}",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Parses a level name; unknown or empty values yield `None`.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Level from `SYSBOARD_LOG`, falling back to `info`.
pub fn level_from_env() -> LevelFilter {
    match std::env::var(LOG_ENV) {
        Ok(raw) => parse_level(&raw).unwrap_or_else(|| {
            eprintln!("sysboard: ignoring unknown {LOG_ENV} value {raw:?}");
            DEFAULT_LEVEL
        }),
        Err(_) => DEFAULT_LEVEL,
    }
}

/// Installs the stderr logger. Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

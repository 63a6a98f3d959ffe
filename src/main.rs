// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sysboard server entrypoint.
//!
//! Serves the JSON API at `http://127.0.0.1:<port>/api` until Ctrl-C.

use std::error::Error;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use sysboard::config::{ServerConfig, DEFAULT_PORT};
use sysboard::evaluator::HeuristicEvaluator;
use sysboard::http::AppState;
use sysboard::store::WriteDurability;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--port <port>] [--bind <addr>] [--records <file>] [--durable-writes]\n\n--port selects the listen port (0 = ephemeral; default {DEFAULT_PORT}).\n--bind selects the listen address (default 127.0.0.1).\n--records keeps diagrams, submissions and progress in a JSON file; without it they live in memory.\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported; requires --records).\n\nSet SYSBOARD_LOG=error|warn|info|debug|trace to change log verbosity (default info)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    port: Option<u16>,
    bind: Option<IpAddr>,
    records: Option<PathBuf>,
    durable_writes: bool,
}

impl CliOptions {
    fn into_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind: self.bind.unwrap_or(defaults.bind),
            port: self.port.unwrap_or(defaults.port),
            records_path: self.records,
            durability: if self.durable_writes {
                WriteDurability::Durable
            } else {
                WriteDurability::BestEffort
            },
        }
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--port" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.port = Some(raw.parse().map_err(|_| ())?);
            }
            "--bind" => {
                if options.bind.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.bind = Some(raw.parse().map_err(|_| ())?);
            }
            "--records" => {
                if options.records.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.records = Some(PathBuf::from(path));
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ => return Err(()),
        }
    }

    if options.durable_writes && options.records.is_none() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "sysboard".to_owned());

        let config = match parse_options(args) {
            Ok(options) => options.into_config(),
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if let Err(err) = sysboard::logging::init(sysboard::logging::level_from_env()) {
            eprintln!("sysboard: logging disabled: {err}");
        }

        let records = config.open_records()?;
        let state = Arc::new(AppState::new(records, Arc::new(HeuristicEvaluator::new())));

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(sysboard::http::serve(&config, state))?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("sysboard: {err}");
        std::process::exit(1);
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

/// Reads `SYSBOARD_<name>`, clamped to `min..=max`.
fn knob<T>(name: &str, default: T, min: T, max: T) -> T
where
    T: FromStr + Ord,
{
    std::env::var(format!("SYSBOARD_{name}"))
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

/// Criterion with a flamegraph profiler attached; only active under `--profile-time`.
pub fn criterion() -> Criterion {
    let frequency = knob("PROFILE_FREQ", 100i32, 1, 1000);
    let sample_size = knob("BENCH_SAMPLE_SIZE", 50usize, 10, 200);
    let warmup_secs = knob("BENCH_WARMUP_SECS", 2u64, 1, 60);
    let measurement_secs = knob("BENCH_MEASUREMENT_SECS", 5u64, 1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}

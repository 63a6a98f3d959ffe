// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sysboard: system-design practice canvas.
//!
//! The canvas store and its change reducer, design evaluators, and a JSON API for saved
//! diagrams, submissions and progress.

pub mod canvas;
pub mod config;
pub mod evaluator;
pub mod http;
pub mod logging;
pub mod model;
pub mod ops;
pub mod store;

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

pub(super) mod catalog;
pub(super) mod diagrams;
pub(super) mod evaluator;
pub(super) mod progress;
pub(super) mod submissions;

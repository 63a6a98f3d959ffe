// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::store::{RecordStore, StoreError, WriteDurability};

pub const DEFAULT_PORT: u16 = 27436;

/// Everything `http::serve` needs to start listening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// JSON file backing the record store; `None` keeps records in memory.
    pub records_path: Option<PathBuf>,
    pub durability: WriteDurability,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            records_path: None,
            durability: WriteDurability::BestEffort,
        }
    }
}

impl ServerConfig {
    pub fn open_records(&self) -> Result<RecordStore, StoreError> {
        match &self.records_path {
            Some(path) => RecordStore::open(path.clone(), self.durability),
            None => Ok(RecordStore::in_memory()),
        }
    }
}

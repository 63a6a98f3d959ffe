// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canvas theme and default drawing settings.
//!
//! These two values are the only part of canvas state that survives a reload; together they
//! form [`Preferences`].

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stroke and arrow color for connections drawn under this theme.
    pub fn stroke_color(self) -> &'static str {
        match self {
            Self::Light => "#2563eb",
            Self::Dark => "#3b82f6",
        }
    }

    pub fn fill_color(self) -> &'static str {
        match self {
            Self::Light => "#dbeafe",
            Self::Dark => "#1e3a8a",
        }
    }
}

/// Defaults applied to edges created from now on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrawingSettings {
    pub stroke_width: f64,
    pub stroke_color: String,
    pub fill_color: String,
    pub opacity: f64,
}

impl DrawingSettings {
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            stroke_width: 2.0,
            stroke_color: theme.stroke_color().to_owned(),
            fill_color: theme.fill_color().to_owned(),
            opacity: 1.0,
        }
    }

    /// Shallow merge: every field present in `patch` replaces the current value.
    pub fn merge(&mut self, patch: DrawingSettingsPatch) {
        if let Some(stroke_width) = patch.stroke_width {
            self.stroke_width = stroke_width;
        }
        if let Some(stroke_color) = patch.stroke_color {
            self.stroke_color = stroke_color;
        }
        if let Some(fill_color) = patch.fill_color {
            self.fill_color = fill_color;
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity;
        }
    }
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrawingSettingsPatch {
    #[serde(default)]
    pub stroke_width: Option<f64>,
    #[serde(default)]
    pub stroke_color: Option<String>,
    #[serde(default)]
    pub fill_color: Option<String>,
    #[serde(default)]
    pub opacity: Option<f64>,
}

/// The persisted subset of canvas state.
///
/// Missing drawing settings default to the palette of the stored theme, not the default theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub drawing_settings: DrawingSettings,
}

impl<'de> Deserialize<'de> for Preferences {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Stored {
            #[serde(default)]
            theme: Theme,
            #[serde(default)]
            drawing_settings: Option<DrawingSettings>,
        }

        let stored = Stored::deserialize(deserializer)?;
        Ok(Self {
            theme: stored.theme,
            drawing_settings: stored
                .drawing_settings
                .unwrap_or_else(|| DrawingSettings::for_theme(stored.theme)),
        })
    }
}

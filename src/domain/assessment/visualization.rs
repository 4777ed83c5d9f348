//! Rendering hints for the external 3D profile view.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::metrics::DangerLevel;
use super::profile::Profile3D;

/// Smallest marker size, so low-potential riders stay visible.
pub const MIN_MARKER_SIZE: f64 = 0.5;

static DANGER_COLORS: Lazy<HashMap<DangerLevel, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (DangerLevel::Critical, "#ef4444"),
        (DangerLevel::High, "#f97316"),
        (DangerLevel::Medium, "#eab308"),
        (DangerLevel::Low, "#22c55e"),
    ])
});

/// Neutral grey, used if a level is ever missing from the table.
const FALLBACK_COLOR: &str = "#6b7280";

impl DangerLevel {
    /// Hex colour used to paint the rider's marker.
    pub fn color(&self) -> &'static str {
        DANGER_COLORS.get(self).copied().unwrap_or(FALLBACK_COLOR)
    }
}

/// Point in the 0-10 cube: x = risk, y = skill, z = adequacy shifted by +5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationHints {
    pub position: Position3D,
    pub color: String,
    pub size: f64,
}

impl From<&Profile3D> for VisualizationHints {
    fn from(profile: &Profile3D) -> Self {
        Self {
            position: Position3D {
                x: profile.risk_taking().value(),
                y: profile.technical_skills().value(),
                z: profile.adequacy().value() + 5.0,
            },
            color: profile.danger_level().color().to_string(),
            size: (profile.growth_potential().value() / 10.0).max(MIN_MARKER_SIZE),
        }
    }
}

//! Game settings and preferences
//!
//! Read from LocalStorage on the web (written by the page). These are presentation
//! preferences only; physics constants live in `consts` and match state is
//! never saved.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MATCH_SECONDS;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Real seconds a full 90 minute match takes
    pub match_seconds: f64,

    // === Visual Effects ===
    /// Flash the arena when a goal goes in
    pub goal_effect: bool,
    /// Shake the page when a goal goes in
    pub screen_shake: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (no shake, no flash)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            match_seconds: DEFAULT_MATCH_SECONDS,

            goal_effect: true,
            screen_shake: true,

            show_fps: false,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective goal flash (respects reduced_motion)
    pub fn effective_goal_effect(&self) -> bool {
        self.goal_effect && !self.reduced_motion
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Match length, falling back to the default for nonsense values
    pub fn effective_match_seconds(&self) -> f64 {
        if self.match_seconds.is_finite() && self.match_seconds > 0.0 {
            self.match_seconds
        } else {
            DEFAULT_MATCH_SECONDS
        }
    }

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "roto_goal_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

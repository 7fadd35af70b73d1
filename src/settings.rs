//! Display preferences
//!
//! Persisted separately from any widget state in LocalStorage.

use serde::{Deserialize, Serialize};

/// Widget display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Draw the connecting trail through selected points
    pub trail: bool,
    /// Show the status line above the grid
    pub show_status: bool,

    // === Accessibility ===
    /// Minimize motion (disables the selection pulse)
    pub reduced_motion: bool,
    /// Render unselected points in white instead of grey
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trail: true,
            show_status: true,
            reduced_motion: false,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "pattern_lock_settings";

    /// Effective selection pulse (respects reduced_motion)
    pub fn effective_pulse(&self) -> bool {
        !self.reduced_motion
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

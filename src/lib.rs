//! Building blocks for text-based role-playing games.
//!
//! - [`data`]: look game records up by numeric ID in JSON or TOML files
//! - [`describe`]: `Type(field=value, ...)` debug descriptions
//! - [`leveling`]: experience curve and level-ups
//!
//! Each capability is a separate trait (`DataLoadable`, `Describable`,
//! `Leveling`), so an entity opts into exactly the ones it needs.
//! [`Character`] opts into all three.

pub mod character;
pub mod data;
pub mod describe;
pub mod leveling;
pub mod settings;

pub use character::Character;
pub use data::{Category, DataFormat, DataLoadable, Record};
pub use describe::{Describable, Description, FieldValue};
pub use leveling::{LevelReport, Leveling, LevelingConfig, LevelingState, ReportMode};
pub use settings::Settings;

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::{from_value, to_value};
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmLevelResult {
        level: u32,
        experience: i64,
        message: Option<String>,
    }

    #[wasm_bindgen]
    pub struct WasmLeveling {
        state: LevelingState,
    }

    #[wasm_bindgen]
    impl WasmLeveling {
        /// Create a leveling state from a JS object such as `{ level: 3, exp: 400 }`.
        /// `undefined` or `null` gives the default curve.
        #[wasm_bindgen(constructor)]
        pub fn new(config: JsValue) -> Result<WasmLeveling, JsValue> {
            let config: LevelingConfig = if config.is_undefined() || config.is_null() {
                LevelingConfig::default()
            } else {
                from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
            };
            Ok(WasmLeveling {
                state: LevelingState::new(config),
            })
        }

        /// Grant experience. `report` is "always", "never", or anything else for the default.
        #[wasm_bindgen(js_name = giveExperience)]
        pub fn give_experience(
            &mut self,
            amount: i64,
            check_level_up: bool,
            report: &str,
        ) -> Result<JsValue, JsValue> {
            let mode = match report {
                "always" => ReportMode::Always,
                "never" => ReportMode::Never,
                _ => ReportMode::SilentUnlessLeveled,
            };
            let message = self
                .state
                .give_experience_with(amount, check_level_up, mode)
                .map(|r| r.to_string());
            to_value(&WasmLevelResult {
                level: self.state.level(),
                experience: self.state.experience(),
                message,
            })
            .map_err(|e| JsValue::from_str(&e.to_string()))
        }

        #[wasm_bindgen(getter)]
        pub fn level(&self) -> u32 {
            self.state.level()
        }

        #[wasm_bindgen(getter)]
        pub fn experience(&self) -> i64 {
            self.state.experience()
        }

        #[wasm_bindgen(js_name = nextLevelThreshold)]
        pub fn next_level_threshold(&self) -> i64 {
            self.state.next_level_threshold()
        }

        #[wasm_bindgen]
        pub fn describe(&self) -> String {
            self.state.describe()
        }
    }
}

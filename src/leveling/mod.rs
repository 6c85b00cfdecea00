//! Experience and leveling.
//!
//! Thresholds follow `floor(base_exp * level^exponent)`; granting experience
//! raises the level one step at a time until the next threshold is out of
//! reach or the cap is hit.

mod config;
mod lint;
mod state;

pub use config::{DEFAULT_BASE_EXP, DEFAULT_EXPONENT, DEFAULT_LEVEL, LevelingConfig};
pub use lint::{CurveWarning, lint_curve};
pub use state::{LevelReport, LevelingState, ReportMode, threshold_at};

/// Leveling capability for any entity that owns a [`LevelingState`].
pub trait Leveling {
    fn leveling(&self) -> &LevelingState;
    fn leveling_mut(&mut self) -> &mut LevelingState;

    fn level(&self) -> u32 {
        self.leveling().level()
    }

    fn experience(&self) -> i64 {
        self.leveling().experience()
    }

    fn next_level_threshold(&self) -> i64 {
        self.leveling().next_level_threshold()
    }

    fn give_experience(&mut self, amount: i64) -> Option<LevelReport> {
        self.leveling_mut().give_experience(amount)
    }

    fn give_experience_with(
        &mut self,
        amount: i64,
        check_level_up: bool,
        report: ReportMode,
    ) -> Option<LevelReport> {
        self.leveling_mut()
            .give_experience_with(amount, check_level_up, report)
    }

    fn level_up(&mut self, report: ReportMode) -> Option<LevelReport> {
        self.leveling_mut().evaluate_level_up(report)
    }
}

impl Leveling for LevelingState {
    fn leveling(&self) -> &LevelingState {
        self
    }

    fn leveling_mut(&mut self) -> &mut LevelingState {
        self
    }
}

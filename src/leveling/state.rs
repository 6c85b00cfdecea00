use std::fmt;

use tracing::{info, warn};

use super::{LevelingConfig, lint_curve};
use crate::describe::{Describable, FieldValue};

/// Whether a level-up check should produce a [`LevelReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportMode {
    /// Report the remaining experience even if no level was gained.
    Always,
    /// Report only when at least one level was gained.
    #[default]
    SilentUnlessLeveled,
    /// Never report.
    Never,
}

/// Outcome of a level-up check that the caller asked to hear about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelReport {
    /// Level after the check.
    pub level: u32,
    /// Levels gained by this check.
    pub levels_gained: u32,
    /// Experience still needed to reach the next level.
    pub remaining: i64,
}

impl fmt::Display for LevelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EXP required for next level: {}", self.remaining)
    }
}

/// Experience required to advance from `level` to `level + 1`:
/// `floor(base_exp * level^exponent)`.
///
/// Saturates at the `i64` bounds instead of overflowing. A NaN exponent makes
/// every threshold 0, since the NaN product casts to 0.
pub fn threshold_at(base_exp: i64, exponent: f64, level: u32) -> i64 {
    (base_exp as f64 * f64::from(level).powf(exponent)).floor() as i64
}

/// Level, experience and growth curve of one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelingState {
    level: u32,
    experience: i64,
    exponent: f64,
    base_exp: i64,
    max_level: Option<u32>,
}

impl Default for LevelingState {
    fn default() -> Self {
        Self::new(LevelingConfig::default())
    }
}

impl From<LevelingConfig> for LevelingState {
    fn from(config: LevelingConfig) -> Self {
        Self::new(config)
    }
}

impl LevelingState {
    /// Build a state from its starting values. Odd parameters are logged, not rejected.
    pub fn new(config: LevelingConfig) -> Self {
        for warning in lint_curve(&config) {
            warn!(%warning, "suspicious leveling curve");
        }

        LevelingState {
            level: config.level,
            experience: config.experience,
            exponent: config.exponent,
            base_exp: config.base_exp,
            max_level: config.max_level,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> i64 {
        self.experience
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn base_exp(&self) -> i64 {
        self.base_exp
    }

    pub fn max_level(&self) -> Option<u32> {
        self.max_level
    }

    /// True once the level has reached a configured cap.
    pub fn is_capped(&self) -> bool {
        matches!(self.max_level, Some(max) if self.level >= max)
    }

    /// Experience needed for the next level. Evaluated even when capped.
    pub fn next_level_threshold(&self) -> i64 {
        threshold_at(self.base_exp, self.exponent, self.level)
    }

    /// Experience still missing before the next level.
    pub fn remaining_experience(&self) -> i64 {
        self.next_level_threshold().saturating_sub(self.experience)
    }

    /// Grant experience with the usual options: check for level-ups, report only on a gain.
    pub fn give_experience(&mut self, amount: i64) -> Option<LevelReport> {
        self.give_experience_with(amount, true, ReportMode::default())
    }

    /// Add `amount` to experience, then optionally run a level-up check.
    ///
    /// The amount is not validated; a negative grant lowers experience but
    /// can never take a level away.
    pub fn give_experience_with(
        &mut self,
        amount: i64,
        check_level_up: bool,
        report: ReportMode,
    ) -> Option<LevelReport> {
        self.experience = self.experience.saturating_add(amount);
        if check_level_up {
            self.evaluate_level_up(report)
        } else {
            None
        }
    }

    /// Raise the level one step at a time while experience covers the current
    /// threshold and the cap allows it. Surplus experience past the cap stays banked.
    ///
    /// With a cap the loop is bounded by `max_level`, so even a flat curve climbs
    /// all the way to the cap. Without one, a curve that stops growing (zero or
    /// negative `base_exp`/`exponent`, or a flat `floor`) grants one more level
    /// and then stops, so it cannot spin forever.
    pub fn evaluate_level_up(&mut self, report: ReportMode) -> Option<LevelReport> {
        let start_level = self.level;
        let mut threshold = self.next_level_threshold();

        while threshold <= self.experience {
            if self.is_capped() {
                break;
            }
            let Some(next_level) = self.level.checked_add(1) else {
                break;
            };
            self.level = next_level;

            let next_threshold = self.next_level_threshold();
            if self.max_level.is_none() && next_threshold <= threshold {
                warn!(
                    level = self.level,
                    threshold = next_threshold,
                    "experience curve is not increasing; stopping level-up check"
                );
                break;
            }
            threshold = next_threshold;
        }

        let levels_gained = self.level - start_level;
        if levels_gained > 0 {
            info!(from = start_level, to = self.level, "level up");
        }

        let wants_report = match report {
            ReportMode::Always => true,
            ReportMode::SilentUnlessLeveled => levels_gained > 0,
            ReportMode::Never => false,
        };

        if wants_report && !self.is_capped() {
            Some(LevelReport {
                level: self.level,
                levels_gained,
                remaining: self.remaining_experience(),
            })
        } else {
            None
        }
    }
}

impl Describable for LevelingState {
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("level", self.level.into()),
            ("experience", self.experience.into()),
            ("exponent", self.exponent.into()),
            ("base_exp", self.base_exp.into()),
            ("max_level", self.max_level.into()),
        ]
    }
}

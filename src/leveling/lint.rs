use std::fmt;

use super::LevelingConfig;

/// A suspicious leveling parameter. Reported, never corrected.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveWarning {
    pub message: String,
}

impl CurveWarning {
    fn new(msg: impl Into<String>) -> Self {
        CurveWarning {
            message: msg.into(),
        }
    }
}

impl fmt::Display for CurveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub fn lint_curve(config: &LevelingConfig) -> Vec<CurveWarning> {
    let mut warnings: Vec<CurveWarning> = Vec::new();

    if config.base_exp <= 0 {
        warnings.push(CurveWarning::new(format!(
            "base_exp {} is not positive; every threshold will be {}",
            config.base_exp,
            if config.base_exp == 0 { "zero" } else { "negative" }
        )));
    }

    if !config.exponent.is_finite() {
        warnings.push(CurveWarning::new(format!(
            "exponent {} is not a finite number",
            config.exponent
        )));
    } else if config.exponent <= 0.0 {
        warnings.push(CurveWarning::new(format!(
            "exponent {} is not positive; thresholds will not grow with level",
            config.exponent
        )));
    }

    if config.level == 0 {
        warnings.push(CurveWarning::new("level 0 is below the minimum of 1"));
    }

    if config.experience < 0 {
        warnings.push(CurveWarning::new(format!(
            "starting experience {} is negative",
            config.experience
        )));
    }

    if let Some(max) = config.max_level {
        if max == 0 {
            warnings.push(CurveWarning::new("max_level 0 can never be reached"));
        }
        if config.level > max {
            warnings.push(CurveWarning::new(format!(
                "starting level {} is above max_level {}",
                config.level, max
            )));
        }
    }

    warnings
}

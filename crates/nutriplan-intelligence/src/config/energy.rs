// ABOUTME: Energy expenditure configuration for BMR and TDEE calculations
// ABOUTME: Mifflin-St Jeor coefficients and activity factor multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Energy Expenditure Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use nutriplan_core::models::ActivityLevel;
use serde::{Deserialize, Serialize};

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl BmrConfig {
    /// Validate formula coefficients
    ///
    /// # Errors
    ///
    /// Returns an error if a coefficient is not finite or has the wrong sign
    pub fn validate(&self) -> Result<(), ConfigError> {
        let coefficients = [
            ("msj_weight_coef", self.msj_weight_coef),
            ("msj_height_coef", self.msj_height_coef),
            ("msj_age_coef", self.msj_age_coef),
            ("msj_male_constant", self.msj_male_constant),
            ("msj_female_constant", self.msj_female_constant),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.msj_weight_coef <= 0.0 || self.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "weight and height coefficients must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Little/no exercise: 1.2
    pub sedentary: f64,
    /// Light exercise: 1.375
    pub lightly_active: f64,
    /// Moderate exercise (3-5 days/wk): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/wk): 1.725
    pub very_active: f64,
    /// Extra active (very active & physical job): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity tier
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }

    /// Validate that factors are at least 1.0 and increase with activity
    ///
    /// # Errors
    ///
    /// Returns an error if a factor is below 1.0, not finite, or out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut previous = 1.0;
        for level in ActivityLevel::ALL {
            let factor = self.factor(level);
            if !factor.is_finite() || factor < previous {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "activity factor for '{}' must be finite, at least 1.0, and not below the previous tier, got {factor}",
                    level.label()
                )));
            }
            previous = factor;
        }
        Ok(())
    }
}

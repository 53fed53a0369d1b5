// ABOUTME: Food image analysis enrichment on top of a pluggable vision analyzer
// ABOUTME: Per-item totals and classification, grand totals, and the could-not-analyze outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Food Analysis
//!
//! The vision analyzer reports per-unit nutrition for each detected item. This
//! module scales by quantity, classifies each item and the whole plate, and
//! rounds presented values to one decimal. Classification always uses the
//! unrounded figures.

use crate::constants::analysis::REPORT_DECIMALS;
use crate::constants::service_names;
use crate::external::{call_with_timeout, VisionAnalyzer};
use crate::intelligence::{aggregator, HealthClassifier};
use crate::logging::AppLogger;
use crate::models::{AnalyzedFoodItem, ClassificationResult, NutritionVector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::warn;

/// Reason given when the analyzer recognized nothing
pub const NO_ITEMS_REASON: &str = "No food items were recognized in the image";

/// One detected item with its totals and classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedItemReport {
    /// Item name
    pub item_name: String,
    /// Number of servings
    pub quantity: f64,
    /// Serving description
    pub serving_size: String,
    /// Per-serving nutrition, rounded to one decimal
    pub nutrition_per_unit: NutritionVector,
    /// Nutrition for the whole quantity, rounded to one decimal
    pub total_nutrition: NutritionVector,
    /// Classification of the whole quantity
    #[serde(flatten)]
    pub classification: ClassificationResult,
}

/// Analysis of every detected item and the plate as a whole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodAnalysisReport {
    /// Items in detection order
    pub items: Vec<AnalyzedItemReport>,
    /// Sum of the item totals, rounded to one decimal
    pub grand_total: NutritionVector,
    /// Classification of `grand_total`
    pub overall: ClassificationResult,
}

/// Result of analyzing an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FoodAnalysisOutcome {
    /// At least one item was recognized
    Analyzed(FoodAnalysisReport),
    /// The analyzer failed or recognized nothing
    CouldNotAnalyze {
        /// Human-readable reason
        reason: String,
    },
}

impl FoodAnalysisOutcome {
    /// Report, if the image was analyzed
    #[must_use]
    pub const fn report(&self) -> Option<&FoodAnalysisReport> {
        match self {
            Self::Analyzed(report) => Some(report),
            Self::CouldNotAnalyze { .. } => None,
        }
    }
}

/// Analyzes food images through a [`VisionAnalyzer`]
#[derive(Clone)]
pub struct FoodAnalysisService {
    analyzer: Arc<dyn VisionAnalyzer>,
    classifier: HealthClassifier,
    timeout: Duration,
}

impl fmt::Debug for FoodAnalysisService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoodAnalysisService")
            .field("classifier", &self.classifier)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl FoodAnalysisService {
    /// Create a service with the given analyzer, classifier, and per-image timeout
    #[must_use]
    pub fn new(
        analyzer: Arc<dyn VisionAnalyzer>,
        classifier: HealthClassifier,
        timeout: Duration,
    ) -> Self {
        Self {
            analyzer,
            classifier,
            timeout,
        }
    }

    /// Analyze an image
    ///
    /// Analyzer failures, timeouts, and empty detections all yield
    /// [`FoodAnalysisOutcome::CouldNotAnalyze`].
    pub async fn analyze(&self, image: &[u8]) -> FoodAnalysisOutcome {
        let started = Instant::now();
        let detected = call_with_timeout(
            service_names::VISION_ANALYZER,
            "analyze",
            self.timeout,
            self.analyzer.analyze(image),
        )
        .await;

        let outcome = match detected {
            Ok(items) => self.enrich(&items),
            Err(error) => {
                warn!(error = %error, "Food analysis failed");
                FoodAnalysisOutcome::CouldNotAnalyze {
                    reason: error.to_string(),
                }
            }
        };

        let item_count = outcome.report().map_or(0, |report| report.items.len());
        AppLogger::log_food_analysis(
            item_count,
            outcome.report().is_some(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        outcome
    }

    /// Build the report for items that were already detected
    #[must_use]
    pub fn enrich(&self, items: &[AnalyzedFoodItem]) -> FoodAnalysisOutcome {
        if items.is_empty() {
            return FoodAnalysisOutcome::CouldNotAnalyze {
                reason: NO_ITEMS_REASON.to_owned(),
            };
        }

        let reports: Vec<AnalyzedItemReport> =
            items.iter().map(|item| self.item_report(item)).collect();
        let totals: Vec<NutritionVector> =
            reports.iter().map(|report| report.total_nutrition).collect();
        let grand_total = aggregator::sum(&totals).rounded(REPORT_DECIMALS);

        FoodAnalysisOutcome::Analyzed(FoodAnalysisReport {
            overall: self.classifier.classify(&grand_total, 1.0),
            grand_total,
            items: reports,
        })
    }

    fn item_report(&self, item: &AnalyzedFoodItem) -> AnalyzedItemReport {
        AnalyzedItemReport {
            item_name: item.item_name.clone(),
            quantity: item.quantity,
            serving_size: item.serving_size.clone(),
            nutrition_per_unit: item.nutrition_per_unit.rounded(REPORT_DECIMALS),
            total_nutrition: item.total_nutrition().rounded(REPORT_DECIMALS),
            classification: self
                .classifier
                .classify(&item.nutrition_per_unit, item.quantity),
        }
    }
}

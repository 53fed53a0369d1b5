// ABOUTME: Tolerant parser for vision model replies describing detected food items
// ABOUTME: Strips markdown fences, applies field defaults, and clamps bad values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Vision Reply Parsing
//!
//! Vision models are prompted to answer with a JSON array of
//! `{item_name, quantity, serving_size, nutrition_per_unit}` objects but often
//! wrap it in a fenced code block or omit keys. [`parse_detected_items`]
//! accepts those replies and fills in defaults.

use super::{CollaboratorError, VisionAnalyzer};
use crate::constants::analysis::{UNKNOWN_ITEM_NAME, UNKNOWN_SERVING_SIZE};
use crate::constants::service_names;
use crate::models::{AnalyzedFoodItem, NutrientField, NutritionVector};
use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// Vision reply that could not be interpreted
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VisionParseError {
    /// The reply is not valid JSON
    #[error("vision reply is not valid JSON: {0}")]
    InvalidJson(String),
    /// The reply is JSON but not a list of items
    #[error("vision reply must be a JSON array of items, got {0}")]
    UnexpectedShape(&'static str),
}

impl From<VisionParseError> for CollaboratorError {
    fn from(error: VisionParseError) -> Self {
        Self::InvalidResponse {
            service: service_names::VISION_ANALYZER,
            message: error.to_string(),
        }
    }
}

/// Parse a vision reply into detected food items
///
/// A single object is accepted as a one-item list. Entries that are not
/// objects are skipped.
///
/// # Errors
///
/// Returns [`VisionParseError`] if the reply is not JSON or not an array/object
pub fn parse_detected_items(text: &str) -> Result<Vec<AnalyzedFoodItem>, VisionParseError> {
    let payload = strip_code_fence(text);
    let value: Value =
        serde_json::from_str(payload).map_err(|e| VisionParseError::InvalidJson(e.to_string()))?;

    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(object) => vec![Value::Object(object)],
        Value::Null => return Err(VisionParseError::UnexpectedShape("null")),
        Value::Bool(_) => return Err(VisionParseError::UnexpectedShape("a boolean")),
        Value::Number(_) => return Err(VisionParseError::UnexpectedShape("a number")),
        Value::String(_) => return Err(VisionParseError::UnexpectedShape("a string")),
    };

    Ok(entries
        .iter()
        .filter_map(Value::as_object)
        .map(item_from_object)
        .collect())
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening fence line
    let body = rest.find('\n').map_or("", |newline| &rest[newline + 1..]);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn item_from_object(object: &Map<String, Value>) -> AnalyzedFoodItem {
    let item_name = object
        .get("item_name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_ITEM_NAME)
        .to_owned();

    let quantity = object
        .get("quantity")
        .and_then(number_from_value)
        .filter(|quantity| quantity.is_finite() && *quantity > 0.0)
        .unwrap_or(1.0);

    let serving_size = object
        .get("serving_size")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|serving| !serving.is_empty())
        .unwrap_or(UNKNOWN_SERVING_SIZE)
        .to_owned();

    let nutrients = object.get("nutrition_per_unit").and_then(Value::as_object);
    let values = NutrientField::ALL.map(|field| {
        nutrients
            .and_then(|nutrients| nutrients.get(field.key()))
            .and_then(number_from_value)
            .filter(|value| value.is_finite())
            .map_or(0.0, |value| value.max(0.0))
    });

    AnalyzedFoodItem {
        item_name,
        quantity,
        serving_size,
        nutrition_per_unit: NutritionVector::from_array(values),
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Vision analyzer that replays a reply captured from a vision model
///
/// Used by the CLI to analyze saved replies without calling a model.
#[derive(Debug, Clone)]
pub struct RecordedReplyAnalyzer {
    reply: String,
}

impl RecordedReplyAnalyzer {
    /// Wrap a captured reply
    #[must_use]
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl VisionAnalyzer for RecordedReplyAnalyzer {
    async fn analyze(&self, _image: &[u8]) -> Result<Vec<AnalyzedFoodItem>, CollaboratorError> {
        Ok(parse_detected_items(&self.reply)?)
    }
}

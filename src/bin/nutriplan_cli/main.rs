// ABOUTME: NutriPlan CLI - command-line entry point to the nutrition engine
// ABOUTME: Calculates energy needs, requests diet and custom recommendations, and analyzes food replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors
//!
//! Usage:
//! ```bash
//! # BMI, BMR, TDEE, and calorie plans
//! nutriplan-cli calculate --age 30 --height 175 --weight 70 --gender Male \
//!     --activity "Light exercise" --plan "Weight loss"
//!
//! # Per-meal recipe recommendations (requires RECOMMENDER_URL)
//! nutriplan-cli recommend --age 30 --height 175 --weight 70 --gender Male \
//!     --activity "Light exercise" --plan "Weight loss" --meals 4 --food-type Veg
//!
//! # Search by an explicit nutrition vector
//! nutriplan-cli custom --calories 500 --protein 30 --ingredients "rice; lentils" --count 3
//!
//! # Classify a saved vision model reply
//! nutriplan-cli analyze --reply reply.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use nutriplan::logging::LoggingConfig;
use nutriplan::models::ProfileRequest;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "NutriPlan nutrition engine CLI",
    long_about = "Compute energy needs, request recipe recommendations, and classify analyzed food."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show BMI, BMR, TDEE, and calorie plans
    Calculate {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Recommend recipes for every meal of the day
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Seed for reproducible meal targets
        #[arg(long)]
        seed: Option<u64>,

        /// Chosen recipe per meal, in meal order (repeat the flag)
        #[arg(long = "choose")]
        choices: Vec<String>,
    },

    /// Recommend recipes closest to an explicit nutrition vector
    Custom {
        #[command(flatten)]
        target: NutritionArgs,

        /// Required ingredients separated by ';'
        #[arg(long, default_value = "")]
        ingredients: String,

        /// Number of recipes
        #[arg(long, default_value = "5")]
        count: usize,

        /// `Veg` or `Non-Veg`
        #[arg(long)]
        food_type: Option<String>,
    },

    /// Classify food items from a saved vision model reply
    Analyze {
        /// File holding the vision model's text reply
        #[arg(long)]
        reply: PathBuf,

        /// Image the reply was produced from
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

/// Biometric inputs shared by profile-based commands
#[derive(Args, Debug, Clone)]
struct ProfileArgs {
    /// Age in years
    #[arg(long)]
    age: u32,

    /// Height in centimeters
    #[arg(long)]
    height: f64,

    /// Weight in kilograms
    #[arg(long)]
    weight: f64,

    /// `Male` or `Female`
    #[arg(long)]
    gender: String,

    /// Activity label, e.g. "Moderate exercise (3-5 days/wk)"
    #[arg(long, default_value = "Little/no exercise")]
    activity: String,

    /// Plan label, e.g. "Mild weight loss"
    #[arg(long, default_value = "Maintain weight")]
    plan: String,

    /// Meals per day (3, 4 or 5)
    #[arg(long, default_value = "3")]
    meals: u8,

    /// `Veg` or `Non-Veg`
    #[arg(long, default_value = "Veg")]
    food_type: String,
}

impl From<ProfileArgs> for ProfileRequest {
    fn from(args: ProfileArgs) -> Self {
        Self {
            age: args.age,
            height: args.height,
            weight: args.weight,
            gender: args.gender,
            food_type: args.food_type,
            activity: args.activity,
            meals_per_day: args.meals,
            plan: args.plan,
        }
    }
}

/// Nutrition vector given field by field
#[derive(Args, Debug, Clone, Copy)]
struct NutritionArgs {
    /// Calories (kcal)
    #[arg(long, default_value = "500")]
    calories: f64,
    /// Fat (g)
    #[arg(long, default_value = "20")]
    fat: f64,
    /// Saturated fat (g)
    #[arg(long, default_value = "2")]
    saturated_fat: f64,
    /// Cholesterol (mg)
    #[arg(long, default_value = "0")]
    cholesterol: f64,
    /// Sodium (mg)
    #[arg(long, default_value = "400")]
    sodium: f64,
    /// Carbohydrates (g)
    #[arg(long, default_value = "60")]
    carbohydrate: f64,
    /// Fiber (g)
    #[arg(long, default_value = "8")]
    fiber: f64,
    /// Sugar (g)
    #[arg(long, default_value = "10")]
    sugar: f64,
    /// Protein (g)
    #[arg(long, default_value = "30")]
    protein: f64,
}

impl NutritionArgs {
    const fn to_array(self) -> [f64; 9] {
        [
            self.calories,
            self.fat,
            self.saturated_fat,
            self.cholesterol,
            self.sodium,
            self.carbohydrate,
            self.fiber,
            self.sugar,
            self.protein,
        ]
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;
    debug!("NutriPlan CLI started");

    match cli.command {
        Command::Calculate { profile } => {
            commands::plan::calculate(ProfileRequest::from(profile), cli.json)?;
        }
        Command::Recommend {
            profile,
            seed,
            choices,
        } => {
            commands::plan::recommend(ProfileRequest::from(profile), seed, &choices, cli.json)
                .await?;
        }
        Command::Custom {
            target,
            ingredients,
            count,
            food_type,
        } => {
            commands::plan::custom(
                target.to_array(),
                ingredients,
                count,
                food_type.as_deref(),
                cli.json,
            )
            .await?;
        }
        Command::Analyze { reply, image } => {
            commands::analyze::run(&reply, image.as_deref(), cli.json).await?;
        }
    }

    Ok(())
}

use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use diet_planner_rs::error::Result;
use diet_planner_rs::estimator::{
    reference_label, sample_features, CalorieEstimator, ForestConfig, FEATURE_COUNT,
    TRAINING_EXAMPLES,
};

#[derive(Parser, Debug)]
#[command(name = "trainer")]
#[command(about = "Training diagnostics for the calorie model")]
struct Args {
    /// Number of synthetic training examples
    #[arg(long, default_value_t = TRAINING_EXAMPLES)]
    samples: usize,

    /// Number of trees in the forest
    #[arg(long, default_value = "30")]
    trees: usize,

    /// Maximum tree depth
    #[arg(long, default_value = "8")]
    depth: usize,

    /// Minimum samples per leaf
    #[arg(long, default_value = "2")]
    min_leaf: usize,

    /// Number of holdout examples for evaluation
    #[arg(long, default_value = "200")]
    holdout: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Output CSV file for holdout predictions
    #[arg(long, default_value = "trainer_report.csv")]
    csv: PathBuf,
}

type HoldoutRow = ([f64; FEATURE_COUNT], f64, f64);

fn main() {
    let args = Args::parse();

    let config = ForestConfig {
        trees: args.trees,
        max_depth: args.depth,
        min_leaf: args.min_leaf,
    };

    let mut rng = StdRng::seed_from_u64(args.seed);

    let estimator = match CalorieEstimator::train_with(args.samples, &config, &mut rng) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Training failed: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Trained {} trees on {} samples (seed {})",
        args.trees, args.samples, args.seed
    );

    if args.holdout == 0 {
        println!("No holdout examples requested, skipping evaluation.");
        return;
    }

    // Score a fresh sample against the labeling formula.
    let mut rows: Vec<HoldoutRow> = Vec::with_capacity(args.holdout);
    for _ in 0..args.holdout {
        let features = sample_features(&mut rng);
        let label = reference_label(&features);
        let prediction = estimator.predict(&features);
        rows.push((features, label, prediction));
    }

    let n = rows.len() as f64;
    let mae = rows.iter().map(|(_, l, p)| (l - p).abs()).sum::<f64>() / n;
    let rmse = (rows.iter().map(|(_, l, p)| (l - p) * (l - p)).sum::<f64>() / n).sqrt();
    let min_pred = rows.iter().map(|(_, _, p)| *p).fold(f64::MAX, f64::min);
    let max_pred = rows.iter().map(|(_, _, p)| *p).fold(f64::MIN, f64::max);

    println!();
    println!("=== Holdout Evaluation ({} examples) ===", rows.len());
    println!("MAE:  {:.1} kcal", mae);
    println!("RMSE: {:.1} kcal", rmse);
    println!("Prediction range: {:.0} to {:.0} kcal", min_pred, max_pred);

    if let Err(e) = write_report_csv(&rows, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
        std::process::exit(1);
    }
    println!("Wrote holdout predictions to {:?}", args.csv);
}

fn write_report_csv(rows: &[HoldoutRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "age",
        "weight",
        "height",
        "activity",
        "goal",
        "label",
        "prediction",
    ])?;

    for (features, label, prediction) in rows {
        wtr.write_record([
            format!("{:.0}", features[0]),
            format!("{:.0}", features[1]),
            format!("{:.0}", features[2]),
            format!("{:.0}", features[3]),
            format!("{:.0}", features[4]),
            format!("{:.1}", label),
            format!("{:.1}", prediction),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

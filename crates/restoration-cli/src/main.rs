//! Offline runner for land-health scoring and carbon estimates.
//! Prints JSON results on stdout; logs go to stderr (`RUST_LOG` to adjust).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use restoration_core::carbon::{CarbonCalculationInput, CarbonEstimator, CarbonTables};
use restoration_core::health::{
    ComponentStatus, LandHealthComponents, LandHealthResult, LandHealthScorer, ScorerConfig,
    WeightShare, DEFAULT_TREND_THRESHOLD,
};
use restoration_core::history::{load_history, summarize_history, LandHealthSnapshot};
use restoration_core::{assess_site, SiteParams};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "restoration", about = "Land health scoring and carbon sequestration estimates")]
struct Args {
    /// Carbon tables JSON (forest growth rates and age factors).
    #[arg(long, env = "RESTORATION_TABLES", global = true)]
    tables: Option<PathBuf>,

    /// Average per-snapshot score change that counts as improving/declining.
    #[arg(long, default_value_t = DEFAULT_TREND_THRESHOLD, global = true)]
    trend_threshold: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one set of component metrics.
    Score {
        #[arg(long)]
        vegetation: f64,
        #[arg(long)]
        soil: f64,
        #[arg(long)]
        moisture: f64,
        #[arg(long)]
        biodiversity: f64,
        /// Snapshot history JSON used for the trend.
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Score every snapshot in a history file.
    History {
        file: PathBuf,
    },
    /// Estimate carbon sequestration for a site.
    Carbon {
        #[arg(long)]
        hectares: f64,
        /// Mean stand age in years.
        #[arg(long)]
        age: f64,
        #[arg(long, default_value = "tropical_rainforest")]
        forest_type: String,
        /// Land health score, 0-100.
        #[arg(long)]
        health: f64,
        #[arg(long, default_value_t = 0)]
        trees: u32,
    },
    /// Carbon gained between two health scores on the same base.
    Improvement {
        #[arg(long)]
        baseline_health: f64,
        #[arg(long)]
        current_health: f64,
        #[arg(long)]
        base_carbon: f64,
    },
    /// Full assessment of a site from its history.
    Assess {
        file: PathBuf,
        #[arg(long)]
        hectares: f64,
        #[arg(long, default_value = "tropical_rainforest")]
        forest_type: String,
    },
    /// Print the active carbon tables and health weights.
    Tables,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreReport {
    #[serde(flatten)]
    result: LandHealthResult,
    component_status: Vec<ComponentReport>,
    formula: String,
}

#[derive(Serialize)]
struct ComponentReport {
    component: &'static str,
    value: f64,
    status: ComponentStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TablesReport<'a> {
    weights: Vec<WeightShare>,
    formula: String,
    trend_threshold: f64,
    carbon: &'a CarbonTables,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("restoration_cli=info,restoration_core=info")),
        )
        .init();

    let args = Args::parse();

    let scorer = LandHealthScorer::new(ScorerConfig {
        trend_threshold: args.trend_threshold,
        ..ScorerConfig::default()
    })?;
    let estimator = CarbonEstimator::new(load_tables(args.tables.as_deref())?);

    match args.command {
        Command::Score { vegetation, soil, moisture, biodiversity, history } => {
            let components = LandHealthComponents::new(vegetation, soil, moisture, biodiversity);
            components.validate()?;
            let history = history.as_deref().map(read_history).transpose()?;
            let result = scorer.analyze(&components, history.as_deref());
            let component_status = components
                .fields()
                .into_iter()
                .map(|(component, value)| ComponentReport {
                    component,
                    value,
                    status: ComponentStatus::from_value(value),
                })
                .collect();
            print_json(&ScoreReport {
                result,
                component_status,
                formula: scorer.weights().formula(),
            })
        }
        Command::History { file } => {
            let history = read_history(&file)?;
            let summary = summarize_history(&scorer, &history)
                .with_context(|| format!("Cannot summarize {}", file.display()))?;
            print_json(&summary)
        }
        Command::Carbon { hectares, age, forest_type, health, trees } => {
            let input = CarbonCalculationInput {
                tree_count: trees,
                avg_tree_age_years: age,
                forest_type,
                hectares,
                land_health_score: health,
            };
            input.validate()?;
            print_json(&estimator.calculate(&input))
        }
        Command::Improvement { baseline_health, current_health, base_carbon } => {
            print_json(&estimator.improvement_from_baseline(baseline_health, current_health, base_carbon))
        }
        Command::Assess { file, hectares, forest_type } => {
            let history = read_history(&file)?;
            let assessment = assess_site(
                &scorer,
                &estimator,
                &history,
                &SiteParams { hectares, forest_type },
            )
            .with_context(|| format!("Cannot assess {}", file.display()))?;
            print_json(&assessment)
        }
        Command::Tables => print_json(&TablesReport {
            weights: scorer.weights().breakdown(),
            formula: scorer.weights().formula(),
            trend_threshold: scorer.config().trend_threshold,
            carbon: estimator.tables(),
        }),
    }
}

fn load_tables(path: Option<&Path>) -> Result<CarbonTables> {
    match path {
        Some(p) => {
            tracing::info!(path = %p.display(), "using carbon tables file");
            CarbonTables::load(p).with_context(|| format!("Cannot load carbon tables {}", p.display()))
        }
        None => Ok(CarbonTables::default()),
    }
}

fn read_history(path: &Path) -> Result<Vec<LandHealthSnapshot>> {
    load_history(path).with_context(|| format!("Cannot load history {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_score_command() {
        let args = Args::try_parse_from([
            "restoration", "score", "--vegetation", "38", "--soil", "52", "--moisture", "45",
            "--biodiversity", "35",
        ])
        .unwrap();
        assert_eq!(args.trend_threshold, DEFAULT_TREND_THRESHOLD);
        match args.command {
            Command::Score { vegetation, history, .. } => {
                assert_eq!(vegetation, 38.0);
                assert!(history.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn carbon_defaults_to_rainforest() {
        let args = Args::try_parse_from([
            "restoration", "carbon", "--hectares", "10", "--age", "7", "--health", "77.9",
        ])
        .unwrap();
        match args.command {
            Command::Carbon { forest_type, trees, .. } => {
                assert_eq!(forest_type, "tropical_rainforest");
                assert_eq!(trees, 0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from(["restoration", "tables", "--trend-threshold", "1.0"]).unwrap();
        assert_eq!(args.trend_threshold, 1.0);
    }

    #[test]
    fn missing_tables_file_is_reported() {
        let err = load_tables(Some(Path::new("/nonexistent/tables.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/tables.json"));
    }
}

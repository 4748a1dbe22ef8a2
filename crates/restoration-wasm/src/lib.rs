use restoration_core::carbon::{CarbonCalculationInput, CarbonEstimator, CarbonTables};
use restoration_core::health::{LandHealthComponents, LandHealthScorer};
use restoration_core::history::{parse_history, summarize_history, LandHealthSnapshot};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Analyze one set of components; `history_json` is an optional snapshot array for the trend.
#[wasm_bindgen]
pub fn analyze_health(components_json: &str, history_json: Option<String>) -> Result<JsValue, JsValue> {
    to_js(analyze_health_impl(components_json, history_json.as_deref()))
}

/// Carbon estimate for a `CarbonCalculationInput` JSON object.
/// `tables_json` replaces the built-in forest and age tables when given.
#[wasm_bindgen]
pub fn estimate_carbon(input_json: &str, tables_json: Option<String>) -> Result<JsValue, JsValue> {
    to_js(estimate_carbon_impl(input_json, tables_json.as_deref()))
}

#[wasm_bindgen]
pub fn carbon_improvement(baseline_health: f64, current_health: f64, base_carbon: f64) -> Result<JsValue, JsValue> {
    let improvement =
        CarbonEstimator::default().improvement_from_baseline(baseline_health, current_health, base_carbon);
    to_js(Ok(improvement))
}

/// Per-snapshot scores, trend, and improvement for a history JSON array.
#[wasm_bindgen]
pub fn summarize_site_history(history_json: &str) -> Result<JsValue, JsValue> {
    to_js(summarize_impl(history_json))
}

fn to_js<T: Serialize>(result: Result<T, String>) -> Result<JsValue, JsValue> {
    let value = result.map_err(|e| JsValue::from_str(&e))?;
    serde_wasm_bindgen::to_value(&value).map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

fn analyze_health_impl(
    components_json: &str,
    history_json: Option<&str>,
) -> Result<restoration_core::LandHealthResult, String> {
    let components: LandHealthComponents =
        serde_json::from_str(components_json).map_err(|e| format!("Invalid components: {e}"))?;
    components.validate().map_err(|e| e.to_string())?;

    let history: Option<Vec<LandHealthSnapshot>> = history_json
        .map(parse_history)
        .transpose()
        .map_err(|e| format!("Invalid history: {e}"))?;

    let scorer = LandHealthScorer::default();
    Ok(scorer.analyze(&components, history.as_deref()))
}

fn estimate_carbon_impl(
    input_json: &str,
    tables_json: Option<&str>,
) -> Result<restoration_core::CarbonCalculationResult, String> {
    let input: CarbonCalculationInput =
        serde_json::from_str(input_json).map_err(|e| format!("Invalid input: {e}"))?;
    input.validate().map_err(|e| e.to_string())?;

    let tables = match tables_json {
        Some(json) => CarbonTables::from_json(json).map_err(|e| format!("Invalid tables: {e}"))?,
        None => CarbonTables::default(),
    };
    Ok(CarbonEstimator::new(tables).calculate(&input))
}

fn summarize_impl(history_json: &str) -> Result<restoration_core::history::HistorySummary, String> {
    let history = parse_history(history_json).map_err(|e| format!("Invalid history: {e}"))?;
    summarize_history(&LandHealthScorer::default(), &history).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASELINE: &str =
        r#"{"vegetationDensity":38,"soilHealthIndex":52,"moistureLevel":45,"biodiversityScore":35}"#;

    #[test]
    fn analyze_parses_and_scores() {
        let r = analyze_health_impl(BASELINE, None).unwrap();
        assert!((r.overall_score - 43.2).abs() < 1e-9);
    }

    #[test]
    fn analyze_rejects_out_of_range_components() {
        let json = r#"{"vegetationDensity":138,"soilHealthIndex":52,"moistureLevel":45,"biodiversityScore":35}"#;
        let err = analyze_health_impl(json, None).unwrap_err();
        assert!(err.contains("vegetationDensity"), "{err}");
    }

    #[test]
    fn analyze_reports_bad_history() {
        let err = analyze_health_impl(BASELINE, Some("{}")).unwrap_err();
        assert!(err.starts_with("Invalid history"), "{err}");
    }

    #[test]
    fn estimate_with_default_and_custom_tables() {
        let input = r#"{"treeCount":1445,"avgTreeAgeYears":7,"forestType":"boreal","hectares":10,"landHealthScore":100}"#;
        let r = estimate_carbon_impl(input, None).unwrap();
        // 10 × 1.2 × 0.8
        assert!((r.base_carbon - 9.6).abs() < 1e-9);

        let tables = r#"{"defaultForestType":"boreal","forestTypes":{"boreal":{"name":"Boreal","growthRate":1.0}},
            "ageFactors":[{"minAgeYears":0,"factor":1.0}]}"#;
        let r = estimate_carbon_impl(input, Some(tables)).unwrap();
        assert!((r.base_carbon - 10.0).abs() < 1e-9);
    }

    #[test]
    fn estimate_rejects_missing_fields() {
        let err = estimate_carbon_impl(r#"{"hectares":10}"#, None).unwrap_err();
        assert!(err.starts_with("Invalid input"), "{err}");
    }

    #[test]
    fn summarize_empty_history() {
        let err = summarize_impl("[]").unwrap_err();
        assert!(err.contains("empty"), "{err}");
    }
}

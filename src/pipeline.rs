//! Dashboard generation pipeline
//!
//! The driver shared by the binary and by library callers:
//! 1. Reads and decodes the primary results document
//! 2. Validates every entity before any chart is built
//! 3. Builds the chart specs and renders the page
//! 4. Only then reads the optional geographic document and re-renders the
//!    page with the regional section appended
//!
//! One failure aborts the load cycle; there is no per-chart isolation. When
//! the geographic pass fails, the primary page already written stays on disk.

use std::path::PathBuf;

use crate::config::DashboardConfig;
use crate::mca::data::{fetch_document, GeoDocument, McaResults};
use crate::mca::error::Result;
use crate::mca::series::{primary_charts, regional_map, summary_stats, ChartSpec};
use crate::mca::theme::is_known_class;

/// Page title shown in the header and the browser tab
const PAGE_TITLE: &str = "MCA Dashboard";

/// What a generation run produced
#[derive(Debug, Clone)]
pub struct DashboardResult {
    /// Where the page was written
    pub output_path: PathBuf,
    /// Number of charts on the final page
    pub n_charts: usize,
    /// Whether the regional section made it onto the page
    pub geo_included: bool,
}

/// Generate the dashboard page described by `config`
pub async fn generate_dashboard(config: &DashboardConfig) -> Result<DashboardResult> {
    let theme = config.to_theme();

    // Step 1: primary document
    let results_path = config.results_path();
    println!("[1/4] Loading results from {} ...", results_path.display());
    let results: McaResults = fetch_document(&results_path).await?;
    results.validate()?;
    println!(
        "✓ Results loaded: {} individuals, {} categories, {} clusters",
        results.individuals.len(),
        results.categories.len(),
        results.metadata.n_clusters
    );

    // Step 2: shape every primary chart
    println!("[2/4] Shaping chart series...");
    let stats = summary_stats(&results);
    let mut charts: Vec<ChartSpec> =
        primary_charts(&results, &config.label_position_cycle, &theme)?;
    println!("✓ {} charts shaped", charts.len());

    // Step 3: render and write the primary page
    println!("[3/4] Rendering page...");
    let html = crate::plotly_integration::render_page(PAGE_TITLE, &stats, &charts, &theme);
    tokio::fs::write(&config.output_path, &html).await?;
    println!("✓ Page written to {}", config.output_path.display());

    // Step 4: optional geographic overlay, strictly after the primary page
    let geo_path = config.geo_path();
    if !tokio::fs::try_exists(&geo_path).await.unwrap_or(false) {
        println!(
            "[4/4] No geographic document at {}, skipping regional map",
            geo_path.display()
        );
        return Ok(DashboardResult {
            output_path: config.output_path.clone(),
            n_charts: charts.len(),
            geo_included: false,
        });
    }

    println!("[4/4] Loading geography from {} ...", geo_path.display());
    let geo: GeoDocument = fetch_document(&geo_path).await?;
    for class_name in &geo.metadata.clases_disponibles {
        if !is_known_class(class_name) {
            eprintln!(
                "⚠ Predominant class '{}' has no assigned color, rendering gray",
                class_name
            );
        }
    }

    charts.push(regional_map(&geo, config.marker_size, &theme));
    let html = crate::plotly_integration::render_page(PAGE_TITLE, &stats, &charts, &theme);
    tokio::fs::write(&config.output_path, &html).await?;
    println!(
        "✓ Regional map added, {} regions across {} classes",
        geo.departamentos.len(),
        geo.metadata.clases_disponibles.len()
    );

    Ok(DashboardResult {
        output_path: config.output_path.clone(),
        n_charts: charts.len(),
        geo_included: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PropertyReader;
    use crate::mca::error::DashboardError;

    const RESULTS_JSON: &str = r#"{
        "eigenvalues": {
            "dim": [1, 2],
            "variance_percent": [30.0, 22.0],
            "cumulative_percent": [30.0, 52.0]
        },
        "individuals": {
            "id": [0, 1],
            "cluster": [1, 2],
            "dim1": [0.1, -0.2],
            "dim2": [1.0, 0.5],
            "dim3": [0.0, 0.1]
        },
        "categories": {
            "category": ["sexo__Masculino"],
            "dim1": [0.5],
            "dim2": [-0.5]
        },
        "clusters": { "sizes": { "1": 1, "2": 1 } },
        "metadata": { "n_clusters": 2 }
    }"#;

    const GEO_JSON: &str = r#"{
        "departamentos": [
            {
                "name": "Capital (Posadas)",
                "lat": -27.3671, "lon": -55.8961,
                "total_casos": 16,
                "clase_predominante": "Caza como estrategia"
            }
        ],
        "metadata": {
            "clases_disponibles": ["Caza como estrategia"]
        }
    }"#;

    fn config_for(dir: &std::path::Path) -> DashboardConfig {
        let data_dir = dir.to_string_lossy().to_string();
        let output = dir.join("dashboard.html").to_string_lossy().to_string();
        DashboardConfig::from_properties(&PropertyReader::from_pairs(&[
            ("data.dir", data_dir.as_str()),
            ("output", output.as_str()),
        ]))
    }

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("mca_dashboard_{}_{}", tag, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn generates_page_without_geography() {
        let dir = temp_dir("primary");
        std::fs::write(dir.join("mca_results.json"), RESULTS_JSON).unwrap();
        let _ = std::fs::remove_file(dir.join("geo_misiones.json"));

        let result = generate_dashboard(&config_for(&dir)).await.unwrap();
        assert!(!result.geo_included);
        assert_eq!(result.n_charts, 6);

        let html = std::fs::read_to_string(&result.output_path).unwrap();
        assert!(html.contains("scree-plot"));
        assert!(html.contains("cluster-distribution"));
        assert!(!html.contains("regional-map"));
    }

    #[tokio::test]
    async fn generates_page_with_geography() {
        let dir = temp_dir("geo");
        std::fs::write(dir.join("mca_results.json"), RESULTS_JSON).unwrap();
        std::fs::write(dir.join("geo_misiones.json"), GEO_JSON).unwrap();

        let result = generate_dashboard(&config_for(&dir)).await.unwrap();
        assert!(result.geo_included);
        assert_eq!(result.n_charts, 7);

        let html = std::fs::read_to_string(&result.output_path).unwrap();
        assert!(html.contains("regional-map"));
    }

    #[tokio::test]
    async fn missing_primary_document_is_a_fetch_error() {
        let dir = temp_dir("missing");
        let _ = std::fs::remove_file(dir.join("mca_results.json"));
        let err = generate_dashboard(&config_for(&dir)).await.unwrap_err();
        assert!(matches!(err, DashboardError::Fetch { .. }));
    }

    #[tokio::test]
    async fn malformed_primary_document_is_a_decode_error() {
        let dir = temp_dir("malformed");
        std::fs::write(dir.join("mca_results.json"), "{ not json").unwrap();
        let err = generate_dashboard(&config_for(&dir)).await.unwrap_err();
        assert!(matches!(err, DashboardError::Decode { .. }));
    }

    #[tokio::test]
    async fn malformed_geography_fails_but_leaves_primary_page() {
        let dir = temp_dir("geo_bad");
        std::fs::write(dir.join("mca_results.json"), RESULTS_JSON).unwrap();
        std::fs::write(dir.join("geo_misiones.json"), "[1, 2").unwrap();

        let config = config_for(&dir);
        let err = generate_dashboard(&config).await.unwrap_err();
        assert!(matches!(err, DashboardError::Decode { .. }));

        // Strict ordering: the primary page was already written
        let html = std::fs::read_to_string(&config.output_path).unwrap();
        assert!(html.contains("scree-plot"));
    }
}

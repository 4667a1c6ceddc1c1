//! Input model for the two result documents
//!
//! The structs here mirror the wire format of `mca_results.json` and the
//! optional `geo_misiones.json` exactly. Field names on the geographic
//! document are Spanish because the documents are the external contract —
//! they are produced by the analysis export step, not by this crate.
//!
//! Nothing in this module is mutated after decoding; the shaper only derives
//! new projections from it.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::error::{DashboardError, Result};

/// Primary results document: everything the dashboard needs except geography
#[derive(Debug, Clone, Deserialize)]
pub struct McaResults {
    pub eigenvalues: EigenvalueSeries,
    pub individuals: IndividualSet,
    pub categories: CategorySet,
    pub clusters: ClusterSummary,
    pub metadata: Metadata,
}

/// Per-dimension eigenvalues and explained variance
///
/// `dim`, `variance_percent` and `cumulative_percent` are parallel sequences;
/// `eigenvalue` carries the raw values and is allowed to be absent in older
/// exports.
#[derive(Debug, Clone, Deserialize)]
pub struct EigenvalueSeries {
    pub dim: Vec<u32>,
    #[serde(default)]
    pub eigenvalue: Vec<f64>,
    pub variance_percent: Vec<f64>,
    pub cumulative_percent: Vec<f64>,
}

/// Individuals with cluster assignment and factor coordinates
///
/// All five sequences are parallel: position i describes one individual.
#[derive(Debug, Clone, Deserialize)]
pub struct IndividualSet {
    pub id: Vec<i64>,
    pub cluster: Vec<u32>,
    pub dim1: Vec<f64>,
    pub dim2: Vec<f64>,
    pub dim3: Vec<f64>,
}

/// Category labels with factor coordinates
///
/// Labels follow the `"<variable>__<level>"` convention; see
/// [`crate::mca::shaper::CategoryName`] for the parse.
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySet {
    pub category: Vec<String>,
    pub dim1: Vec<f64>,
    pub dim2: Vec<f64>,
    #[serde(default)]
    pub dim3: Vec<f64>,
}

/// Cluster id → member count, keys are id strings on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterSummary {
    pub sizes: HashMap<String, u64>,
}

/// Run-level metadata from the export step
#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    pub n_clusters: u32,
    #[serde(default)]
    pub n_individuals: Option<usize>,
    #[serde(default)]
    pub n_categories: Option<usize>,
    #[serde(default)]
    pub active_variables: Vec<String>,
    #[serde(default)]
    pub total_inertia: Option<f64>,
}

/// Optional geographic document: one record per region
#[derive(Debug, Clone, Deserialize)]
pub struct GeoDocument {
    pub departamentos: Vec<GeoRegion>,
    pub metadata: GeoMetadata,
    #[serde(default)]
    pub summary: Option<GeoSummary>,
}

/// A single region: display name, centroid, case counts, predominant class
#[derive(Debug, Clone, Deserialize)]
pub struct GeoRegion {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    pub total_casos: u64,
    pub clase_predominante: String,
    #[serde(default)]
    pub departamento: Option<String>,
    #[serde(default)]
    pub clases_detalle: HashMap<String, u64>,
    #[serde(default)]
    pub cluster_counts: HashMap<String, u64>,
}

/// Geographic metadata; `clases_disponibles` is the authoritative ordered
/// list of known class names
#[derive(Debug, Clone, Deserialize)]
pub struct GeoMetadata {
    pub clases_disponibles: Vec<String>,
    #[serde(default)]
    pub provincia: Option<String>,
    #[serde(default)]
    pub pais: Option<String>,
}

/// Aggregate block the export step writes alongside the regions
#[derive(Debug, Clone, Deserialize)]
pub struct GeoSummary {
    #[serde(default)]
    pub total_casos: Option<u64>,
    #[serde(default)]
    pub departamentos: Option<usize>,
}

impl EigenvalueSeries {
    /// Check that the parallel sequences agree in length
    pub fn validate(&self) -> Result<()> {
        let n = self.dim.len();
        if self.variance_percent.len() != n || self.cumulative_percent.len() != n {
            return Err(DashboardError::ShapeMismatch {
                entity: "eigenvalues",
                detail: format!(
                    "dim={}, variance_percent={}, cumulative_percent={}",
                    n,
                    self.variance_percent.len(),
                    self.cumulative_percent.len()
                ),
            });
        }
        Ok(())
    }

    /// Number of dimensions
    pub fn len(&self) -> usize {
        self.dim.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.dim.is_empty()
    }
}

impl IndividualSet {
    /// Check that all five parallel sequences agree in length
    pub fn validate(&self) -> Result<()> {
        let n = self.id.len();
        if self.cluster.len() != n
            || self.dim1.len() != n
            || self.dim2.len() != n
            || self.dim3.len() != n
        {
            return Err(DashboardError::ShapeMismatch {
                entity: "individuals",
                detail: format!(
                    "id={}, cluster={}, dim1={}, dim2={}, dim3={}",
                    n,
                    self.cluster.len(),
                    self.dim1.len(),
                    self.dim2.len(),
                    self.dim3.len()
                ),
            });
        }
        Ok(())
    }

    /// Number of individuals
    pub fn len(&self) -> usize {
        self.id.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl CategorySet {
    /// Check that label and coordinate sequences agree in length
    ///
    /// `dim3` is optional on the wire and only validated when present.
    pub fn validate(&self) -> Result<()> {
        let n = self.category.len();
        if self.dim1.len() != n
            || self.dim2.len() != n
            || (!self.dim3.is_empty() && self.dim3.len() != n)
        {
            return Err(DashboardError::ShapeMismatch {
                entity: "categories",
                detail: format!(
                    "category={}, dim1={}, dim2={}, dim3={}",
                    n,
                    self.dim1.len(),
                    self.dim2.len(),
                    self.dim3.len()
                ),
            });
        }
        Ok(())
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.category.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.category.is_empty()
    }
}

impl McaResults {
    /// Fail-fast validation of every entity, before any chart is built
    pub fn validate(&self) -> Result<()> {
        self.eigenvalues.validate()?;
        self.individuals.validate()?;
        self.categories.validate()?;
        Ok(())
    }
}

/// Read and decode a JSON document from disk
///
/// I/O failures map to `Fetch`, parse failures to `Decode`. Both surface to
/// the user identically as "data could not be loaded" — the split exists so
/// the log line says which step failed.
pub async fn fetch_document<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| DashboardError::Fetch {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_slice(&bytes).map_err(|source| DashboardError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

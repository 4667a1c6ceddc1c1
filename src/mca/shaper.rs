//! Pure shaping of decoded MCA results into chart-ready groupings
//!
//! Every function here is a one-shot transform over already-materialized
//! in-memory data: identical input gives identical output, no side effects,
//! no state. Errors are returned immediately rather than producing a
//! partially-shaped result.

use std::collections::BTreeSet;

use super::data::{CategorySet, ClusterSummary, GeoRegion, IndividualSet};
use super::error::{DashboardError, Result};

/// Text anchor positions for de-overlapping point labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopCenter,
    BottomCenter,
    MiddleRight,
    MiddleLeft,
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl TextAnchor {
    /// The default eight-position cycle used by the dense scatter panels
    pub const DEFAULT_CYCLE: [TextAnchor; 8] = [
        TextAnchor::TopCenter,
        TextAnchor::BottomCenter,
        TextAnchor::MiddleRight,
        TextAnchor::MiddleLeft,
        TextAnchor::TopRight,
        TextAnchor::TopLeft,
        TextAnchor::BottomRight,
        TextAnchor::BottomLeft,
    ];

    /// Canonical name, e.g. "top center"
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::TopCenter => "top center",
            TextAnchor::BottomCenter => "bottom center",
            TextAnchor::MiddleRight => "middle right",
            TextAnchor::MiddleLeft => "middle left",
            TextAnchor::TopRight => "top right",
            TextAnchor::TopLeft => "top left",
            TextAnchor::BottomRight => "bottom right",
            TextAnchor::BottomLeft => "bottom left",
        }
    }

    /// Parse a canonical name back into an anchor (case-insensitive)
    pub fn parse(value: &str) -> Option<TextAnchor> {
        match value.trim().to_lowercase().as_str() {
            "top center" => Some(TextAnchor::TopCenter),
            "bottom center" => Some(TextAnchor::BottomCenter),
            "middle right" => Some(TextAnchor::MiddleRight),
            "middle left" => Some(TextAnchor::MiddleLeft),
            "top right" => Some(TextAnchor::TopRight),
            "top left" => Some(TextAnchor::TopLeft),
            "bottom right" => Some(TextAnchor::BottomRight),
            "bottom left" => Some(TextAnchor::BottomLeft),
            _ => None,
        }
    }
}

/// One cluster and the positions of its members in the input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterGroup {
    pub cluster: u32,
    pub indices: Vec<usize>,
}

/// Group individuals by cluster assignment
///
/// Cluster ids are the distinct values observed in `individuals.cluster`,
/// ascending. Each group's `indices` preserve the original insertion order,
/// so the union of all groups is a partition of `[0, N)`.
///
/// The grouping is recomputed at every call site on purpose: the factor map,
/// biplot and 3D panels each derive their own traces from the same input and
/// must stay independently deterministic.
pub fn group_individuals_by_cluster(individuals: &IndividualSet) -> Result<Vec<ClusterGroup>> {
    individuals.validate()?;

    let ids: BTreeSet<u32> = individuals.cluster.iter().copied().collect();

    Ok(ids
        .into_iter()
        .map(|cluster| ClusterGroup {
            cluster,
            indices: individuals
                .cluster
                .iter()
                .enumerate()
                .filter(|(_, c)| **c == cluster)
                .map(|(i, _)| i)
                .collect(),
        })
        .collect())
}

/// A category label parsed into its `"<variable>__<level>"` parts
///
/// When the delimiter is absent, `variable` is `None` and `level` is the
/// whole label. When the delimiter appears more than once, only the first
/// two parts count: `level` is exactly part index 1 and later parts are
/// discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryName<'a> {
    pub variable: Option<&'a str>,
    pub level: &'a str,
}

impl<'a> CategoryName<'a> {
    /// Split a raw label on the `"__"` delimiter
    pub fn parse(label: &'a str) -> CategoryName<'a> {
        let mut parts = label.split("__");
        let first = parts.next().unwrap_or(label);
        match parts.next() {
            Some(level) => CategoryName {
                variable: Some(first),
                level,
            },
            None => CategoryName {
                variable: None,
                level: label,
            },
        }
    }
}

/// True when the label marks a sentinel-missing category
///
/// The export step fills absent answers with a literal "Missing" level; the
/// test is a case-folded substring match so both `"sexo__Missing"` and any
/// plain `"missing"` label are caught.
pub fn is_missing_category(label: &str) -> bool {
    label.to_lowercase().contains("missing")
}

/// A retained (non-missing) category ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct RetainedCategory {
    /// Position in the original input
    pub index: usize,
    /// Level part of the label, or the whole label when undelimited
    pub display_name: String,
    pub dim1: f64,
    pub dim2: f64,
}

/// Drop sentinel-missing categories and derive display names
///
/// Input order is preserved for the retained entries.
pub fn filter_non_missing_categories(categories: &CategorySet) -> Result<Vec<RetainedCategory>> {
    categories.validate()?;

    Ok(categories
        .category
        .iter()
        .enumerate()
        .filter(|(_, label)| !is_missing_category(label))
        .map(|(index, label)| RetainedCategory {
            index,
            display_name: CategoryName::parse(label).level.to_string(),
            dim1: categories.dim1[index],
            dim2: categories.dim2[index],
        })
        .collect())
}

/// Assign a text anchor to each of `n` labels by cycling through `cycle`
///
/// A fixed round-robin heuristic, not adaptive layout: the i-th label gets
/// `cycle[i % cycle.len()]`. An empty cycle is a configuration error even
/// when `n` is zero.
pub fn assign_text_anchors(n: usize, cycle: &[TextAnchor]) -> Result<Vec<TextAnchor>> {
    if cycle.is_empty() {
        return Err(DashboardError::InvalidConfiguration(
            "label position cycle is empty".to_string(),
        ));
    }

    Ok((0..n).map(|i| cycle[i % cycle.len()]).collect())
}

/// Flatten the cluster-size mapping into `(id, count)` pairs, ascending by id
///
/// Ids arrive as strings on the wire; a key that does not parse as an
/// unsigned integer is a data error rather than a silently mis-sorted bar.
/// Zero counts are kept.
pub fn build_cluster_size_series(summary: &ClusterSummary) -> Result<Vec<(u32, u64)>> {
    let mut series: Vec<(u32, u64)> = summary
        .sizes
        .iter()
        .map(|(key, count)| {
            key.trim()
                .parse::<u32>()
                .map(|id| (id, *count))
                .map_err(|_| {
                    DashboardError::Data(format!("cluster size key '{}' is not an integer", key))
                })
        })
        .collect::<Result<_>>()?;

    series.sort_by_key(|(id, _)| *id);
    Ok(series)
}

/// One predominant class and the positions of its regions in the input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassGroup {
    pub class_name: String,
    pub indices: Vec<usize>,
}

/// Group regions by predominant class, in the externally supplied class order
///
/// `known_classes` is authoritative: every name yields a group, empty when no
/// region matches — skipping empty groups is the rendering boundary's call.
/// Region order is preserved within each group.
pub fn group_regions_by_predominant_class(
    regions: &[GeoRegion],
    known_classes: &[String],
) -> Vec<ClassGroup> {
    known_classes
        .iter()
        .map(|class_name| ClassGroup {
            class_name: class_name.clone(),
            indices: regions
                .iter()
                .enumerate()
                .filter(|(_, r)| r.clase_predominante == *class_name)
                .map(|(i, _)| i)
                .collect(),
        })
        .collect()
}

/// Marker sizing for the regional map: `sqrt(total_cases) * scale + offset`
///
/// Square-root compression keeps heavy-tailed case counts from dominating
/// the visual scale. Defaults reproduce the historical output exactly
/// (16 cases → 40.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSizeFormula {
    pub scale: f64,
    pub offset: f64,
}

impl Default for MarkerSizeFormula {
    fn default() -> Self {
        MarkerSizeFormula {
            scale: 8.0,
            offset: 8.0,
        }
    }
}

impl MarkerSizeFormula {
    /// Marker size for a region with the given total case count
    pub fn size_for(&self, total_cases: u64) -> f64 {
        (total_cases as f64).sqrt() * self.scale + self.offset
    }
}

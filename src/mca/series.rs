//! Chart-series descriptors and the per-panel builders
//!
//! A [`ChartSpec`] is the contract handed to the rendering collaborator: an
//! ordered list of series, each an ordered list of point records, plus the
//! chart-level options (titles, ranges, legend). The builders here contain
//! no drawing code — they reshape validated input entities through the
//! shaper functions and attach theme colors.
//!
//! The factor map, biplot and 3D builders each run the cluster grouping
//! themselves; there is no shared cache between panels.

use super::data::{
    CategorySet, ClusterSummary, EigenvalueSeries, GeoDocument, IndividualSet, McaResults,
};
use super::error::Result;
use super::shaper::{
    assign_text_anchors, build_cluster_size_series, filter_non_missing_categories,
    group_individuals_by_cluster, group_regions_by_predominant_class, MarkerSizeFormula,
    TextAnchor,
};
use super::theme::{class_color, DashboardTheme};

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesMode {
    Markers,
    MarkersText,
    LinesMarkers,
    Bars,
}

/// Marker glyph for a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerSymbol {
    #[default]
    Circle,
    Diamond,
}

/// One point of a series
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
    /// Third coordinate, present only in the 3D panel
    pub z: Option<f64>,
    /// Display or hover text for this point
    pub label: Option<String>,
    /// Label placement from the round-robin cycle
    pub anchor: Option<TextAnchor>,
    /// Per-point color override; series color applies when absent
    pub color: Option<String>,
    /// Per-point marker size override; series size applies when absent
    pub size: Option<f64>,
}

impl PointRecord {
    fn xy(x: f64, y: f64) -> Self {
        PointRecord {
            x,
            y,
            z: None,
            label: None,
            anchor: None,
            color: None,
            size: None,
        }
    }
}

/// One chart trace: points plus series-level styling
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDescriptor {
    pub name: String,
    pub mode: SeriesMode,
    pub color: String,
    pub marker_size: f64,
    pub marker_symbol: MarkerSymbol,
    pub opacity: Option<f64>,
    pub outline_color: String,
    pub outline_width: f64,
    /// Font size for on-point text labels
    pub text_size: Option<usize>,
    /// Plot against the secondary y-axis (scree cumulative line)
    pub on_secondary_y: bool,
    /// Categorical x values for bar series; numeric `x` is used when absent
    pub x_labels: Option<Vec<String>>,
    pub points: Vec<PointRecord>,
}

impl SeriesDescriptor {
    fn new(name: impl Into<String>, mode: SeriesMode, color: impl Into<String>) -> Self {
        SeriesDescriptor {
            name: name.into(),
            mode,
            color: color.into(),
            marker_size: 8.0,
            marker_symbol: MarkerSymbol::Circle,
            opacity: None,
            outline_color: String::new(),
            outline_width: 0.0,
            text_size: None,
            on_secondary_y: false,
            x_labels: None,
            points: Vec::new(),
        }
    }

    /// True when the series has nothing to draw; the rendering boundary
    /// skips these rather than emitting an empty trace
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Axis-level options
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisSpec {
    pub title: String,
    pub range: Option<(f64, f64)>,
    pub dtick: Option<f64>,
    pub zero_line: bool,
}

impl AxisSpec {
    fn titled(title: &str) -> Self {
        AxisSpec {
            title: title.to_string(),
            ..Default::default()
        }
    }
}

/// Dimensionality of a chart, as far as the renderer needs to know
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    TwoD,
    ThreeD,
}

/// A complete chart: series plus chart-level options
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Element id on the rendered page, e.g. "scree-plot"
    pub id: &'static str,
    pub title: String,
    pub kind: ChartKind,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    /// Secondary y-axis (right side), used by the scree plot
    pub y2_axis: Option<AxisSpec>,
    /// Third axis for the 3D panel
    pub z_axis: Option<AxisSpec>,
    pub show_legend: bool,
    pub height: Option<usize>,
    pub series: Vec<SeriesDescriptor>,
}

impl ChartSpec {
    fn new(id: &'static str, title: &str) -> Self {
        ChartSpec {
            id,
            title: title.to_string(),
            kind: ChartKind::TwoD,
            x_axis: AxisSpec::default(),
            y_axis: AxisSpec::default(),
            y2_axis: None,
            z_axis: None,
            show_legend: true,
            height: None,
            series: Vec::new(),
        }
    }
}

/// One entry of the summary strip above the charts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryStat {
    pub label: String,
    pub value: String,
}

/// Headline numbers for the page: counts and explained variance
///
/// The explained-variance entry reads the cumulative percentage of the
/// second dimension and is omitted when the run has fewer than two.
pub fn summary_stats(results: &McaResults) -> Vec<SummaryStat> {
    let mut stats = vec![
        SummaryStat {
            label: "Individuals".to_string(),
            value: results.individuals.len().to_string(),
        },
        SummaryStat {
            label: "Categories".to_string(),
            value: results.categories.len().to_string(),
        },
        SummaryStat {
            label: "Clusters".to_string(),
            value: results.metadata.n_clusters.to_string(),
        },
    ];

    if let Some(cum) = results.eigenvalues.cumulative_percent.get(1) {
        stats.push(SummaryStat {
            label: "Explained variance (dims 1-2)".to_string(),
            value: format!("{:.1}%", cum),
        });
    }

    stats
}

/// Scree plot: variance bars plus a cumulative line on a secondary axis
pub fn scree_plot(eigenvalues: &EigenvalueSeries, theme: &DashboardTheme) -> Result<ChartSpec> {
    eigenvalues.validate()?;

    let mut bars = SeriesDescriptor::new("Variance %", SeriesMode::Bars, theme.variance_bar_color);
    bars.points = eigenvalues
        .dim
        .iter()
        .zip(&eigenvalues.variance_percent)
        .map(|(dim, pct)| PointRecord {
            label: Some(format!("{:.2}%", pct)),
            ..PointRecord::xy(*dim as f64, *pct)
        })
        .collect();

    let mut line = SeriesDescriptor::new(
        "Cumulative %",
        SeriesMode::LinesMarkers,
        theme.cumulative_line_color,
    );
    line.on_secondary_y = true;
    line.points = eigenvalues
        .dim
        .iter()
        .zip(&eigenvalues.cumulative_percent)
        .map(|(dim, pct)| PointRecord::xy(*dim as f64, *pct))
        .collect();

    let mut chart = ChartSpec::new("scree-plot", "Eigenvalues and Explained Variance");
    chart.x_axis = AxisSpec {
        dtick: Some(1.0),
        ..AxisSpec::titled("Dimension")
    };
    chart.y_axis = AxisSpec::titled("Explained variance (%)");
    chart.y2_axis = Some(AxisSpec {
        range: Some((0.0, 100.0)),
        ..AxisSpec::titled("Cumulative variance (%)")
    });
    chart.series = vec![bars, line];
    Ok(chart)
}

/// Build one marker series per cluster over dimensions 1 and 2
fn cluster_scatter_series(
    individuals: &IndividualSet,
    theme: &DashboardTheme,
    marker_size: f64,
    opacity: Option<f64>,
    outline_width: f64,
    with_z: bool,
) -> Result<Vec<SeriesDescriptor>> {
    let groups = group_individuals_by_cluster(individuals)?;

    Ok(groups
        .into_iter()
        .map(|group| {
            let mut series = SeriesDescriptor::new(
                format!("Cluster {}", group.cluster),
                SeriesMode::Markers,
                theme.cluster_color(group.cluster),
            );
            series.marker_size = marker_size;
            series.opacity = opacity;
            series.outline_color = theme.marker_outline.to_string();
            series.outline_width = outline_width;
            series.points = group
                .indices
                .iter()
                .map(|&i| PointRecord {
                    z: with_z.then(|| individuals.dim3[i]),
                    label: Some(format!("Individual {} (cluster {})", i + 1, group.cluster)),
                    ..PointRecord::xy(individuals.dim1[i], individuals.dim2[i])
                })
                .collect();
            series
        })
        .collect())
}

/// Individuals factor map: one trace per cluster on dimensions 1 and 2
pub fn individuals_map(
    individuals: &IndividualSet,
    theme: &DashboardTheme,
) -> Result<ChartSpec> {
    let mut chart = ChartSpec::new("individuals-map", "Individuals Factor Map by Cluster");
    chart.x_axis = AxisSpec {
        zero_line: true,
        ..AxisSpec::titled("Dimension 1")
    };
    chart.y_axis = AxisSpec {
        zero_line: true,
        ..AxisSpec::titled("Dimension 2")
    };
    chart.series = cluster_scatter_series(individuals, theme, 8.0, None, 1.0, false)?;
    Ok(chart)
}

/// Category series with de-overlapped labels, shared by two panels
fn category_series(
    categories: &CategorySet,
    anchor_cycle: &[TextAnchor],
    theme: &DashboardTheme,
    marker_size: f64,
    marker_symbol: MarkerSymbol,
    outline_width: f64,
    text_size: usize,
) -> Result<SeriesDescriptor> {
    let retained = filter_non_missing_categories(categories)?;
    let anchors = assign_text_anchors(retained.len(), anchor_cycle)?;

    let mut series =
        SeriesDescriptor::new("Categories", SeriesMode::MarkersText, theme.category_color);
    series.marker_size = marker_size;
    series.marker_symbol = marker_symbol;
    series.outline_color = theme.accent_color.to_string();
    series.outline_width = outline_width;
    series.text_size = Some(text_size);
    series.points = retained
        .into_iter()
        .zip(anchors)
        .map(|(cat, anchor)| PointRecord {
            label: Some(cat.display_name),
            anchor: Some(anchor),
            ..PointRecord::xy(cat.dim1, cat.dim2)
        })
        .collect();
    Ok(series)
}

/// Categories factor map: retained categories with cycled label anchors
pub fn categories_map(
    categories: &CategorySet,
    anchor_cycle: &[TextAnchor],
    theme: &DashboardTheme,
) -> Result<ChartSpec> {
    let mut chart = ChartSpec::new("categories-map", "Variable Categories Factor Map");
    chart.x_axis = AxisSpec {
        zero_line: true,
        range: Some((-2.0, 3.0)),
        ..AxisSpec::titled("Dimension 1")
    };
    chart.y_axis = AxisSpec {
        zero_line: true,
        range: Some((-2.0, 3.5)),
        ..AxisSpec::titled("Dimension 2")
    };
    chart.show_legend = false;
    chart.height = Some(700);
    chart.series = vec![category_series(
        categories,
        anchor_cycle,
        theme,
        14.0,
        MarkerSymbol::Circle,
        2.0,
        8,
    )?];
    Ok(chart)
}

/// Biplot: dimmed per-cluster individuals overlaid with diamond categories
pub fn biplot(
    individuals: &IndividualSet,
    categories: &CategorySet,
    anchor_cycle: &[TextAnchor],
    theme: &DashboardTheme,
) -> Result<ChartSpec> {
    let mut chart = ChartSpec::new("biplot", "Biplot: Individuals and Categories");
    chart.x_axis = AxisSpec {
        zero_line: true,
        ..AxisSpec::titled("Dimension 1")
    };
    chart.y_axis = AxisSpec {
        zero_line: true,
        ..AxisSpec::titled("Dimension 2")
    };

    chart.series = cluster_scatter_series(individuals, theme, 6.0, Some(0.6), 0.5, false)?;
    chart.series.push(category_series(
        categories,
        anchor_cycle,
        theme,
        10.0,
        MarkerSymbol::Diamond,
        1.5,
        7,
    )?);
    Ok(chart)
}

/// 3D factor space: one trace per cluster over dimensions 1-3
pub fn factor_space_3d(
    individuals: &IndividualSet,
    theme: &DashboardTheme,
) -> Result<ChartSpec> {
    let mut chart = ChartSpec::new("plot-3d", "3D View of the Factor Space");
    chart.kind = ChartKind::ThreeD;
    chart.x_axis = AxisSpec::titled("Dimension 1");
    chart.y_axis = AxisSpec::titled("Dimension 2");
    chart.z_axis = Some(AxisSpec::titled("Dimension 3"));
    chart.series = cluster_scatter_series(individuals, theme, 5.0, None, 0.5, true)?;
    Ok(chart)
}

/// Cluster distribution: one bar per cluster id, ascending
pub fn cluster_distribution(
    clusters: &ClusterSummary,
    theme: &DashboardTheme,
) -> Result<ChartSpec> {
    let sizes = build_cluster_size_series(clusters)?;

    let mut bars = SeriesDescriptor::new("Individuals", SeriesMode::Bars, theme.variance_bar_color);
    bars.outline_color = theme.marker_outline.to_string();
    bars.outline_width = 2.0;
    bars.x_labels = Some(
        sizes
            .iter()
            .map(|(id, _)| format!("Cluster {}", id))
            .collect(),
    );
    bars.points = sizes
        .iter()
        .enumerate()
        .map(|(i, (id, count))| PointRecord {
            label: Some(format!("{} individuals", count)),
            color: Some(theme.cluster_color(*id).to_string()),
            ..PointRecord::xy(i as f64, *count as f64)
        })
        .collect();

    let mut chart = ChartSpec::new("cluster-distribution", "Individuals per Cluster");
    chart.x_axis = AxisSpec::titled("Cluster");
    chart.y_axis = AxisSpec::titled("Number of individuals");
    chart.show_legend = false;
    chart.series = vec![bars];
    Ok(chart)
}

/// Regional map: one lon/lat series per known class, sized by case count
///
/// Classes with no matching region still produce a (empty) series here; the
/// rendering boundary skips them. Unrecognized predominant-class names fall
/// back to the default gray.
pub fn regional_map(
    geo: &GeoDocument,
    formula: MarkerSizeFormula,
    theme: &DashboardTheme,
) -> ChartSpec {
    let groups =
        group_regions_by_predominant_class(&geo.departamentos, &geo.metadata.clases_disponibles);

    let mut chart = ChartSpec::new("regional-map", "Regional Distribution of Cases");
    chart.x_axis = AxisSpec {
        range: Some((-56.5, -53.3)),
        ..AxisSpec::titled("Longitude")
    };
    chart.y_axis = AxisSpec {
        range: Some((-28.5, -25.3)),
        ..AxisSpec::titled("Latitude")
    };
    chart.height = Some(650);
    chart.series = groups
        .into_iter()
        .map(|group| {
            let mut series = SeriesDescriptor::new(
                group.class_name.clone(),
                SeriesMode::MarkersText,
                class_color(&group.class_name),
            );
            series.opacity = Some(0.9);
            series.outline_color = theme.marker_outline.to_string();
            series.outline_width = 2.0;
            series.text_size = Some(9);
            series.points = group
                .indices
                .iter()
                .map(|&i| {
                    let region = &geo.departamentos[i];
                    PointRecord {
                        label: Some(region.name.clone()),
                        anchor: Some(TextAnchor::TopCenter),
                        size: Some(formula.size_for(region.total_casos)),
                        ..PointRecord::xy(region.lon, region.lat)
                    }
                })
                .collect();
            series
        })
        .collect();
    chart
}

/// Build every primary-document chart in page order
pub fn primary_charts(
    results: &McaResults,
    anchor_cycle: &[TextAnchor],
    theme: &DashboardTheme,
) -> Result<Vec<ChartSpec>> {
    Ok(vec![
        scree_plot(&results.eigenvalues, theme)?,
        individuals_map(&results.individuals, theme)?,
        categories_map(&results.categories, anchor_cycle, theme)?,
        biplot(&results.individuals, &results.categories, anchor_cycle, theme)?,
        factor_space_3d(&results.individuals, theme)?,
        cluster_distribution(&results.clusters, theme)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mca::error::DashboardError;
    use std::collections::HashMap;

    fn sample_results() -> McaResults {
        serde_json::from_str(
            r#"{
            "eigenvalues": {
                "dim": [1, 2, 3],
                "variance_percent": [30.0, 22.0, 8.0],
                "cumulative_percent": [30.0, 52.0, 60.0]
            },
            "individuals": {
                "id": [0, 1, 2, 3],
                "cluster": [2, 1, 2, 1],
                "dim1": [0.1, -0.2, 0.3, 0.0],
                "dim2": [1.0, 0.5, -0.5, 0.2],
                "dim3": [0.0, 0.1, 0.2, 0.3]
            },
            "categories": {
                "category": ["sexo__Masculino", "sexo__Missing", "rama__Caza"],
                "dim1": [0.5, 1.5, -0.7],
                "dim2": [-0.5, 2.0, 0.9]
            },
            "clusters": { "sizes": { "1": 2, "2": 2 } },
            "metadata": { "n_clusters": 2 }
        }"#,
        )
        .unwrap()
    }

    fn theme() -> DashboardTheme {
        DashboardTheme::dark()
    }

    #[test]
    fn summary_stats_cover_counts_and_variance() {
        let stats = summary_stats(&sample_results());
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].value, "4");
        assert_eq!(stats[1].value, "3");
        assert_eq!(stats[2].value, "2");
        assert_eq!(stats[3].value, "52.0%");
    }

    #[test]
    fn summary_stats_omit_variance_for_single_dimension() {
        let mut results = sample_results();
        results.eigenvalues.dim.truncate(1);
        results.eigenvalues.variance_percent.truncate(1);
        results.eigenvalues.cumulative_percent.truncate(1);
        let stats = summary_stats(&results);
        assert_eq!(stats.len(), 3);
    }

    #[test]
    fn scree_plot_has_bars_and_secondary_line() {
        let chart = scree_plot(&sample_results().eigenvalues, &theme()).unwrap();
        assert_eq!(chart.series.len(), 2);

        let bars = &chart.series[0];
        assert_eq!(bars.mode, SeriesMode::Bars);
        assert_eq!(bars.points[0].label.as_deref(), Some("30.00%"));
        assert!(!bars.on_secondary_y);

        let line = &chart.series[1];
        assert_eq!(line.mode, SeriesMode::LinesMarkers);
        assert!(line.on_secondary_y);
        assert_eq!(line.points[2].y, 60.0);
        assert_eq!(chart.y2_axis.as_ref().unwrap().range, Some((0.0, 100.0)));
    }

    #[test]
    fn individuals_map_has_one_series_per_cluster() {
        let chart = individuals_map(&sample_results().individuals, &theme()).unwrap();
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Cluster 1", "Cluster 2"]);

        // Cluster 1 members are input positions 1 and 3, in insertion order
        assert_eq!(chart.series[0].points.len(), 2);
        assert_eq!(chart.series[0].points[0].x, -0.2);
        assert_eq!(chart.series[0].color, "#3498db");
        assert_eq!(chart.series[1].color, "#2ecc71");
        assert_eq!(
            chart.series[0].points[0].label.as_deref(),
            Some("Individual 2 (cluster 1)")
        );
    }

    #[test]
    fn categories_map_filters_and_cycles_anchors() {
        let cycle = [TextAnchor::TopCenter, TextAnchor::BottomCenter];
        let chart = categories_map(&sample_results().categories, &cycle, &theme()).unwrap();
        assert_eq!(chart.series.len(), 1);

        let series = &chart.series[0];
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].label.as_deref(), Some("Masculino"));
        assert_eq!(series.points[1].label.as_deref(), Some("Caza"));
        assert_eq!(series.points[0].anchor, Some(TextAnchor::TopCenter));
        assert_eq!(series.points[1].anchor, Some(TextAnchor::BottomCenter));
        assert_eq!(chart.x_axis.range, Some((-2.0, 3.0)));
        assert_eq!(chart.y_axis.range, Some((-2.0, 3.5)));
        assert!(!chart.show_legend);
    }

    #[test]
    fn categories_map_rejects_empty_anchor_cycle() {
        assert!(matches!(
            categories_map(&sample_results().categories, &[], &theme()),
            Err(DashboardError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn biplot_appends_category_series_after_clusters() {
        let results = sample_results();
        let chart = biplot(
            &results.individuals,
            &results.categories,
            &TextAnchor::DEFAULT_CYCLE,
            &theme(),
        )
        .unwrap();

        assert_eq!(chart.series.len(), 3);
        assert_eq!(chart.series[0].name, "Cluster 1");
        assert_eq!(chart.series[0].opacity, Some(0.6));

        let cats = &chart.series[2];
        assert_eq!(cats.name, "Categories");
        assert_eq!(cats.marker_symbol, MarkerSymbol::Diamond);
        // The category anchor cycle restarts independently of the clusters
        assert_eq!(cats.points[0].anchor, Some(TextAnchor::TopCenter));
    }

    #[test]
    fn factor_space_3d_carries_z_coordinates() {
        let chart = factor_space_3d(&sample_results().individuals, &theme()).unwrap();
        assert_eq!(chart.kind, ChartKind::ThreeD);
        assert!(chart.z_axis.is_some());
        // Cluster 1 first member is input position 1
        assert_eq!(chart.series[0].points[0].z, Some(0.1));
    }

    #[test]
    fn cluster_distribution_orders_bars_by_id() {
        let mut sizes = HashMap::new();
        sizes.insert("3".to_string(), 5u64);
        sizes.insert("1".to_string(), 2u64);
        let chart = cluster_distribution(&ClusterSummary { sizes }, &theme()).unwrap();

        let bars = &chart.series[0];
        assert_eq!(
            bars.x_labels.as_deref(),
            Some(&["Cluster 1".to_string(), "Cluster 3".to_string()][..])
        );
        assert_eq!(bars.points[0].y, 2.0);
        assert_eq!(bars.points[0].label.as_deref(), Some("2 individuals"));
        // Per-bar colors follow cluster ids, not bar positions
        assert_eq!(bars.points[1].color.as_deref(), Some("#e74c3c"));
    }

    fn sample_geo() -> GeoDocument {
        serde_json::from_str(
            r#"{
            "departamentos": [
                {
                    "name": "Capital (Posadas)",
                    "lat": -27.3671, "lon": -55.8961,
                    "total_casos": 16,
                    "clase_predominante": "Caza como estrategia"
                },
                {
                    "name": "Eldorado",
                    "lat": -26.4167, "lon": -54.6167,
                    "total_casos": 4,
                    "clase_predominante": "Clase nueva"
                }
            ],
            "metadata": {
                "clases_disponibles": ["Caza como estrategia", "Caza como tactica", "Clase nueva"]
            }
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn regional_map_groups_follow_known_class_order() {
        let chart = regional_map(&sample_geo(), MarkerSizeFormula::default(), &theme());
        assert_eq!(chart.series.len(), 3);

        let first = &chart.series[0];
        assert_eq!(first.name, "Caza como estrategia");
        assert_eq!(first.color, "#e74c3c");
        assert_eq!(first.points[0].size, Some(40.0));
        assert_eq!(first.points[0].label.as_deref(), Some("Capital (Posadas)"));
        assert_eq!(first.points[0].anchor, Some(TextAnchor::TopCenter));

        // Known class with no regions: present but empty
        assert!(chart.series[1].is_empty());

        // Unrecognized class name renders gray
        assert_eq!(chart.series[2].color, crate::mca::theme::DEFAULT_CLASS_COLOR);
    }

    #[test]
    fn primary_charts_build_in_page_order() {
        let charts =
            primary_charts(&sample_results(), &TextAnchor::DEFAULT_CYCLE, &theme()).unwrap();
        let ids: Vec<&str> = charts.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "scree-plot",
                "individuals-map",
                "categories-map",
                "biplot",
                "plot-3d",
                "cluster-distribution"
            ]
        );
    }

    #[test]
    fn primary_charts_abort_on_first_shape_mismatch() {
        let mut results = sample_results();
        results.individuals.cluster.pop();
        assert!(matches!(
            primary_charts(&results, &TextAnchor::DEFAULT_CYCLE, &theme()),
            Err(DashboardError::ShapeMismatch { .. })
        ));
    }
}

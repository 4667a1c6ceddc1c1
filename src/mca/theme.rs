//! Dashboard themes: immutable palette, font and background values
//!
//! The historical renderers kept these as four sets of mutable globals, one
//! per script copy. Here a theme is a value selected by name and passed
//! explicitly into the series builders, so nothing can mutate chart colors
//! between panels.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Fallback color for a predominant class missing from the table
pub const DEFAULT_CLASS_COLOR: &str = "#95a5a6";

/// Predominant-class colors for the regional map
///
/// Keyed by the class names the export step emits. Lookups for unknown names
/// fall back to [`DEFAULT_CLASS_COLOR`]; the render boundary logs those.
static CLASS_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Caza como estrategia", "#e74c3c"),
        ("Caza como tactica", "#3498db"),
        ("Caza comb de lugareños", "#2ecc71"),
        ("Caza comb de extranjeros", "#9b59b6"),
        ("Caza comb de capitalinos", "#f39c12"),
    ])
});

/// Color for a predominant class, gray for unrecognized names
pub fn class_color(class_name: &str) -> &'static str {
    CLASS_COLORS
        .get(class_name)
        .copied()
        .unwrap_or(DEFAULT_CLASS_COLOR)
}

/// True when the class name has an explicit color assigned
pub fn is_known_class(class_name: &str) -> bool {
    CLASS_COLORS.contains_key(class_name)
}

/// An immutable set of colors, fonts and backgrounds for one dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardTheme {
    pub name: &'static str,
    /// Monospace stack used across all panels
    pub font_family: &'static str,
    pub font_size: usize,
    pub text_color: &'static str,
    pub paper_background: &'static str,
    pub plot_background: &'static str,
    pub grid_color: &'static str,
    /// Zero-line and label accent color
    pub accent_color: &'static str,
    /// Outline drawn around markers so neighbours stay distinguishable
    pub marker_outline: &'static str,
    /// Per-cluster colors; lookups wrap when a run has more clusters
    pub cluster_palette: &'static [&'static str],
    /// Marker color for category points in the factor map and biplot
    pub category_color: &'static str,
    /// Bar color for per-dimension variance in the scree plot
    pub variance_bar_color: &'static str,
    /// Line color for cumulative variance in the scree plot
    pub cumulative_line_color: &'static str,
    pub legend_background: &'static str,
}

const FONT_STACK: &str = "\"IBM Plex Mono\", \"Courier New\", monospace";

const CLUSTER_PALETTE: [&str; 4] = ["#3498db", "#2ecc71", "#e74c3c", "#f39c12"];

impl DashboardTheme {
    /// Dark theme, the default
    pub fn dark() -> Self {
        DashboardTheme {
            name: "dark",
            font_family: FONT_STACK,
            font_size: 12,
            text_color: "#e0e0e0",
            paper_background: "#151b23",
            plot_background: "#0a0e14",
            grid_color: "#2a3442",
            accent_color: "#D8D8D8",
            marker_outline: "#0a0e14",
            cluster_palette: &CLUSTER_PALETTE,
            category_color: "#9b59b6",
            variance_bar_color: "#3498db",
            cumulative_line_color: "#e74c3c",
            legend_background: "rgba(21, 27, 35, 0.8)",
        }
    }

    /// Light theme
    pub fn light() -> Self {
        DashboardTheme {
            name: "light",
            font_family: FONT_STACK,
            font_size: 12,
            text_color: "#24292f",
            paper_background: "#ffffff",
            plot_background: "#f6f8fa",
            grid_color: "#d0d7de",
            accent_color: "#57606a",
            marker_outline: "#ffffff",
            cluster_palette: &CLUSTER_PALETTE,
            category_color: "#8250df",
            variance_bar_color: "#0969da",
            cumulative_line_color: "#cf222e",
            legend_background: "rgba(255, 255, 255, 0.8)",
        }
    }

    /// Select a theme by name; unrecognized names fall back to dark
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Color for a cluster id (1-based); wraps past the palette end
    pub fn cluster_color(&self, cluster: u32) -> &'static str {
        let idx = cluster.saturating_sub(1) as usize;
        self.cluster_palette[idx % self.cluster_palette.len()]
    }
}

impl Default for DashboardTheme {
    fn default() -> Self {
        Self::dark()
    }
}

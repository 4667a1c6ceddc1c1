//! Dashboard configuration
//!
//! Configuration is read from environment variables (the CLI maps flags onto
//! them, see `main.rs`) through a small typed property reader with explicit
//! defaults. The recognized options are the theme name, the label-position
//! cycle, the marker-size formula coefficients, and the input/output paths.

use std::path::PathBuf;

use crate::mca::shaper::{MarkerSizeFormula, TextAnchor};
use crate::mca::theme::DashboardTheme;

/// Recognized properties and the environment variables backing them
const PROPERTY_VARS: [(&str, &str); 8] = [
    ("data.dir", "MCA_DATA_DIR"),
    ("results.file", "MCA_RESULTS_FILE"),
    ("geo.file", "MCA_GEO_FILE"),
    ("output", "MCA_OUTPUT"),
    ("theme", "MCA_THEME"),
    ("label.positions", "MCA_LABEL_POSITIONS"),
    ("marker.size.scale", "MCA_MARKER_SIZE_SCALE"),
    ("marker.size.offset", "MCA_MARKER_SIZE_OFFSET"),
];

/// Reads dashboard properties with type-safe conversions
pub struct PropertyReader {
    properties: Vec<(String, String)>,
}

impl PropertyReader {
    /// Collect the recognized properties from the environment
    pub fn from_env() -> Self {
        let properties = PROPERTY_VARS
            .iter()
            .filter_map(|(name, var)| std::env::var(var).ok().map(|v| (name.to_string(), v)))
            .collect();
        Self { properties }
    }

    /// Build from explicit name/value pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            properties: pairs
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Raw property value; `Some("")` means explicitly set to empty
    fn get_raw(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get string property with explicit default; empty counts as unset
    pub fn get_string(&self, name: &str, default: &str) -> String {
        match self.get_raw(name) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => default.to_string(),
        }
    }

    /// Get f64 property with validation and explicit default
    pub fn get_f64(&self, name: &str, default: f64) -> f64 {
        match self.get_raw(name) {
            Some(v) if !v.is_empty() => v.trim().parse::<f64>().unwrap_or_else(|_| {
                eprintln!(
                    "⚠ Invalid numeric value for '{}': '{}', using default: {}",
                    name, v, default
                );
                default
            }),
            _ => default,
        }
    }

    /// Get the label-position cycle
    ///
    /// Unset → the default eight-anchor cycle. Explicitly set → parsed as a
    /// comma-separated list; unrecognized names are warned about and
    /// skipped. An explicitly empty list is kept as empty — it surfaces as
    /// an `InvalidConfiguration` error at shaping time rather than being
    /// silently replaced.
    pub fn get_anchor_cycle(&self, name: &str) -> Vec<TextAnchor> {
        match self.get_raw(name) {
            None => TextAnchor::DEFAULT_CYCLE.to_vec(),
            Some(value) => value
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .filter_map(|part| {
                    TextAnchor::parse(part).or_else(|| {
                        eprintln!(
                            "⚠ Unknown label position '{}' in '{}', skipping",
                            part.trim(),
                            name
                        );
                        None
                    })
                })
                .collect(),
        }
    }
}

/// Resolved dashboard configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Directory holding the result documents
    pub data_dir: PathBuf,

    /// Primary results document file name
    pub results_file: String,

    /// Geographic document file name; the document itself is optional
    pub geo_file: String,

    /// Where the rendered page is written
    pub output_path: PathBuf,

    /// Theme name: "dark" or "light"
    pub theme: String,

    /// Anchor cycle for de-overlapping point labels
    pub label_position_cycle: Vec<TextAnchor>,

    /// Marker sizing for the regional map
    pub marker_size: MarkerSizeFormula,
}

impl DashboardConfig {
    /// Create config from a property reader; every default is explicit here
    pub fn from_properties(props: &PropertyReader) -> Self {
        // Theme: validated against the known names, defaulting on bad input
        let theme = props.get_string("theme", "dark");
        let theme = match theme.to_lowercase().as_str() {
            "dark" | "light" => theme,
            other => {
                eprintln!("⚠ Unknown theme '{}', using default: dark", other);
                "dark".to_string()
            }
        };

        let marker_size = MarkerSizeFormula {
            scale: props.get_f64("marker.size.scale", 8.0),
            offset: props.get_f64("marker.size.offset", 8.0),
        };

        Self {
            data_dir: PathBuf::from(props.get_string("data.dir", "data")),
            results_file: props.get_string("results.file", "mca_results.json"),
            geo_file: props.get_string("geo.file", "geo_misiones.json"),
            output_path: PathBuf::from(props.get_string("output", "dashboard.html")),
            theme,
            label_position_cycle: props.get_anchor_cycle("label.positions"),
            marker_size,
        }
    }

    /// Create config from the environment
    pub fn from_env() -> Self {
        Self::from_properties(&PropertyReader::from_env())
    }

    /// Path of the primary results document
    pub fn results_path(&self) -> PathBuf {
        self.data_dir.join(&self.results_file)
    }

    /// Path of the optional geographic document
    pub fn geo_path(&self) -> PathBuf {
        self.data_dir.join(&self.geo_file)
    }

    /// Resolve the configured theme name to its values
    pub fn to_theme(&self) -> DashboardTheme {
        DashboardTheme::by_name(&self.theme)
    }
}

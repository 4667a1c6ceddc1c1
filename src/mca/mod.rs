//! MCA result model and data shaping
//!
//! Everything between the decoded JSON documents and the rendering
//! collaborator lives here.
//!
//! Structure:
//! - `data.rs`: serde models of the two result documents plus validation
//! - `shaper.rs`: pure grouping/filter/anchor transforms
//! - `series.rs`: chart-series descriptors and per-panel builders
//! - `theme.rs`: immutable color/font/background values
//! - `error.rs`: error types

pub mod data;
pub mod error;
pub mod series;
pub mod shaper;
pub mod theme;

// Re-exports for convenience
pub use data::{GeoDocument, McaResults};
pub use error::{DashboardError, Result};
pub use shaper::{MarkerSizeFormula, TextAnchor};
pub use theme::DashboardTheme;

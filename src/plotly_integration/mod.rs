//! Plotly integration
//!
//! The rendering collaborator boundary: chart specs from `mca::series` go
//! in, inline-HTML Plotly figures and the assembled page come out. This is
//! the only module that talks to the charting library; everything above it
//! works on plain descriptors.
//!
//! Structure:
//! - `charts.rs`: series descriptors → Plotly traces and layouts
//! - `page.rs`: dashboard page assembly

pub mod charts;
pub mod page;

pub use charts::render_chart;
pub use page::render_page;

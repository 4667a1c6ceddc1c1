//! Conversion of chart specs into Plotly traces and layouts
//!
//! Descriptors keep exact values (marker sizes straight from the formula);
//! rounding to whole pixels happens here, at the drawing boundary. Series
//! with no points are skipped here too — empty groups are part of the
//! shaping contract, not of the drawn output.

use plotly::common::{AxisSide, Font, Line, Marker, MarkerSymbol as PlotlySymbol, Mode, Position, Title};
use plotly::layout::{Axis, Layout, LayoutScene, Legend};
use plotly::{Bar, Plot, Scatter, Scatter3D};

use crate::mca::series::{
    AxisSpec, ChartKind, ChartSpec, MarkerSymbol, SeriesDescriptor, SeriesMode,
};
use crate::mca::shaper::TextAnchor;
use crate::mca::theme::DashboardTheme;

/// Map a text anchor onto Plotly's label position
fn anchor_position(anchor: TextAnchor) -> Position {
    match anchor {
        TextAnchor::TopCenter => Position::TopCenter,
        TextAnchor::BottomCenter => Position::BottomCenter,
        TextAnchor::MiddleRight => Position::MiddleRight,
        TextAnchor::MiddleLeft => Position::MiddleLeft,
        TextAnchor::TopRight => Position::TopRight,
        TextAnchor::TopLeft => Position::TopLeft,
        TextAnchor::BottomRight => Position::BottomRight,
        TextAnchor::BottomLeft => Position::BottomLeft,
    }
}

/// Marker styling shared by every trace kind
fn marker_for(series: &SeriesDescriptor) -> Marker {
    let mut marker = Marker::new();

    // Per-point overrides win over the series values
    if series.points.iter().any(|p| p.size.is_some()) {
        marker = marker.size_array(
            series
                .points
                .iter()
                .map(|p| p.size.unwrap_or(series.marker_size).round() as usize)
                .collect(),
        );
    } else {
        marker = marker.size(series.marker_size.round() as usize);
    }

    if series.points.iter().any(|p| p.color.is_some()) {
        marker = marker.color_array(
            series
                .points
                .iter()
                .map(|p| p.color.clone().unwrap_or_else(|| series.color.clone()))
                .collect(),
        );
    } else {
        marker = marker.color(series.color.clone());
    }

    if let Some(opacity) = series.opacity {
        marker = marker.opacity(opacity);
    }
    if series.marker_symbol == MarkerSymbol::Diamond {
        marker = marker.symbol(PlotlySymbol::Diamond);
    }
    if series.outline_width > 0.0 {
        marker = marker.line(
            Line::new()
                .color(series.outline_color.clone())
                .width(series.outline_width),
        );
    }

    marker
}

fn point_labels(series: &SeriesDescriptor) -> Option<Vec<String>> {
    if series.points.iter().any(|p| p.label.is_some()) {
        Some(
            series
                .points
                .iter()
                .map(|p| p.label.clone().unwrap_or_default())
                .collect(),
        )
    } else {
        None
    }
}

/// Build a 2D scatter trace (markers, markers+text, or lines+markers)
pub fn scatter_trace(
    series: &SeriesDescriptor,
    theme: &DashboardTheme,
) -> Box<Scatter<f64, f64>> {
    let xs: Vec<f64> = series.points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = series.points.iter().map(|p| p.y).collect();

    let mode = match series.mode {
        SeriesMode::MarkersText => Mode::MarkersText,
        SeriesMode::LinesMarkers => Mode::LinesMarkers,
        _ => Mode::Markers,
    };

    let mut trace = Scatter::new(xs, ys)
        .mode(mode)
        .name(series.name.clone())
        .marker(marker_for(series));

    if series.mode == SeriesMode::LinesMarkers {
        trace = trace.line(Line::new().color(series.color.clone()).width(3.0));
    }
    if let Some(labels) = point_labels(series) {
        trace = trace.text_array(labels);
    }
    if series.mode == SeriesMode::MarkersText {
        trace = trace.text_position_array(
            series
                .points
                .iter()
                .map(|p| anchor_position(p.anchor.unwrap_or(TextAnchor::TopCenter)))
                .collect(),
        );
        let mut font = Font::new()
            .family(theme.font_family)
            .color(theme.accent_color);
        if let Some(size) = series.text_size {
            font = font.size(size);
        }
        trace = trace.text_font(font);
    }
    if series.on_secondary_y {
        trace = trace.y_axis("y2");
    }

    trace
}

/// Build a 3D scatter trace for the factor-space panel
pub fn scatter3d_trace(series: &SeriesDescriptor) -> Box<Scatter3D<f64, f64, f64>> {
    let xs: Vec<f64> = series.points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = series.points.iter().map(|p| p.y).collect();
    let zs: Vec<f64> = series.points.iter().map(|p| p.z.unwrap_or(0.0)).collect();

    let mut trace = Scatter3D::new(xs, ys, zs)
        .mode(Mode::Markers)
        .name(series.name.clone())
        .marker(marker_for(series));

    if let Some(labels) = point_labels(series) {
        trace = trace.text_array(labels);
    }

    trace
}

/// Build a bar trace with categorical x values
pub fn bar_trace(series: &SeriesDescriptor, x_labels: &[String]) -> Box<Bar<String, f64>> {
    let ys: Vec<f64> = series.points.iter().map(|p| p.y).collect();
    let mut trace = Bar::new(x_labels.to_vec(), ys)
        .name(series.name.clone())
        .marker(marker_for(series));
    if let Some(labels) = point_labels(series) {
        trace = trace.text_array(labels);
    }
    trace
}

/// Build a bar trace with numeric x values (scree plot dimensions)
pub fn numeric_bar_trace(series: &SeriesDescriptor) -> Box<Bar<f64, f64>> {
    let xs: Vec<f64> = series.points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = series.points.iter().map(|p| p.y).collect();
    let mut trace = Bar::new(xs, ys)
        .name(series.name.clone())
        .marker(marker_for(series));
    if let Some(labels) = point_labels(series) {
        trace = trace.text_array(labels);
    }
    trace
}

fn axis_from_spec(spec: &AxisSpec, theme: &DashboardTheme) -> Axis {
    let mut axis = Axis::new()
        .title(Title::with_text(spec.title.clone()))
        .grid_color(theme.grid_color);
    if let Some((lo, hi)) = spec.range {
        axis = axis.range(vec![lo, hi]);
    }
    if let Some(dtick) = spec.dtick {
        axis = axis.dtick(dtick);
    }
    if spec.zero_line {
        axis = axis
            .zero_line(true)
            .zero_line_color(theme.accent_color)
            .zero_line_width(2);
    }
    axis
}

fn layout_for(chart: &ChartSpec, theme: &DashboardTheme) -> Layout {
    let mut layout = Layout::new()
        .title(Title::with_text(chart.title.clone()))
        .font(
            Font::new()
                .family(theme.font_family)
                .size(theme.font_size)
                .color(theme.text_color),
        )
        .paper_background_color(theme.paper_background)
        .plot_background_color(theme.plot_background)
        .show_legend(chart.show_legend);

    if chart.show_legend {
        layout = layout.legend(Legend::new().background_color(theme.legend_background));
    }
    if let Some(height) = chart.height {
        layout = layout.height(height);
    }

    match chart.kind {
        ChartKind::TwoD => {
            layout = layout
                .x_axis(axis_from_spec(&chart.x_axis, theme))
                .y_axis(axis_from_spec(&chart.y_axis, theme));
            if let Some(y2) = &chart.y2_axis {
                layout = layout.y_axis2(
                    axis_from_spec(y2, theme)
                        .overlaying("y")
                        .side(AxisSide::Right),
                );
            }
        }
        ChartKind::ThreeD => {
            let mut scene = LayoutScene::new()
                .x_axis(axis_from_spec(&chart.x_axis, theme))
                .y_axis(axis_from_spec(&chart.y_axis, theme));
            if let Some(z) = &chart.z_axis {
                scene = scene.z_axis(axis_from_spec(z, theme));
            }
            layout = layout.scene(scene);
        }
    }

    layout
}

/// Render one chart spec into a Plotly figure
///
/// Series without points are skipped — the class grouping hands over empty
/// groups by contract and this boundary decides not to draw them.
pub fn render_chart(chart: &ChartSpec, theme: &DashboardTheme) -> Plot {
    let mut plot = Plot::new();

    for series in chart.series.iter().filter(|s| !s.is_empty()) {
        match (chart.kind, series.mode) {
            (ChartKind::ThreeD, _) => plot.add_trace(scatter3d_trace(series)),
            (_, SeriesMode::Bars) => match &series.x_labels {
                Some(labels) => plot.add_trace(bar_trace(series, labels)),
                None => plot.add_trace(numeric_bar_trace(series)),
            },
            _ => plot.add_trace(scatter_trace(series, theme)),
        }
    }

    plot.set_layout(layout_for(chart, theme));
    plot.set_configuration(
        plotly::Configuration::new()
            .responsive(true)
            .display_logo(false),
    );
    plot
}

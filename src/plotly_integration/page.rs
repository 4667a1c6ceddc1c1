//! Dashboard page assembly
//!
//! Joins the summary strip and the inline Plotly figures into one static
//! HTML page. The Plotly runtime is loaded from the CDN; everything else is
//! self-contained.

use build_html::*;

use crate::mca::series::{ChartSpec, SummaryStat};
use crate::mca::theme::DashboardTheme;
use crate::plotly_integration::charts::render_chart;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.0.min.js";

fn style_block(theme: &DashboardTheme) -> String {
    format!(
        "<style>\n\
         body {{ background: {paper}; color: {text}; font-family: {font}; margin: 0; padding: 24px; }}\n\
         h1 {{ font-size: 20px; font-weight: 600; }}\n\
         .summary-stats {{ display: flex; gap: 32px; margin: 16px 0 32px 0; }}\n\
         .stat-item {{ display: flex; flex-direction: column; }}\n\
         .stat-value {{ font-size: 24px; color: {accent}; }}\n\
         .stat-label {{ font-size: 12px; }}\n\
         .chart {{ margin-bottom: 48px; }}\n\
         </style>",
        paper = theme.paper_background,
        text = theme.text_color,
        font = theme.font_family,
        accent = theme.accent_color,
    )
}

fn stats_block(stats: &[SummaryStat]) -> String {
    let items: String = stats
        .iter()
        .map(|stat| {
            format!(
                "<div class=\"stat-item\"><span class=\"stat-value\">{}</span>\
                 <span class=\"stat-label\">{}</span></div>",
                stat.value, stat.label
            )
        })
        .collect();
    format!("<div class=\"summary-stats\">{}</div>", items)
}

/// Render the full dashboard page
pub fn render_page(
    title: &str,
    stats: &[SummaryStat],
    charts: &[ChartSpec],
    theme: &DashboardTheme,
) -> String {
    let mut page = HtmlPage::new()
        .with_title(title)
        .with_script_link(PLOTLY_CDN)
        .with_raw(style_block(theme))
        .with_raw(format!("<h1>{}</h1>", title))
        .with_raw(stats_block(stats));

    for chart in charts {
        let figure = render_chart(chart, theme);
        page = page.with_raw(format!(
            "<div class=\"chart\">{}</div>",
            figure.to_inline_html(Some(chart.id))
        ));
    }

    page.to_html_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mca::data::EigenvalueSeries;
    use crate::mca::series::scree_plot;

    #[test]
    fn page_contains_stats_charts_and_cdn_script() {
        let theme = DashboardTheme::dark();
        let eigen = EigenvalueSeries {
            dim: vec![1, 2],
            eigenvalue: vec![],
            variance_percent: vec![30.0, 22.0],
            cumulative_percent: vec![30.0, 52.0],
        };
        let charts = vec![scree_plot(&eigen, &theme).unwrap()];
        let stats = vec![SummaryStat {
            label: "Individuals".to_string(),
            value: "128".to_string(),
        }];

        let html = render_page("MCA Dashboard", &stats, &charts, &theme);
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("scree-plot"));
        assert!(html.contains("stat-value"));
        assert!(html.contains("128"));
        assert!(html.contains("MCA Dashboard"));
        // Theme background flows into the page style
        assert!(html.contains("#151b23"));
    }
}

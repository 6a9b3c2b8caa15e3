//! Rendering of the explorer screen.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, LineGauge, Paragraph,
        Wrap,
    },
    Frame,
};

use solow_core::chart::{ChartSpec, LineStyle};
use solow_core::summary::{PAGE_INTRO, PAGE_TITLE, SUMMARY_HEADING};
use solow_core::ParameterKind;

use crate::app::App;
use crate::theme::Palette;

/// Dots used to draw the dashed steady-state guide.
const GUIDE_DOTS: usize = 40;
const KEY_HELP: &str = "↑/↓ parâmetro  ←/→ ajustar  Shift+←/→ ×10  r restaurar  q sair";

pub fn draw(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());
    let [chart_area, side] =
        Layout::horizontal([Constraint::Percentage(68), Constraint::Percentage(32)]).areas(body);
    let slider_height = ParameterKind::ALL.len() as u16 * 2 + 2;
    let [sliders_area, summary_area] =
        Layout::vertical([Constraint::Length(slider_height), Constraint::Min(0)]).areas(side);

    draw_header(frame, app.palette(), header);
    draw_chart(frame, app, chart_area);
    draw_sliders(frame, app, sliders_area);
    draw_summary(frame, app, summary_area);
    draw_footer(frame, app, footer);
}

fn draw_header(frame: &mut Frame, palette: &Palette, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(PAGE_TITLE, palette.title_style())),
        Line::from(Span::styled(PAGE_INTRO, palette.muted_style())),
    ];
    let header = Paragraph::new(lines).block(
        Block::bordered()
            .borders(Borders::BOTTOM)
            .border_style(palette.border_style()),
    );
    frame.render_widget(header, area);
}

/// Points for the dashed vertical guide at `x`.
fn guide_points(x: f64, y_max: f64) -> Vec<(f64, f64)> {
    let step = y_max / GUIDE_DOTS as f64;
    (0..=GUIDE_DOTS).map(|i| (x, step * i as f64)).collect()
}

fn axis_labels(bounds: [f64; 2], precision: usize) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| format!("{v:.precision$}"))
        .collect()
}

fn draw_chart(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let chart: &ChartSpec = &app.session().snapshot().chart;

    let guide = chart
        .steady_state_guide
        .as_ref()
        .map(|guide| guide_points(guide.x, chart.y_bounds[1]))
        .unwrap_or_default();
    let marker: Vec<(f64, f64)> = chart
        .steady_state_marker
        .iter()
        .map(|marker| (marker.x, marker.y))
        .collect();

    let mut datasets: Vec<Dataset> = chart
        .series
        .iter()
        .map(|series| {
            Dataset::default()
                .name(series.label.as_str())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(palette.series(series.color)))
                .data(&series.points)
        })
        .collect();

    if let Some(steady_state_guide) = &chart.steady_state_guide {
        let guide_type = match steady_state_guide.style {
            LineStyle::Dashed => GraphType::Scatter,
            LineStyle::Solid => GraphType::Line,
        };
        datasets.push(
            Dataset::default()
                .name(steady_state_guide.label.as_str())
                .marker(Marker::Dot)
                .graph_type(guide_type)
                .style(Style::default().fg(palette.series(steady_state_guide.color)))
                .data(&guide),
        );
    }
    if let Some(steady_state_marker) = &chart.steady_state_marker {
        datasets.push(
            Dataset::default()
                .name(steady_state_marker.label.as_str())
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(palette.series(steady_state_marker.color)))
                .data(&marker),
        );
    }

    let widget = Chart::new(datasets)
        .block(
            Block::bordered()
                .title(Span::styled(chart.title.as_str(), palette.title_style()))
                .border_style(palette.border_style()),
        )
        .x_axis(
            Axis::default()
                .title(chart.x_label.as_str())
                .style(palette.muted_style())
                .bounds(chart.x_bounds)
                .labels(axis_labels(chart.x_bounds, 0)),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_label.as_str())
                .style(palette.muted_style())
                .bounds(chart.y_bounds)
                .labels(axis_labels(chart.y_bounds, 1)),
        )
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));
    frame.render_widget(widget, area);
}

fn draw_sliders(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let block = Block::bordered()
        .title(" Parâmetros ")
        .border_style(palette.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical(ParameterKind::ALL.iter().map(|_| Constraint::Length(2)))
        .split(inner);
    let params = app.session().params();

    for (kind, row) in ParameterKind::ALL.iter().zip(rows.iter()) {
        let spec = kind.spec();
        let value = params.get(*kind);
        let [label_area, gauge_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(*row);

        let selected = *kind == app.selected();
        let label_style = if selected {
            palette.selected_style()
        } else {
            Style::default().fg(palette.text_primary)
        };
        let label = Line::from(vec![
            Span::styled(if selected { "▶ " } else { "  " }, label_style),
            Span::styled(spec.label, label_style),
            Span::raw(" = "),
            Span::styled(spec.format(value), Style::default().fg(palette.primary)),
        ]);
        frame.render_widget(Paragraph::new(label), label_area);

        let gauge = LineGauge::default()
            .ratio(spec.ratio(value))
            .label(format!(
                "{}–{}",
                spec.format(spec.min),
                spec.format(spec.max)
            ))
            .filled_style(Style::default().fg(palette.primary))
            .unfilled_style(palette.muted_style());
        frame.render_widget(gauge, gauge_area);
    }
}

fn draw_summary(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let snapshot = app.session().snapshot();
    let mut lines = vec![
        Line::from(Span::styled(SUMMARY_HEADING, palette.title_style())),
        Line::default(),
    ];
    lines.extend(
        snapshot
            .summary
            .iter()
            .map(|line| Line::from(line.as_str())),
    );
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        snapshot.stability.as_str(),
        palette.muted_style(),
    )));
    if !snapshot.chart.steady_state_visible() {
        lines.push(Line::from(Span::styled(
            "k* fora do intervalo do gráfico",
            palette.muted_style(),
        )));
    }

    let summary = Paragraph::new(lines)
        .block(Block::bordered().border_style(palette.border_style()))
        .wrap(Wrap { trim: true });
    frame.render_widget(summary, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let line = match app.status() {
        Some(status) => Line::from(Span::styled(status, Style::default().fg(palette.error))),
        None => Line::from(Span::styled(KEY_HELP, palette.muted_style())),
    };
    frame.render_widget(Paragraph::new(line), area);
}

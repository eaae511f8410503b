//! UI layout and rendering: header, plane, and overlays.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::render::PlaneView;

/// Main draw function: full redraw every frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(app.header_rows()), Constraint::Min(0)])
        .split(area);

    // Keep the grid in sync with the area the plane is actually drawn into.
    app.plane.set_grid(chunks[1].width, chunks[1].height);

    draw_header(f, app, chunks[0]);

    let view = PlaneView::new(&app.plane, app.function())
        .glyphs(app.glyphs)
        .axis_style(app.theme.axis_style())
        .curve_style(app.theme.curve_style())
        .derivative_style(app.theme.derivative_style());
    let view = if app.show_derivative { view.derivative(app.derivative()) } else { view };
    f.render_widget(view, chunks[1]);

    if app.show_help {
        draw_help_overlay(f, area);
    }

    if app.show_entry {
        draw_entry_input(f, app, area);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let style = app.theme.header_style();
    let mut lines = vec![Line::styled(format!("f(x) = {}", app.function().describe()), style)];
    if app.show_derivative {
        lines.push(Line::styled(format!("f'(x) = {}", app.derivative().describe()), style));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let popup_width = 40;
    let popup_height = 17;

    let popup_area = Rect {
        x: (area.width.saturating_sub(popup_width)) / 2,
        y: (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width.min(area.width),
        height: popup_height.min(area.height),
    };

    f.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  trazar - terminal function plotter",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("    k, Up          Move up"),
        Line::from("    j, Down        Move down"),
        Line::from("    h, Left        Move left"),
        Line::from("    l, Right       Move right"),
        Line::from("    +              Zoom in"),
        Line::from("    -              Zoom out"),
        Line::from("    r              Restore view"),
        Line::from("    d              Show derivative"),
        Line::from("    f              New function"),
        Line::from("    m, ?           This help"),
        Line::from("    q, Esc         Quit"),
        Line::from(""),
        Line::from("  Press any key to close"),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(help, popup_area);
}

fn draw_entry_input(f: &mut Frame, app: &App, area: Rect) {
    let input_width = 50;
    let input_height = if app.entry_error.is_some() { 4 } else { 3 };

    // Clamp to the frame: on a very short terminal the centered rect would
    // otherwise extend past the bottom row and index outside the buffer.
    let input_area = Rect {
        x: (area.width.saturating_sub(input_width)) / 2,
        y: area.height / 2,
        width: input_width.min(area.width),
        height: input_height.min(area.height),
    }
    .intersection(area);

    f.render_widget(Clear, input_area);

    let mut lines = vec![Line::from(app.entry.as_str())];
    if let Some(err) = &app.entry_error {
        lines.push(Line::styled(
            format!("{err} (try again)"),
            Style::default().fg(Color::Red),
        ));
    }

    let input = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" f(x) = (Enter to plot, Esc to cancel) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(input, input_area);
}

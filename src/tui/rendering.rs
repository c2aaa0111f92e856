use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{
        Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Scrollbar,
        ScrollbarOrientation, Wrap,
    },
    Frame,
};

use super::app::App;
use super::models::ProcessingStatus;
use super::utils::centered_rect;

pub fn ui(f: &mut Frame, app: &App) {
    render_main_screen(f, f.area(), app);

    if app.show_help {
        render_help_popup(f, app);
    }
}

pub fn render_main_screen(f: &mut Frame, area: Rect, app: &App) {
    let chunks = if app.show_preview {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100)])
            .split(area)
    };

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(chunks[0]);

    render_header(f, left_chunks[0], app);
    render_file_list(f, left_chunks[1], app);
    render_status_bar(f, left_chunks[2], app);

    if app.show_preview && chunks.len() > 1 {
        render_preview_panel(f, chunks[1], app);
    }
}

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.apply_error.is_some() {
        "Season Renamer - Stopped on error"
    } else if app.finished {
        "Season Renamer - Completed!"
    } else {
        "Season Renamer - Review plan"
    };

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::White))
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn status_label(status: &ProcessingStatus) -> (&'static str, Color) {
    match status {
        ProcessingStatus::Pending => ("[PENDING]", Color::Yellow),
        ProcessingStatus::Success => ("[RENAMED]", Color::Green),
        ProcessingStatus::Unchanged => ("[UNCHANGED]", Color::Gray),
        ProcessingStatus::Error => ("[ERROR]", Color::Red),
        ProcessingStatus::Skipped => ("[SKIPPED]", Color::DarkGray),
    }
}

pub fn render_file_list(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| {
            let (icon, color) = status_label(&file.status);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(color)),
                Span::styled(file.source_name().to_string(), Style::default().fg(Color::White)),
                Span::styled(" -> ", Style::default().fg(Color::Gray)),
                Span::styled(
                    file.target_name().to_string(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let files_list = List::new(items)
        .block(
            Block::default()
                .title(format!("Rename plan ({} files)", app.files.len()))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::White))
                .border_style(Style::default().fg(Color::Blue)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(files_list, area, &mut app.list_state.clone());

    if app.files.len() > area.height.saturating_sub(2) as usize {
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("^"))
            .end_symbol(Some("v"));

        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut app.scroll_state.clone(),
        );
    }
}

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let progress_label = if app.apply_error.is_some() {
        format!(
            "Stopped: {} renamed, {} failed, {} skipped",
            app.stats.successful,
            app.stats.failed,
            app.stats.total - app.stats.processed
        )
    } else if app.finished {
        format!(
            "Complete! {} renamed, {} unchanged",
            app.stats.successful, app.stats.unchanged
        )
    } else {
        format!("Ready to rename {} files", app.stats.total)
    };

    let progress_style = if app.apply_error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(progress_style)
        .ratio(app.processing_progress.clamp(0.0, 1.0))
        .label(progress_label);

    f.render_widget(progress, chunks[0]);

    let controls_text = if app.finished {
        "h for help, q to quit"
    } else {
        "ENTER to rename, h for help, q to cancel"
    };

    let controls = Paragraph::new(controls_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    f.render_widget(controls, chunks[1]);
}

pub fn render_preview_panel(f: &mut Frame, area: Rect, app: &App) {
    let Some(file) = app.list_state.selected().and_then(|i| app.files.get(i)) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let original = Paragraph::new(Text::from(vec![
        Line::from("Original:"),
        Line::from(Span::styled(
            file.rename.source.clone(),
            Style::default().fg(Color::Red),
        )),
    ]))
    .block(
        Block::default()
            .title("Before")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    )
    .wrap(Wrap { trim: true });

    f.render_widget(original, chunks[0]);

    let new_style = match file.status {
        ProcessingStatus::Success => Style::default().fg(Color::Green),
        ProcessingStatus::Error => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Yellow),
    };

    let mut new_lines = vec![
        Line::from("New:"),
        Line::from(Span::styled(file.rename.target.clone(), new_style)),
    ];

    if let Some(error) = &file.error_message {
        new_lines.push(Line::from(""));
        new_lines.push(Line::from(Span::styled(
            format!("Error: {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    let new = Paragraph::new(Text::from(new_lines))
        .block(
            Block::default()
                .title("After")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(new, chunks[1]);
}

pub fn render_help_popup(f: &mut Frame, _app: &App) {
    let popup_area = centered_rect(60, 50, f.area());

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Season Renamer - Help",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  Up/k    - Move up"),
        Line::from("  Down/j  - Move down"),
        Line::from(""),
        Line::from("Actions:"),
        Line::from("  Enter/y - Rename all files in plan order"),
        Line::from("  p       - Toggle preview panel"),
        Line::from("  h/F1    - Toggle this help"),
        Line::from("  q/Esc   - Quit without renaming"),
        Line::from(""),
        Line::from("Renaming stops at the first failure; files"),
        Line::from("renamed before it keep their new names."),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press Esc or h to close",
            Style::default().fg(Color::Gray),
        )]),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}

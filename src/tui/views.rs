//! TUI views and rendering

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use super::state::{AppState, InteractionMode};

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    let feedback_height = if state.show_feedback() { 1 } else { 0 };
    let detail_height = if expanded_task(state).is_some() { 6 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(3),               // Input + search bars
            Constraint::Length(feedback_height), // Validation feedback
            Constraint::Min(0),                  // Task list
            Constraint::Length(detail_height),   // Expanded detail
            Constraint::Length(3),               // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);
    render_bars(state, frame, chunks[1]);
    if state.show_feedback() {
        render_feedback(state, frame, chunks[2]);
    }
    render_task_list(state, frame, chunks[3]);
    render_detail(state, frame, chunks[4]);
    render_footer(state, frame, chunks[5]);

    if state.interaction_mode == InteractionMode::Help {
        render_help_overlay(frame, chunks[3]);
    }
}

/// The expanded task, if it is still in the list
fn expanded_task<'a>(state: &'a AppState) -> Option<&'a crate::domain::Task> {
    state.expanded.and_then(|id| state.store.get(id))
}

/// Render the header bar
fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let total = state.store.len();
    let done = state.store.tasks().iter().filter(|t| t.is_completed).count();
    let finished_label = if state.show_finished { "finished only" } else { "all" };

    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "TaskMate ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(format!("{} tasks", total), Style::default().fg(Color::Yellow)),
        Span::raw(" │ "),
        Span::styled(format!("{} done", done), Style::default().fg(Color::Green)),
        Span::raw(" │ "),
        Span::styled(format!("showing: {}", finished_label), Style::default().fg(Color::Blue)),
    ])])
    .block(Block::default().borders(Borders::ALL).title(" Status "));

    frame.render_widget(header, area);
}

/// Render the add-input and search bars side by side
fn render_bars(state: &AppState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let input_active = state.interaction_mode == InteractionMode::Input;
    let input_style = if input_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input_text = if input_active {
        format!("{}█", state.store.pending_input())
    } else if state.store.pending_input().is_empty() {
        "Add your Todos...".to_string()
    } else {
        state.store.pending_input().to_string()
    };
    let input = Paragraph::new(input_text)
        .style(input_style)
        .block(Block::default().borders(Borders::ALL).title(" Add a Todo "));
    frame.render_widget(input, chunks[0]);

    let search_active = state.interaction_mode == InteractionMode::Search;
    let search_style = if search_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let search_text = if search_active {
        format!("{}█", state.search_text)
    } else if state.search_text.is_empty() {
        "Search...".to_string()
    } else {
        state.search_text.clone()
    };
    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(Block::default().borders(Borders::ALL).title(" Search "));
    frame.render_widget(search, chunks[1]);
}

/// Render the inline validation message
fn render_feedback(state: &AppState, frame: &mut Frame, area: Rect) {
    if let Some(err) = state.store.validation_error() {
        let feedback = Paragraph::new(err.to_string()).style(Style::default().fg(Color::Red));
        frame.render_widget(feedback, area);
    }
}

/// Render the task list
fn render_task_list(state: &AppState, frame: &mut Frame, area: Rect) {
    let visible = state.visible_tasks();

    if visible.is_empty() {
        let placeholder = Paragraph::new("You have no tasks")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Todos "));
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let marker = if task.is_completed { "[x] " } else { "[ ] " };
            let title_style = if task.is_completed {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(task.title.clone(), title_style),
            ];
            if state.expanded == Some(task.id) {
                spans.push(Span::styled(" ▾", Style::default().fg(Color::Cyan)));
            }

            let content = Line::from(spans);
            if i == state.selection.selected_index {
                ListItem::new(content).style(Style::default().bg(Color::DarkGray))
            } else {
                ListItem::new(content)
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Todos "));
    frame.render_widget(list, area);
}

/// Render the expanded detail pane
fn render_detail(state: &AppState, frame: &mut Frame, area: Rect) {
    let Some(task) = expanded_task(state) else {
        return;
    };

    let description = if task.description.is_empty() {
        "(no description)"
    } else {
        task.description.as_str()
    };

    let content = vec![
        Line::from(vec![
            Span::styled("Description: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(description),
        ]),
        Line::from(vec![
            Span::styled("Last Updated: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(task.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        ]),
        Line::from(vec![
            Span::styled("Id: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(task.id.to_string(), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let detail = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(" Detail "))
        .wrap(Wrap { trim: true });

    frame.render_widget(detail, area);
}

/// Render the footer with key hints for the current mode
fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let hints = match state.interaction_mode {
        InteractionMode::Normal => {
            "a add │ e edit │ d delete │ space toggle │ enter expand │ / search │ f finished │ ? help │ q quit"
        }
        InteractionMode::Input => "enter submit │ esc back",
        InteractionMode::Search => "enter apply │ esc clear",
        InteractionMode::Help => "esc close",
    };

    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

/// Render the help overlay on top of the list area
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled("Keys", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("  j/k, ↑/↓     move selection"),
        Line::from("  g/G          first/last task"),
        Line::from("  a, n         add a new task"),
        Line::from("  e            edit selected (moves title to input)"),
        Line::from("  d, x         delete selected"),
        Line::from("  space        toggle completed"),
        Line::from("  enter        expand/collapse detail"),
        Line::from("  /            search titles"),
        Line::from("  f            toggle the Show Finished filter"),
        Line::from("  esc          clear search"),
        Line::from("  q, ctrl-c    quit"),
    ];

    let help = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));
    frame.render_widget(help, popup);
}

/// Centered sub-rectangle with percentage size
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

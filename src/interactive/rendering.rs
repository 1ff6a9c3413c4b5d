//! TUI rendering with ratatui
//!
//! Layout for the anagram game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::length_badge;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Board
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Board: root word and finds on the left, score and messages right
    let board = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, board[0]);
    render_info_panel(f, app, board[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 SCRAMBLE - Anagram Word Game")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Root word
            Constraint::Min(5),    // Found words
        ])
        .split(area);

    render_root(f, app, chunks[0]);
    render_found_words(f, app, chunks[1]);
}

fn render_root(f: &mut Frame, app: &App, area: Rect) {
    let letters = app
        .session
        .pool()
        .letter_counts()
        .into_iter()
        .map(|(ch, n)| {
            if n > 1 {
                format!("{ch}×{n}")
            } else {
                ch.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let content = vec![
        Line::from(vec![
            Span::raw("Root:    "),
            Span::styled(
                app.session.root().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Letters: {letters}")),
        Line::from(format!("Findable: {} words", app.findable)),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Root Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_found_words(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.used().len();
    let items: Vec<ListItem> = app
        .session
        .used()
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let length = word.chars().count();
            // The i-th newest word was accepted when the list held total - i
            // words, which fixes the points it earned
            let points = (total - i) * length;
            let content = format!("{} {word}  +{points}", length_badge(length));
            ListItem::new(content)
        })
        .collect();

    let title = format!(" Found Words ({total}) ");
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Score
            Constraint::Length(3), // Round progress gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_round_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Score:  "),
            Span::styled(
                app.session.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Words:  {}", app.session.used().len())),
        Line::from(format!("Best:   {}", app.stats.best_score)),
        Line::from(format!("Rounds: {}", app.stats.rounds_played)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_round_progress(f: &mut Frame, app: &App, area: Rect) {
    let found = app.session.used().len();
    let progress_pct = if app.findable > 0 {
        // Cast is safe: the ratio is clamped to [0, 100]
        ((found as f64 / app.findable as f64 * 100.0).min(100.0)) as u16
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Round Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{found}/{} words found", app.findable));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    // Newest at the top; add_message caps the backlog
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| ListItem::new(msg.text.clone()).style(message_style(msg.style)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn message_style(style: MessageStyle) -> Style {
    match style {
        MessageStyle::Info => Style::default().fg(Color::White),
        MessageStyle::Success => Style::default().fg(Color::Green),
        MessageStyle::Error => Style::default().fg(Color::Red),
    }
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Notice => {
            let notice = app
                .notice
                .as_ref()
                .expect("notice mode always carries a notice");
            (
                format!(" ⚠ {} | press any key ", notice.title),
                notice.message.as_str(),
                Color::Red,
            )
        }
        InputMode::Editing => (
            " Type a word | Enter: submit | Esc: clear ".to_string(),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().fg(color));
    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(block);

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let round_text = format!("Round {}", app.stats.rounds_played);
    let round = Paragraph::new(round_text).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let score_text = format!(
        "Score: {} | Best: {}",
        app.session.score(),
        app.stats.best_score
    );
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[1]);

    let found_text = format!("Found: {}/{}", app.session.used().len(), app.findable);
    let found = Paragraph::new(found_text).alignment(Alignment::Center);
    f.render_widget(found, chunks[2]);

    let help = Paragraph::new("Ctrl-N: New Round | Ctrl-Q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

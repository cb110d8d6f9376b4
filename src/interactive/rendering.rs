//! TUI rendering with ratatui
//!
//! Board, progress and word panels for the jumble interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{letter_tiles, masked_word};
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
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 JUMBLE - Find Every Hidden Word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Letters
            Constraint::Min(5),    // Answers
        ])
        .split(area);

    render_scramble(f, app, chunks[0]);
    render_answers(f, app, chunks[1]);
}

fn render_scramble(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            letter_tiles(app.game.scramble()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_answers(f: &mut Frame, app: &App, area: Rect) {
    let reveal = app.input_mode == InputMode::Completed;

    let spans: Vec<Span> = app
        .game
        .sub_words()
        .iter()
        .flat_map(|sub_word| {
            let cell = if sub_word.guessed {
                Span::styled(
                    sub_word.word.to_uppercase(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else if reveal {
                Span::styled(
                    sub_word.word.to_uppercase(),
                    Style::default().fg(Color::DarkGray),
                )
            } else {
                Span::styled(
                    masked_word(sub_word.word.chars().count()),
                    Style::default().fg(Color::DarkGray),
                )
            };
            [cell, Span::raw("   ")]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title(format!(" Words ({} letters or more) ", app.game.min_length()))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.game.total_words();
    let found = app.found_count();
    let progress_pct = if total == 0 {
        100
    } else {
        u16::try_from(found * 100 / total).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{found}/{total} words found"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Completed => (
            " 🎉 ALL WORDS FOUND! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type a word and press Enter | TAB to shuffle letters ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let games = Paragraph::new(format!(
        "Games: {} | Cleared: {}",
        app.stats.games_started, app.stats.games_completed
    ))
    .alignment(Alignment::Center);
    f.render_widget(games, chunks[0]);

    let accuracy = Paragraph::new(format!("Accuracy: {:.0}%", app.stats.accuracy()))
        .alignment(Alignment::Center);
    f.render_widget(accuracy, chunks[1]);

    let remaining = Paragraph::new(format!("Remaining: {}", app.game.remaining_words()))
        .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Completed => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Ctrl-N: New | TAB: Shuffle",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

mod game_over;
mod play;
mod scoreboard;
mod title;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::{Scene, View};

pub fn render(frame: &mut Frame, app: &App) {
    let view = app.game.view();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(" 🧱 Fakeout ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(255, 100, 100))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Scoreboard
            Constraint::Min(0),    // Screen
            Constraint::Length(1), // Help
        ])
        .split(inner);

    scoreboard::render_scoreboard(frame, &view, chunks[0]);

    match view.scene {
        Scene::Title => title::render_title(frame, chunks[1]),
        Scene::Play => play::render_play(frame, &view, chunks[1]),
        Scene::GameOver => game_over::render_game_over(frame, &view, chunks[1]),
    }

    render_help(frame, &view, chunks[2]);
}

fn render_help(frame: &mut Frame, view: &View, area: Rect) {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let sep = Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60)));

    let mut spans = match view.scene {
        Scene::Title | Scene::GameOver => vec![
            Span::styled(" ENTER ", key),
            Span::styled("Play ", dim),
            sep.clone(),
        ],
        Scene::Play => {
            let mut spans = vec![Span::styled(" ←→ ", key), Span::styled("Move Bat ", dim), sep.clone()];
            if view.ball_in_play().is_none() {
                spans.push(Span::styled("SPACE ", key));
                spans.push(Span::styled("Serve ", dim));
                spans.push(sep.clone());
            }
            spans
        }
    };
    spans.push(Span::styled("Q ", key));
    spans.push(Span::styled("Quit", dim));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

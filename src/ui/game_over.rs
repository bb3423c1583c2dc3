use ratatui::prelude::*;
use ratatui::widgets::*;

use super::scoreboard::padded_score;
use crate::game::View;

pub fn render_game_over(frame: &mut Frame, view: &View, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..area.height.saturating_sub(7) / 3 {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "💀 GAME OVER",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Final score ", Style::default().fg(Color::Gray)),
        Span::styled(
            padded_score(view.score),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  on level {}", view.level), Style::default().fg(Color::Gray)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Are you a bad enough dude to play again? (Press Enter)",
        Style::default().fg(Color::White),
    )));

    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::Rgb(10, 10, 20)));
    frame.render_widget(p, area);
}

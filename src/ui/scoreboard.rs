use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::View;

/// Score as shown on the board: always ten digits.
pub fn padded_score(score: u32) -> String {
    format!("{score:010}")
}

pub fn render_scoreboard(frame: &mut Frame, view: &View, area: Rect) {
    let sep = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
    let status = Line::from(vec![
        Span::styled(
            format!(" Score: {} ", padded_score(view.score)),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled(
            format!("Lives: {} ", view.lives),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        sep,
        Span::styled(format!("Level: {} ", view.level), Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_zero_padded_to_ten_digits() {
        assert_eq!(padded_score(0), "0000000000");
        assert_eq!(padded_score(40), "0000000040");
        assert_eq!(padded_score(u32::MAX), "4294967295");
    }
}

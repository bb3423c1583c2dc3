use ratatui::prelude::*;
use ratatui::widgets::*;

const BANNER: &str = r#"
███████╗  █████╗  ██╗  ██╗ ███████╗  ██████╗  ██╗   ██╗ ████████╗
██╔════╝ ██╔══██╗ ██║ ██╔╝ ██╔════╝ ██╔═══██╗ ██║   ██║ ╚══██╔══╝
█████╗   ███████║ █████╔╝  █████╗   ██║   ██║ ██║   ██║    ██║
██╔══╝   ██╔══██║ ██╔═██╗  ██╔══╝   ██║   ██║ ██║   ██║    ██║
██║      ██║  ██║ ██║  ██╗ ███████╗ ╚██████╔╝ ╚██████╔╝    ██║
╚═╝      ╚═╝  ╚═╝ ╚═╝  ╚═╝ ╚══════╝  ╚═════╝   ╚═════╝     ╚═╝"#;

pub fn render_title(frame: &mut Frame, area: Rect) {
    let banner_style = Style::default()
        .fg(Color::Rgb(255, 100, 100))
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    let banner_height = BANNER.lines().count() as u16 + 5;
    for _ in 0..area.height.saturating_sub(banner_height) / 2 {
        lines.push(Line::from(""));
    }
    // Too narrow for the banner: fall back to plain text
    if area.width >= 66 {
        for row in BANNER.lines() {
            lines.push(Line::from(Span::styled(row, banner_style)));
        }
    } else {
        lines.push(Line::from(Span::styled("F A K E O U T", banner_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "BATTLE THE BRICKS!",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "▶ Press ENTER to play",
        Style::default()
            .fg(Color::Rgb(255, 220, 80))
            .add_modifier(Modifier::BOLD),
    )));

    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::Rgb(10, 10, 20)));
    frame.render_widget(p, area);
}

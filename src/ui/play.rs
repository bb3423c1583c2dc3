use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::geometry::Bounds;
use crate::game::{View, BRICK_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};

const BACKGROUND: Color = Color::Rgb(10, 10, 20);

const BRICK_COLORS: [Color; 7] = [
    Color::Rgb(220, 50, 50),  // Red
    Color::Rgb(220, 130, 30), // Orange
    Color::Rgb(220, 200, 30), // Yellow
    Color::Rgb(50, 200, 50),  // Green
    Color::Rgb(50, 200, 200), // Teal
    Color::Rgb(50, 130, 220), // Blue
    Color::Rgb(150, 50, 220), // Purple
];

pub fn render_play(frame: &mut Frame, view: &View, area: Rect) {
    let lines = field_lines(view, area.width as usize, area.height as usize);
    frame.render_widget(Paragraph::new(lines), area);
}

/// Rasterise the 640x480 play field onto a `width` x `height` cell grid.
fn field_lines(view: &View, width: usize, height: usize) -> Vec<Line<'static>> {
    let w = width;
    let h = height;
    let sx = w as f32 / SCREEN_WIDTH;
    let sy = h as f32 / SCREEN_HEIGHT;

    if w == 0 || h == 0 {
        return Vec::new();
    }
    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(BACKGROUND)); w]; h];

    let col = |x: f32| ((x * sx).max(0.0) as usize).min(w - 1);
    let row = |y: f32| ((y * sy).max(0.0) as usize).min(h - 1);

    // Bricks, each at least one cell wide with a gap on its right edge
    for brick in view.live_bricks() {
        let x_start = col(brick.left());
        let x_end = col(brick.right()).max(x_start + 1);
        let y = row(brick.y);
        let color = BRICK_COLORS[(brick.y / BRICK_HEIGHT) as usize % BRICK_COLORS.len()];
        for x in x_start..x_end.min(w) {
            let ch = if x + 1 == x_end { '▌' } else { '█' };
            grid[y][x] = (ch, Style::default().fg(color).bg(BACKGROUND));
        }
    }

    // Bat
    let bat = view.bat;
    let x_start = col(bat.left());
    let x_end = col(bat.right()).max(x_start + 1);
    let y = row(bat.y);
    for x in x_start..=x_end.min(w - 1) {
        let ch = if x == x_start {
            '╣'
        } else if x == x_end {
            '╠'
        } else {
            '═'
        };
        grid[y][x] = (
            ch,
            Style::default()
                .fg(Color::Rgb(180, 200, 255))
                .bg(Color::Rgb(30, 50, 120))
                .add_modifier(Modifier::BOLD),
        );
    }

    // Ball, only while in play
    if let Some(ball) = view.ball_in_play() {
        if ball.y >= 0.0 && ball.y < SCREEN_HEIGHT {
            grid[row(ball.y)][col(ball.x)] = (
                '●',
                Style::default()
                    .fg(Color::Rgb(255, 255, 255))
                    .bg(BACKGROUND)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

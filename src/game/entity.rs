use super::geometry::Bounds;
use super::{
    BALL_DIA, BAT_HEIGHT, BAT_WIDTH, BAT_Y, BRICK_HEIGHT, BRICK_WIDTH, SCREEN_WIDTH,
};

/// The ball. Position is its center; it only moves while `active`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vx: f32,
    pub vy: f32,
    pub active: bool,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            x: SCREEN_WIDTH / 2.0,
            y: 0.0,
            w: BALL_DIA,
            h: BALL_DIA,
            vx: 0.0,
            vy: 0.0,
            active: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bat {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bat {
    pub fn new() -> Self {
        Self {
            x: SCREEN_WIDTH / 2.0,
            y: BAT_Y,
            w: BAT_WIDTH,
            h: BAT_HEIGHT,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.w / 2.0
    }

    pub fn max_x(&self) -> f32 {
        SCREEN_WIDTH - self.w / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub smashed: bool,
}

pub const WALL_COLUMNS: usize = 13;
pub const WALL_ROWS: usize = 7;

/// Lay out a fresh wall, column by column, left to right and top to bottom
/// within each column.
pub fn build_wall() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(WALL_COLUMNS * WALL_ROWS);
    for col in 0..WALL_COLUMNS {
        for row in 0..WALL_ROWS {
            bricks.push(Brick {
                x: BRICK_WIDTH * (2 + col) as f32,
                y: BRICK_HEIGHT * (6 + row) as f32,
                w: BRICK_WIDTH,
                h: BRICK_HEIGHT,
                smashed: false,
            });
        }
    }
    bricks
}

impl Bounds for Ball {
    fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn size(&self) -> (f32, f32) {
        (self.w, self.h)
    }
}

impl Bounds for Bat {
    fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn size(&self) -> (f32, f32) {
        (self.w, self.h)
    }
}

impl Bounds for Brick {
    fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn size(&self) -> (f32, f32) {
        (self.w, self.h)
    }
}

use super::geometry::{collides, Bounds};
use super::{
    Fakeout, GameEvent, Scene, BALL_DIA, BALL_SPEED, DEFLECTION_DIVISOR, SCORE_INCREMENT,
    SCREEN_HEIGHT, SCREEN_WIDTH, SERVE_DROP,
};

impl Fakeout {
    /// Advance the play field by one tick. Order matters: the bat bounce is
    /// resolved before the walls, and the brick scan runs last so at most one
    /// brick breaks per tick.
    pub(super) fn update(&mut self) {
        if self.ball.active {
            self.ball.x += self.ball.vx;
            self.ball.y += self.ball.vy;

            if collides(&self.bat, &self.ball) {
                self.ball.vx = deflect(self.ball.x, self.bat.x);
                self.ball.y -= self.bat.h / 2.0;
                self.ball.vy = -self.ball.vy;
            }
            if self.ball.top() < 0.0 {
                self.ball.vy = -self.ball.vy;
            }
            if self.ball.left() < 0.0 {
                self.ball.vx = -self.ball.vx;
            }
            if self.ball.right() > SCREEN_WIDTH {
                self.ball.vx = -self.ball.vx;
            }
            if self.ball.y + BALL_DIA > SCREEN_HEIGHT {
                self.lives = self.lives.saturating_sub(1);
                self.ball.active = false;
                self.ball.vx = 0.0;
                log::debug!("ball lost, {} lives left", self.lives);
                self.events.push(GameEvent::BallLost { lives: self.lives });
            }

            let hit = self
                .bricks
                .iter_mut()
                .find(|brick| !brick.smashed && collides(&**brick, &self.ball));
            if let Some(brick) = hit {
                brick.smashed = true;
                self.score += SCORE_INCREMENT * self.level;
                self.ball.vx = deflect(self.ball.x, brick.x);
                self.ball.vy = -self.ball.vy;
                log::trace!("brick at ({}, {}) smashed", brick.x, brick.y);
                self.events.push(GameEvent::BrickSmashed { score: self.score });
                if self.wall_destroyed() {
                    log::debug!("wall destroyed on level {}", self.level);
                    self.events.push(GameEvent::WallDestroyed);
                }
            }
        }

        if self.lives == 0 {
            log::info!("game over with {} points", self.score);
            self.scene = Scene::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
        }

        // The wall is not rebuilt here, so once it is gone every further
        // tick in Play bumps the level again.
        if self.wall_destroyed() {
            self.level += 1;
            self.ball.active = false;
            log::trace!("level up to {}", self.level);
            self.events.push(GameEvent::LevelUp { level: self.level });
        }
    }

    /// Drop the ball above the bat and send it downward. Horizontal speed
    /// carries over from before.
    pub fn serve(&mut self) {
        self.ball.active = true;
        self.ball.x = self.bat.x;
        self.ball.y = self.bat.y - SERVE_DROP;
        self.ball.vy = BALL_SPEED;
        log::debug!("served at x={}", self.ball.x);
        self.events.push(GameEvent::Served);
    }

    fn wall_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| b.smashed)
    }
}

/// Horizontal speed after a hit, proportional to how far off-center the ball
/// struck. Deliberately unclamped.
fn deflect(ball_x: f32, target_x: f32) -> f32 {
    BALL_SPEED * (ball_x - target_x) / DEFLECTION_DIVISOR
}

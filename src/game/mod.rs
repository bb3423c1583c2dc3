//! The brick-breaker core: scenes, entities, and the per-tick simulation.
//!
//! Nothing in here draws, plays sound, or touches the terminal. The app feeds
//! key state into the [`Controller`], calls [`Fakeout::tick`] once per frame,
//! then reads a [`View`] and drains [`GameEvent`]s.

pub mod entity;
pub mod geometry;
pub mod scene;
mod update;

use crate::input::{Controller, Controls, Intent};
use entity::{build_wall, Ball, Bat, Brick};
pub use scene::Scene;

pub const SCREEN_WIDTH: f32 = 640.0;
pub const SCREEN_HEIGHT: f32 = 480.0;
pub const BAT_WIDTH: f32 = 60.0;
pub const BAT_HEIGHT: f32 = 15.0;
pub const BAT_Y: f32 = 440.0;
pub const BRICK_WIDTH: f32 = 40.0;
pub const BRICK_HEIGHT: f32 = 15.0;
pub const BALL_DIA: f32 = 5.0;
pub const BAT_SPEED: f32 = 8.0;
pub const BALL_SPEED: f32 = 4.0;
pub const SCORE_INCREMENT: u32 = 40;
pub const STARTING_LIVES: u32 = 4;
/// Divides the hit offset when deflecting off the bat or a brick.
/// Fixed, not derived from the bat width.
pub const DEFLECTION_DIVISOR: f32 = 13.0;
/// How far above the bat a served ball is dropped.
pub const SERVE_DROP: f32 = BAT_HEIGHT * 8.0;

/// Something that happened during a tick, for audio cues and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Restarted,
    Served,
    BrickSmashed { score: u32 },
    BallLost { lives: u32 },
    WallDestroyed,
    LevelUp { level: u32 },
    GameOver { score: u32 },
}

/// Read-only snapshot handed to the renderer.
pub struct View<'a> {
    pub scene: Scene,
    pub ball: &'a Ball,
    pub bat: &'a Bat,
    pub bricks: &'a [Brick],
    pub score: u32,
    pub lives: u32,
    pub level: u32,
}

impl<'a> View<'a> {
    pub fn live_bricks(&self) -> impl Iterator<Item = &'a Brick> {
        self.bricks.iter().filter(|b| !b.smashed)
    }

    pub fn ball_in_play(&self) -> Option<&'a Ball> {
        self.ball.active.then_some(self.ball)
    }
}

pub struct Fakeout {
    scene: Scene,
    ball: Ball,
    bat: Bat,
    bricks: Vec<Brick>,
    score: u32,
    lives: u32,
    level: u32,
    controller: Controller,
    events: Vec<GameEvent>,
}

impl Fakeout {
    pub fn new(reports_release: bool) -> Self {
        let mut game = Self {
            scene: Scene::Title,
            ball: Ball::new(),
            bat: Bat::new(),
            bricks: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            controller: Controller::new(reports_release),
            events: Vec::new(),
        };
        game.initialize();
        game
    }

    /// Reset everything a new game needs. The wall is rebuilt from scratch
    /// and any held keys are forgotten.
    pub fn initialize(&mut self) {
        self.controller.clear();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.bricks = build_wall();
        self.ball = Ball::new();
        self.bat = Bat::new();
    }

    /// Run one frame: snapshot input, apply it, then run the active scene.
    pub fn tick(&mut self) {
        let controls = self.controller.snapshot();
        self.step(controls);
        self.controller.expire();
    }

    /// Run one frame against an explicit input snapshot.
    pub fn step(&mut self, controls: Controls) {
        self.apply_controls(controls);
        match self.scene {
            Scene::Title | Scene::GameOver => {}
            Scene::Play => self.update(),
        }
    }

    fn apply_controls(&mut self, controls: Controls) {
        if self.scene == Scene::Play {
            if controls.held(Intent::MoveLeft) {
                self.bat.x = (self.bat.x - BAT_SPEED).max(self.bat.min_x());
            }
            if controls.held(Intent::MoveRight) {
                self.bat.x = (self.bat.x + BAT_SPEED).min(self.bat.max_x());
            }
            if controls.held(Intent::Serve) && !self.ball.active {
                self.serve();
            }
        }
        if self.scene.accepts_confirm() && controls.held(Intent::Confirm) {
            log::info!("starting new game from {} screen", self.scene.name());
            self.initialize();
            self.scene = Scene::Play;
            self.events.push(GameEvent::Restarted);
        }
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn view(&self) -> View<'_> {
        View {
            scene: self.scene,
            ball: &self.ball,
            bat: &self.bat,
            bricks: &self.bricks,
            score: self.score,
            lives: self.lives,
            level: self.level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> Fakeout {
        let mut game = Fakeout::new(true);
        game.step(Controls::default().with(Intent::Confirm));
        game
    }

    #[test]
    fn starts_on_title_with_a_fresh_game() {
        let game = Fakeout::new(true);
        assert_eq!(game.scene, Scene::Title);
        assert_eq!(game.score, 0);
        assert_eq!(game.lives, 4);
        assert_eq!(game.level, 1);
        assert!(!game.ball.active);
        assert_eq!(game.bricks.len(), 91);
        assert!(game.bricks.iter().all(|b| !b.smashed));
    }

    #[test]
    fn title_ignores_everything_but_confirm() {
        let mut game = Fakeout::new(true);
        let controls = Controls::default()
            .with(Intent::MoveLeft)
            .with(Intent::Serve);
        for _ in 0..10 {
            game.step(controls);
        }
        assert_eq!(game.scene, Scene::Title);
        assert_eq!(game.bat.x, 320.0);
        assert!(!game.ball.active);
    }

    #[test]
    fn confirm_on_title_starts_play() {
        let mut game = playing();
        assert_eq!(game.scene, Scene::Play);
        assert_eq!(game.drain_events().collect::<Vec<_>>(), vec![GameEvent::Restarted]);
    }

    #[test]
    fn confirm_during_play_does_nothing() {
        let mut game = playing();
        game.score = 120;
        game.step(Controls::default().with(Intent::Confirm));
        assert_eq!(game.scene, Scene::Play);
        assert_eq!(game.score, 120);
    }

    #[test]
    fn confirm_on_game_over_resets_and_plays() {
        let mut game = playing();
        game.score = 4000;
        game.lives = 0;
        game.level = 3;
        game.bricks[5].smashed = true;
        game.bat.x = 100.0;
        game.scene = Scene::GameOver;

        game.step(Controls::default().with(Intent::Confirm));
        assert_eq!(game.scene, Scene::Play);
        assert_eq!(game.score, 0);
        assert_eq!(game.lives, 4);
        assert_eq!(game.level, 1);
        assert_eq!(game.bat.x, 320.0);
        assert!(game.bricks.iter().all(|b| !b.smashed));
    }

    #[test]
    fn game_over_screen_is_static() {
        let mut game = playing();
        game.scene = Scene::GameOver;
        game.ball.active = true;
        game.ball.vy = BALL_SPEED;
        let before = game.ball.clone();
        game.step(Controls::default().with(Intent::MoveRight));
        assert_eq!(game.ball, before);
        assert_eq!(game.bat.x, 320.0);
    }

    #[test]
    fn restart_forgets_held_keys() {
        let mut game = Fakeout::new(true);
        game.controller_mut().key_down(Intent::Confirm);
        game.controller_mut().key_down(Intent::MoveLeft);
        game.tick();
        assert_eq!(game.scene, Scene::Play);
        game.tick();
        assert_eq!(game.bat.x, 320.0);
    }

    #[test]
    fn bat_moves_one_step_per_tick() {
        let mut game = playing();
        game.step(Controls::default().with(Intent::MoveLeft));
        assert_eq!(game.bat.x, 312.0);
        game.step(Controls::default().with(Intent::MoveRight));
        game.step(Controls::default().with(Intent::MoveRight));
        assert_eq!(game.bat.x, 328.0);
    }

    #[test]
    fn opposite_moves_cancel_out() {
        let mut game = playing();
        let both = Controls::default()
            .with(Intent::MoveLeft)
            .with(Intent::MoveRight);
        game.step(both);
        assert_eq!(game.bat.x, 320.0);
    }

    #[test]
    fn bat_stops_at_left_edge() {
        let mut game = playing();
        for _ in 0..100 {
            game.step(Controls::default().with(Intent::MoveLeft));
        }
        assert_eq!(game.bat.x, 30.0);
    }

    #[test]
    fn bat_stops_at_right_edge() {
        let mut game = playing();
        for _ in 0..100 {
            game.step(Controls::default().with(Intent::MoveRight));
        }
        assert_eq!(game.bat.x, 610.0);
    }

    #[test]
    fn move_and_serve_apply_in_the_same_tick() {
        let mut game = playing();
        let controls = Controls::default()
            .with(Intent::MoveLeft)
            .with(Intent::Serve);
        game.step(controls);
        assert!(game.ball.active);
        // served from the moved bat, then integrated once
        assert_eq!(game.ball.x, 312.0);
        assert_eq!(game.ball.y, 440.0 - SERVE_DROP + BALL_SPEED);
    }

    #[test]
    fn view_hides_inactive_ball_and_smashed_bricks() {
        let mut game = playing();
        game.bricks[0].smashed = true;
        game.bricks[1].smashed = true;
        let view = game.view();
        assert!(view.ball_in_play().is_none());
        assert_eq!(view.live_bricks().count(), 89);
        assert_eq!(view.scene, Scene::Play);
    }
}

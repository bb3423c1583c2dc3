use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::audio::Sfx;
use crate::game::{Fakeout, GameEvent};
use crate::input::Intent;

pub struct App {
    pub should_quit: bool,
    pub game: Fakeout,
    sfx: Box<dyn Sfx>,
}

impl App {
    pub fn new(reports_release: bool, sfx: Box<dyn Sfx>) -> Self {
        Self {
            should_quit: false,
            game: Fakeout::new(reports_release),
            sfx,
        }
    }

    pub fn on_tick(&mut self) {
        self.game.tick();
        for event in self.game.drain_events() {
            match event {
                GameEvent::BrickSmashed { score } => {
                    log::trace!("score now {score}");
                    self.sfx.blip();
                }
                GameEvent::WallDestroyed => {
                    log::info!("wall destroyed");
                    self.sfx.win();
                }
                GameEvent::LevelUp { level } => log::trace!("now on level {level}"),
                GameEvent::BallLost { lives } => log::debug!("{lives} lives remaining"),
                GameEvent::GameOver { score } => log::info!("final score {score}"),
                GameEvent::Restarted | GameEvent::Served => {}
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Release {
            // Ctrl+C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.should_quit = true;
                return;
            }
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
                self.should_quit = true;
                return;
            }
        }

        let Some(intent) = Intent::from_key(key.code) else {
            return;
        };
        let controller = self.game.controller_mut();
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => controller.key_down(intent),
            KeyEventKind::Release => controller.key_up(intent),
        }
    }
}

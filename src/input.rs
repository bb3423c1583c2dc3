use crossterm::event::KeyCode;

/// Ticks a press stays held when the terminal never reports key releases.
/// Key repeat refreshes it while the key is down.
pub const HOLD_TICKS: u8 = 8;

/// A player action the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Serve,
    Confirm,
}

impl Intent {
    fn index(self) -> usize {
        match self {
            Intent::MoveLeft => 0,
            Intent::MoveRight => 1,
            Intent::Serve => 2,
            Intent::Confirm => 3,
        }
    }

    /// Resolve a raw key. Keys the game does not use map to `None`.
    pub fn from_key(code: KeyCode) -> Option<Intent> {
        match code {
            KeyCode::Left => Some(Intent::MoveLeft),
            KeyCode::Right => Some(Intent::MoveRight),
            KeyCode::Char(' ') => Some(Intent::Serve),
            KeyCode::Enter => Some(Intent::Confirm),
            _ => None,
        }
    }
}

/// Snapshot of held intents, taken once at the start of a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    held: [bool; 4],
}

impl Controls {
    pub fn held(&self, intent: Intent) -> bool {
        self.held[intent.index()]
    }

    pub fn with(mut self, intent: Intent) -> Self {
        self.held[intent.index()] = true;
        self
    }
}

/// Held-key state fed by key events between ticks.
///
/// With release reporting the state follows key-down/key-up exactly.
/// Without it, each press is held for `HOLD_TICKS` ticks and then lapses.
#[derive(Debug, Clone)]
pub struct Controller {
    held: [bool; 4],
    ttl: [u8; 4],
    reports_release: bool,
}

impl Controller {
    pub fn new(reports_release: bool) -> Self {
        Self {
            held: [false; 4],
            ttl: [0; 4],
            reports_release,
        }
    }

    pub fn key_down(&mut self, intent: Intent) {
        let i = intent.index();
        self.held[i] = true;
        self.ttl[i] = HOLD_TICKS;
    }

    pub fn key_up(&mut self, intent: Intent) {
        let i = intent.index();
        self.held[i] = false;
        self.ttl[i] = 0;
    }

    pub fn snapshot(&self) -> Controls {
        Controls { held: self.held }
    }

    /// Age presses by one tick. No-op when releases are reported.
    pub fn expire(&mut self) {
        if self.reports_release {
            return;
        }
        for i in 0..self.held.len() {
            self.ttl[i] = self.ttl[i].saturating_sub(1);
            if self.ttl[i] == 0 {
                self.held[i] = false;
            }
        }
    }

    pub fn clear(&mut self) {
        self.held = [false; 4];
        self.ttl = [0; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle(controls: Controls) -> bool {
        controls == Controls::default()
    }

    #[test]
    fn arrow_space_and_enter_map_to_intents() {
        assert_eq!(Intent::from_key(KeyCode::Left), Some(Intent::MoveLeft));
        assert_eq!(Intent::from_key(KeyCode::Right), Some(Intent::MoveRight));
        assert_eq!(Intent::from_key(KeyCode::Char(' ')), Some(Intent::Serve));
        assert_eq!(Intent::from_key(KeyCode::Enter), Some(Intent::Confirm));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(Intent::from_key(KeyCode::Char('x')), None);
        assert_eq!(Intent::from_key(KeyCode::Up), None);
        assert_eq!(Intent::from_key(KeyCode::F(5)), None);
    }

    #[test]
    fn held_keys_show_up_together() {
        let mut c = Controller::new(true);
        c.key_down(Intent::MoveLeft);
        c.key_down(Intent::Serve);
        let snap = c.snapshot();
        assert!(snap.held(Intent::MoveLeft));
        assert!(snap.held(Intent::Serve));
        assert!(!snap.held(Intent::MoveRight));
        assert!(!snap.held(Intent::Confirm));
    }

    #[test]
    fn release_clears_held() {
        let mut c = Controller::new(true);
        c.key_down(Intent::MoveRight);
        c.key_up(Intent::MoveRight);
        assert!(idle(c.snapshot()));
    }

    #[test]
    fn reported_releases_never_expire() {
        let mut c = Controller::new(true);
        c.key_down(Intent::MoveRight);
        for _ in 0..100 {
            c.expire();
        }
        assert!(c.snapshot().held(Intent::MoveRight));
    }

    #[test]
    fn presses_lapse_without_release_reporting() {
        let mut c = Controller::new(false);
        c.key_down(Intent::MoveLeft);
        for _ in 0..HOLD_TICKS - 1 {
            c.expire();
        }
        assert!(c.snapshot().held(Intent::MoveLeft));
        c.expire();
        assert!(!c.snapshot().held(Intent::MoveLeft));
    }

    #[test]
    fn repeat_refreshes_the_hold() {
        let mut c = Controller::new(false);
        c.key_down(Intent::Serve);
        for _ in 0..HOLD_TICKS - 1 {
            c.expire();
        }
        c.key_down(Intent::Serve);
        for _ in 0..HOLD_TICKS - 1 {
            c.expire();
        }
        assert!(c.snapshot().held(Intent::Serve));
    }

    #[test]
    fn clear_drops_everything() {
        let mut c = Controller::new(true);
        for intent in [Intent::MoveLeft, Intent::MoveRight, Intent::Serve, Intent::Confirm] {
            c.key_down(intent);
        }
        c.clear();
        assert!(idle(c.snapshot()));
    }

    #[test]
    fn controls_builder_marks_intents() {
        let controls = Controls::default().with(Intent::Confirm);
        assert!(controls.held(Intent::Confirm));
        assert!(!idle(controls));
        assert!(idle(Controls::default()));
    }
}

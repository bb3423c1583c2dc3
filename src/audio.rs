use std::io::{self, Write};

/// Sound cue sink. The game only ever asks for two cues.
pub trait Sfx {
    /// A brick broke.
    fn blip(&mut self);
    /// The whole wall is down.
    fn win(&mut self);
}

/// Plays nothing.
pub struct Silent;

impl Sfx for Silent {
    fn blip(&mut self) {}
    fn win(&mut self) {}
}

/// Rings the terminal bell. The win cue rings twice.
pub struct Bell<W: Write> {
    out: W,
}

impl Bell<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Bell<W> {
    fn ring(&mut self, times: usize) {
        let bells = "\x07".repeat(times);
        if let Err(e) = self.out.write_all(bells.as_bytes()).and_then(|_| self.out.flush()) {
            log::warn!("terminal bell failed: {e}");
        }
    }
}

impl<W: Write> Sfx for Bell<W> {
    fn blip(&mut self) {
        self.ring(1);
    }

    fn win(&mut self) {
        self.ring(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_rings_once_for_blip_twice_for_win() {
        let mut bell = Bell { out: Vec::new() };
        bell.blip();
        assert_eq!(bell.out, b"\x07");
        bell.win();
        assert_eq!(bell.out, b"\x07\x07\x07");
    }
}

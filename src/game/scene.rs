/// The screen currently driving the game. Exactly one is active per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    #[default]
    Title,
    Play,
    GameOver,
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Title => "title",
            Scene::Play => "play",
            Scene::GameOver => "game over",
        }
    }

    /// Whether a confirm intent restarts the game from this scene.
    pub fn accepts_confirm(&self) -> bool {
        matches!(self, Scene::Title | Scene::GameOver)
    }
}

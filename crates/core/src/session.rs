//! Session module - the handheld driver around a [`GameState`]
//!
//! The session owns the current game value and decides which commands reach
//! it: buttons are interpreted per phase, gravity only runs while playing, and
//! the engine is left alone while paused or after game over. It also derives
//! the background-music cue from the phase and the sound options.

use crate::game_state::GameState;
use crate::rng::{PieceRng, SimpleRng};
use crate::scoring::drop_interval_ms;
use crate::snapshot::GameSnapshot;
use crate::types::{Button, GameAction, OptionCommand, Options, VOLUME_MAX, VOLUME_STEP};

/// Which screen the handheld is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Title,
    Playing,
    Paused,
    GameOver,
}

/// Sound settings as the panel shows them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioStatus {
    pub sound_enabled: bool,
    /// Percent, `0..=VOLUME_MAX`
    pub volume: u8,
    pub music_playing: bool,
}

#[derive(Debug, Clone)]
pub struct Session<R = SimpleRng> {
    game: GameState<R>,
    phase: Phase,
    gravity_timer_ms: u32,
    sound_enabled: bool,
    volume: u8,
}

impl Session<SimpleRng> {
    /// Session on the title screen, seeded from `options.seed` or entropy.
    pub fn new(options: &Options) -> Self {
        let game = match options.seed {
            Some(seed) => GameState::new(seed),
            None => GameState::from_entropy(),
        };
        Self::with_game(game, options)
    }
}

impl<R: PieceRng + Clone> Session<R> {
    /// Session on the title screen around an existing game value.
    pub fn with_game(game: GameState<R>, options: &Options) -> Self {
        let options = options.clamped();
        Self {
            game,
            phase: Phase::Title,
            gravity_timer_ms: 0,
            sound_enabled: options.sound_enabled,
            volume: options.volume,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Whether the background track should be playing right now
    pub fn music_playing(&self) -> bool {
        self.sound_enabled && self.phase == Phase::Playing
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(VOLUME_MAX);
    }

    pub fn audio_status(&self) -> AudioStatus {
        AudioStatus {
            sound_enabled: self.sound_enabled,
            volume: self.volume,
            music_playing: self.music_playing(),
        }
    }

    /// Apply a sound command in any phase. Returns true if a setting changed.
    ///
    /// Volume steps stop at 0 and [`VOLUME_MAX`].
    pub fn adjust(&mut self, command: OptionCommand) -> bool {
        let before = self.audio_status();
        match command {
            OptionCommand::ToggleSound => self.sound_enabled = !self.sound_enabled,
            OptionCommand::VolumeUp => self.set_volume(self.volume.saturating_add(VOLUME_STEP)),
            OptionCommand::VolumeDown => self.set_volume(self.volume.saturating_sub(VOLUME_STEP)),
        }
        self.audio_status() != before
    }

    /// Current gravity interval for the game's level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.game.level())
    }

    /// Handle a button press. Returns true if the press did anything.
    pub fn press(&mut self, button: Button) -> bool {
        match (self.phase, button) {
            (Phase::Title | Phase::GameOver, Button::Start) => {
                self.start_game();
                true
            }
            (Phase::Playing, Button::Start) => {
                self.apply(GameAction::Pause);
                self.phase = Phase::Paused;
                true
            }
            (Phase::Paused, Button::Start) => {
                self.apply(GameAction::Pause);
                self.phase = Phase::Playing;
                true
            }
            (Phase::Playing, _) => match gameplay_action(button) {
                Some(action) => {
                    self.apply(action);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Advance the gravity timer. Returns true if gravity moved the piece.
    ///
    /// The piece falls one row once the accumulated time exceeds the level's
    /// interval; the timer then starts over.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        if self.gravity_timer_ms <= self.drop_interval_ms() {
            return false;
        }
        self.gravity_timer_ms = 0;
        self.apply(GameAction::SoftDrop);
        true
    }

    fn start_game(&mut self) {
        self.game = self.game.reset();
        self.gravity_timer_ms = 0;
        self.phase = Phase::Playing;
    }

    fn apply(&mut self, action: GameAction) {
        self.game = self.game.apply_action(action);
        if self.game.game_over() {
            self.phase = Phase::GameOver;
        }
    }
}

/// Gameplay meaning of a button while playing
fn gameplay_action(button: Button) -> Option<GameAction> {
    match button {
        Button::Left => Some(GameAction::MoveLeft),
        Button::Right => Some(GameAction::MoveRight),
        Button::Down => Some(GameAction::SoftDrop),
        Button::Up | Button::A => Some(GameAction::Rotate),
        Button::B => Some(GameAction::HardDrop),
        Button::Start | Button::Select => None,
    }
}

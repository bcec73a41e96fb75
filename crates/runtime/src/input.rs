//! Per-tick input state.
//!
//! Input is sampled once per tick into an [`InputState`] and handed to
//! [`crate::game::Game::tick`]; nothing about buttons is kept between ticks.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl InputState {
    /// Horizontal direction requested by the player: -1, 0 or 1.
    #[must_use]
    pub fn steer(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Deterministic input for headless runs: sweeps the paddle left and right in
/// alternating phases and holds fire every `fire_every` ticks. The first phase
/// is half as long so the sweep stays centred on the starting position.
#[derive(Clone, Debug)]
pub struct ScriptedInput {
    tick: u64,
    phase_len: u64,
    fire_every: u64,
}

impl ScriptedInput {
    /// # Panics
    ///
    /// Panics if either period is zero.
    #[must_use]
    pub fn new(phase_len: u64, fire_every: u64) -> Self {
        assert!(phase_len > 0 && fire_every > 0, "scripted input periods must be positive");
        Self {
            tick: 0,
            phase_len,
            fire_every,
        }
    }
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self::new(20, 12)
    }
}

impl Iterator for ScriptedInput {
    type Item = InputState;

    fn next(&mut self) -> Option<InputState> {
        let going_left = ((self.tick + self.phase_len / 2) / self.phase_len) % 2 == 0;
        let input = InputState {
            left: going_left,
            right: !going_left,
            fire: self.tick % self.fire_every == 0,
        };
        self.tick += 1;
        Some(input)
    }
}

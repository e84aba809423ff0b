//! Session phase machine and HUD counters.
//!
//! ```text
//! NotStarted -> Playing <-> Paused
//!                  |
//!                  v
//!               GameOver
//! ```

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Playing,
    Paused,
    GameOver,
}

impl Phase {
    /// Only `Playing` advances the simulation.
    pub fn is_running(self) -> bool {
        self == Phase::Playing
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    phase: Phase,
    pub score: u32,
    pub kills: u32,
    /// Seconds spent in `Playing`.
    pub elapsed: f32,
    /// Mirrors of the player's counters for the HUD.
    pub health: i32,
    pub ammo: u32,
}

impl GameSession {
    pub fn new(health: i32, ammo: u32) -> Self {
        Self {
            phase: Phase::NotStarted,
            score: 0,
            kills: 0,
            elapsed: 0.0,
            health,
            ammo,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    // Transitions return the new phase when they happened, `None` when the
    // current phase does not accept them.

    pub fn start(&mut self) -> Option<Phase> {
        self.transition(Phase::NotStarted, Phase::Playing)
    }

    pub fn pause(&mut self) -> Option<Phase> {
        self.transition(Phase::Playing, Phase::Paused)
    }

    pub fn resume(&mut self) -> Option<Phase> {
        self.transition(Phase::Paused, Phase::Playing)
    }

    pub fn game_over(&mut self) -> Option<Phase> {
        self.transition(Phase::Playing, Phase::GameOver)
    }

    fn transition(&mut self, from: Phase, to: Phase) -> Option<Phase> {
        if self.phase != from {
            return None;
        }
        log::info!("session {:?} -> {:?}", from, to);
        self.phase = to;
        Some(to)
    }

    pub fn record_kill(&mut self, points: u32) {
        self.kills += 1;
        self.score += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_phase_graph() {
        let mut s = GameSession::new(100, 30);
        assert_eq!(s.pause(), None);
        assert_eq!(s.start(), Some(Phase::Playing));
        assert_eq!(s.start(), None);
        assert_eq!(s.pause(), Some(Phase::Paused));
        assert_eq!(s.game_over(), None, "paused sessions cannot die");
        assert_eq!(s.resume(), Some(Phase::Playing));
        assert_eq!(s.game_over(), Some(Phase::GameOver));
        assert_eq!(s.resume(), None);
        assert_eq!(s.start(), None);
        assert!(!s.phase().is_running());
    }

    #[test]
    fn kills_add_score() {
        let mut s = GameSession::new(100, 30);
        s.record_kill(100);
        s.record_kill(100);
        assert_eq!((s.kills, s.score), (2, 200));
    }
}

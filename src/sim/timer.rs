//! One-shot pause between a hit and the next level
//!
//! Each scheduled pause is keyed by a generation number. Cancelling (on fail,
//! start or restart) bumps the generation, so a completion that arrives for an
//! older pause is recognised as stale and dropped.

/// Handle identifying one scheduled pause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PauseToken {
    generation: u64,
}

impl PauseToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    token: PauseToken,
    /// Seconds left before the pause completes
    remaining: f32,
}

/// Cancellable one-shot timer advanced by frame deltas
#[derive(Debug, Clone, Default)]
pub struct PauseTimer {
    generation: u64,
    pending: Option<Pending>,
}

impl PauseTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a pause of `delay` seconds, replacing any pending one
    pub fn schedule(&mut self, delay: f32) -> PauseToken {
        self.generation += 1;
        let token = PauseToken {
            generation: self.generation,
        };
        self.pending = Some(Pending {
            token,
            remaining: delay.max(0.0),
        });
        token
    }

    /// Drop the pending pause; its token becomes stale
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Count down by `dt` seconds. Returns the token once the pause is due.
    pub fn advance(&mut self, dt: f32) -> Option<PauseToken> {
        let pending = self.pending.as_mut()?;
        pending.remaining -= dt;
        if pending.remaining <= 0.0 {
            let token = pending.token;
            self.pending = None;
            Some(token)
        } else {
            None
        }
    }

    /// Complete a pause early from an external scheduler.
    ///
    /// Returns false for stale or already-completed tokens.
    pub fn fire(&mut self, token: PauseToken) -> bool {
        match self.pending {
            Some(pending) if pending.token == token && token.generation == self.generation => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

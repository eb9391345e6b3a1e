/// Process-wide simulation mode. Moves to `Celebrating` once and stays there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimulationMode {
    #[default]
    Idle,
    Celebrating,
}

/// One-shot switch flipped by the accept control.
#[derive(Clone, Debug, Default)]
pub struct Celebration {
    mode: SimulationMode,
}

impl Celebration {
    #[inline]
    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    #[inline]
    pub fn is_celebrating(&self) -> bool {
        self.mode == SimulationMode::Celebrating
    }

    /// Returns `true` only on the call that performs the transition, so the
    /// caller swaps UI panels exactly once.
    pub fn activate(&mut self) -> bool {
        if self.is_celebrating() {
            return false;
        }
        self.mode = SimulationMode::Celebrating;
        log::info!("[celebration] mode -> Celebrating");
        true
    }
}

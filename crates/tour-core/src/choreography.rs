//! Timed overlay phases around state swaps.
//!
//! The overlay fades in, the caller swaps state underneath it when the
//! [`Cue::Swap`] fires, and the overlay fades out again. Durations are fixed
//! configuration and do not depend on asset loading.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    /// `deadline` is measured on `elapsed`; `None` holds until [`Choreography::arm`].
    OverlayIn {
        elapsed: Duration,
        deadline: Option<Duration>,
    },
    OverlayOut {
        elapsed: Duration,
        from_opacity: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Swap,
    Settled,
}

#[derive(Clone, Debug)]
pub struct Choreography {
    phase: Phase,
    fade: Duration,
}

impl Choreography {
    pub fn new(fade: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            fade,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Fade the overlay in and cue the swap after `hold`.
    pub fn begin(&mut self, hold: Duration) {
        let elapsed = self.resume_point();
        self.phase = Phase::OverlayIn {
            elapsed,
            deadline: Some(elapsed + hold),
        };
    }

    /// Fade the overlay in and hold it until [`arm`](Self::arm) is called.
    pub fn begin_open(&mut self) {
        if let Phase::OverlayIn { .. } = self.phase {
            return;
        }
        self.phase = Phase::OverlayIn {
            elapsed: self.resume_point(),
            deadline: None,
        };
    }

    /// Fade-in position matching the opacity on screen, so a restart never dims the overlay.
    fn resume_point(&self) -> Duration {
        self.fade.mul_f32(self.overlay_opacity())
    }

    /// Cue the swap `hold` from now, starting the overlay if it is not showing.
    pub fn arm(&mut self, hold: Duration) {
        match &mut self.phase {
            Phase::OverlayIn { elapsed, deadline } => *deadline = Some(*elapsed + hold),
            _ => self.begin(hold),
        }
    }

    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn tick(&mut self, dt: Duration) -> Option<Cue> {
        match &mut self.phase {
            Phase::Idle => None,
            Phase::OverlayIn { elapsed, deadline } => {
                *elapsed += dt;
                match *deadline {
                    Some(at) if *elapsed >= at => {
                        let from_opacity = ramp(*elapsed, self.fade);
                        self.phase = Phase::OverlayOut {
                            elapsed: Duration::ZERO,
                            from_opacity,
                        };
                        Some(Cue::Swap)
                    }
                    _ => None,
                }
            }
            Phase::OverlayOut { elapsed, .. } => {
                *elapsed += dt;
                if *elapsed >= self.fade {
                    self.phase = Phase::Idle;
                    Some(Cue::Settled)
                } else {
                    None
                }
            }
        }
    }

    /// Overlay opacity in `[0, 1]` for the current phase.
    pub fn overlay_opacity(&self) -> f32 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::OverlayIn { elapsed, .. } => ramp(elapsed, self.fade),
            Phase::OverlayOut {
                elapsed,
                from_opacity,
            } => from_opacity * (1.0 - ramp(elapsed, self.fade)),
        }
    }
}

#[inline]
fn ramp(elapsed: Duration, over: Duration) -> f32 {
    if over.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / over.as_secs_f32()).clamp(0.0, 1.0)
}

//! Skip redraws while the picture is unchanged.
//!
//! The game only changes on input or when a timer fires, so most 16ms frames
//! would repaint an identical screen. The throttle compares a fingerprint of
//! what would be drawn and still repaints every `max_idle_ms` so a terminal
//! that lost its contents recovers.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    max_idle_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(max_idle_ms: u64) -> Self {
        Self {
            max_idle_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders the first frame, every fingerprint change, and otherwise at
    /// most once per `max_idle_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = !self.has_rendered || fingerprint != self.last_fingerprint;
        let idle = now_ms.saturating_sub(self.last_render_ms) >= self.max_idle_ms;
        if !changed && !idle {
            return false;
        }

        self.has_rendered = true;
        self.last_render_ms = now_ms;
        self.last_fingerprint = fingerprint;
        true
    }

    /// Render on the next call regardless of the fingerprint (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(1000)
    }
}

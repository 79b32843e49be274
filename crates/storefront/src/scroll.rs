//! Scroll maths: smooth-scroll easing, active section, parallax, and the
//! bookkeeping that keeps scroll-driven work to one pass per frame.

/// Quadratic ease-in-out.
///
/// `t` is elapsed time, `start` the start value, `change` the total change
/// and `duration` the animation length. Returns `start + change` once `t`
/// reaches `duration`.
#[must_use]
pub fn ease_in_out_quad(t: f64, start: f64, change: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return start + change;
    }
    let t = (t / (duration / 2.0)).clamp(0.0, 2.0);
    if t < 1.0 {
        return change / 2.0 * t * t + start;
    }
    let t = t - 1.0;
    -change / 2.0 * (t * (t - 2.0) - 1.0) + start
}

/// One frame of a smooth scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    /// Vertical offset to scroll to
    pub position: f64,
    /// No more frames are needed
    pub finished: bool,
}

/// A smooth scroll from one vertical offset to another.
///
/// The clock starts at the first sampled frame timestamp, like
/// `requestAnimationFrame` callbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    distance: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl ScrollAnimation {
    #[must_use]
    pub const fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            distance: to - from,
            duration_ms,
            started_at: None,
        }
    }

    /// Target offset.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.from + self.distance
    }

    /// Position for the frame at `now` (milliseconds).
    pub fn sample(&mut self, now: f64) -> ScrollFrame {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now - started_at;
        let finished = elapsed >= self.duration_ms;
        let position = if finished {
            self.target()
        } else {
            ease_in_out_quad(elapsed, self.from, self.distance, self.duration_ms)
        };
        ScrollFrame { position, finished }
    }
}

/// Identifies one smooth-scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTicket(u64);

/// Hands out tickets so only the latest smooth scroll keeps running.
///
/// Frame callbacks holding an older ticket stop at their next frame.
#[derive(Debug, Default)]
pub struct AnimationOwner {
    generation: u64,
    running: bool,
}

impl AnimationOwner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new animation, superseding any running one.
    pub const fn begin(&mut self) -> AnimationTicket {
        self.generation = self.generation.wrapping_add(1);
        self.running = true;
        AnimationTicket(self.generation)
    }

    #[must_use]
    pub const fn is_current(&self, ticket: AnimationTicket) -> bool {
        self.running && ticket.0 == self.generation
    }

    /// Mark `ticket`'s animation finished. Ignored for superseded tickets.
    pub const fn finish(&mut self, ticket: AnimationTicket) {
        if ticket.0 == self.generation {
            self.running = false;
        }
    }

    /// Stop whatever is running.
    pub const fn cancel(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }
}

/// The id of the last section whose top, less `threshold`, is at or above
/// `scroll_y`.
///
/// `sections` are `(id, top offset)` pairs in document order.
#[must_use]
pub fn active_section<'a, I>(sections: I, scroll_y: f64, threshold: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| scroll_y >= top - threshold)
        .last()
        .map(|(id, _)| id)
}

/// Hero translation for the current scroll offset.
#[must_use]
pub fn parallax_offset(scroll_y: f64, ratio: f64) -> f64 {
    scroll_y * ratio
}

/// CSS transform value for [`parallax_offset`].
#[must_use]
pub fn parallax_transform(scroll_y: f64, ratio: f64) -> String {
    // Adding zero turns -0.0 into 0.0
    format!("translateY({}px)", parallax_offset(scroll_y, ratio) + 0.0)
}

/// Coalesces scroll events into at most one update per animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    scheduled: bool,
}

impl FrameGate {
    #[must_use]
    pub const fn new() -> Self {
        Self { scheduled: false }
    }

    /// Record a scroll event. Returns `true` if the caller must schedule a
    /// frame; `false` if one is already pending.
    pub const fn request(&mut self) -> bool {
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Called from the frame callback before doing the work.
    pub const fn complete(&mut self) {
        self.scheduled = false;
    }

    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

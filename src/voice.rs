//! Auto-scroll state for the horizontal testimonial strip.

use crate::config::AutoScrollConfig;

/// Scroll geometry of the strip, as reported by the element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripGeometry {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl StripGeometry {
    pub fn max_scroll(&self) -> f64 {
        self.scroll_width - self.client_width
    }
}

/// The scrolling element. Writes may be rounded by the implementation, so
/// `geometry` must report what the element holds now.
pub trait Strip {
    type Error;

    fn geometry(&self) -> StripGeometry;
    fn write_scroll_left(&mut self, value: f64) -> Result<(), Self::Error>;
}

#[derive(Clone, Debug)]
pub struct AutoScroller {
    speed: f64,
    resume_delay_ms: f64,
    interacting: bool,
    resume_at: Option<f64>,
}

impl AutoScroller {
    pub fn new(cfg: &AutoScrollConfig) -> Self {
        Self {
            speed: cfg.speed,
            resume_delay_ms: cfg.resume_delay_ms,
            interacting: false,
            resume_at: None,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn touch_start(&mut self) {
        self.interacting = true;
        self.resume_at = None;
    }

    pub fn touch_end(&mut self, now_ms: f64) {
        self.resume_at = Some(now_ms + self.resume_delay_ms);
    }

    /// Whether the strip may advance at `now_ms`. Clears the interaction once
    /// the resume delay has passed.
    pub fn is_active(&mut self, now_ms: f64) -> bool {
        if let Some(at) = self.resume_at {
            if now_ms >= at {
                self.interacting = false;
                self.resume_at = None;
            }
        }
        !self.interacting
    }

    /// Offset to write before the wrap check, or `None` while paused.
    pub fn step(&mut self, now_ms: f64, scroll_left: f64) -> Option<f64> {
        self.is_active(now_ms).then(|| scroll_left + self.speed)
    }

    /// Checked against the offset the element actually holds after the step.
    pub fn should_wrap(geometry: &StripGeometry) -> bool {
        geometry.scroll_left >= geometry.max_scroll()
    }

    /// One frame: advance, read the offset back, and rewind to the start once
    /// the end is reached. Returns whether the strip was written.
    pub fn tick<S: Strip>(&mut self, now_ms: f64, strip: &mut S) -> Result<bool, S::Error> {
        let Some(next) = self.step(now_ms, strip.geometry().scroll_left) else {
            return Ok(false);
        };
        strip.write_scroll_left(next)?;
        if Self::should_wrap(&strip.geometry()) {
            strip.write_scroll_left(0.0)?;
        }
        Ok(true)
    }
}

//! Background line field: a few horizontal sine curves whose phase drifts
//! every frame and shifts with page scroll.

use std::ops::Range;

use crate::config::LineFieldConfig;

/// Drawing surface size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Whatever the field is painted on. The browser implementation wraps a 2D
/// canvas context; tests record the calls.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn stroke_path(&mut self, points: &[(f64, f64)], style: &str, line_width: f64);
}

/// One curve. Only `offset` changes after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveLine {
    baseline: f64,
    offset: f64,
    speed: f64,
    amplitude: f64,
}

fn pick(range: &Range<f64>, r: f64) -> f64 {
    range.start + r * (range.end - range.start)
}

impl WaveLine {
    /// `random` must yield values in `[0, 1)`.
    pub fn new(baseline: f64, cfg: &LineFieldConfig, random: &mut impl FnMut() -> f64) -> Self {
        Self {
            baseline,
            offset: pick(&cfg.offset_range, random()),
            speed: pick(&cfg.speed_range, random()),
            amplitude: pick(&cfg.amplitude_range, random()),
        }
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Vertical displacement from the baseline at horizontal position `x`.
    pub fn displacement(&self, x: f64, scroll_y: f64, cfg: &LineFieldConfig) -> f64 {
        self.amplitude * (x * cfg.frequency + self.offset + scroll_y * cfg.scroll_factor).sin()
    }

    /// Sampled curve across `width`: one point per `cfg.step` for `x < width`.
    pub fn samples(&self, width: f64, scroll_y: f64, cfg: &LineFieldConfig) -> Vec<(f64, f64)> {
        let count = sample_count(width, cfg.step);
        (0..count)
            .map(|i| {
                let x = i as f64 * cfg.step;
                (x, self.baseline + self.displacement(x, scroll_y, cfg))
            })
            .collect()
    }

    /// Path handed to the surface: the left edge at the baseline, then the samples.
    pub fn path(&self, width: f64, scroll_y: f64, cfg: &LineFieldConfig) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(sample_count(width, cfg.step) + 1);
        points.push((0.0, self.baseline));
        points.extend(self.samples(width, scroll_y, cfg));
        points
    }

    pub fn advance(&mut self) {
        self.offset += self.speed;
    }
}

/// Number of samples taken for `x = 0, step, 2*step, ... < width`.
pub fn sample_count(width: f64, step: f64) -> usize {
    if width <= 0.0 || step <= 0.0 {
        return 0;
    }
    (width / step).ceil() as usize
}

pub struct LineField {
    cfg: LineFieldConfig,
    viewport: Viewport,
    lines: Vec<WaveLine>,
}

impl LineField {
    /// Lays out `cfg.line_count` lines down the viewport. Baselines are fixed
    /// from here on, whatever later resizes do.
    pub fn new(cfg: LineFieldConfig, viewport: Viewport, mut random: impl FnMut() -> f64) -> Self {
        let top = viewport.height * cfg.first_baseline_ratio;
        let lines = (0..cfg.line_count)
            .map(|i| WaveLine::new(top + i as f64 * cfg.baseline_spacing, &cfg, &mut random))
            .collect();
        Self {
            cfg,
            viewport,
            lines,
        }
    }

    pub fn lines(&self) -> &[WaveLine] {
        &self.lines
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Paints one frame and advances every line's phase.
    pub fn draw<S: Surface>(&mut self, surface: &mut S, scroll_y: f64) {
        let Viewport { width, height } = self.viewport;
        surface.clear(width, height);
        for line in &mut self.lines {
            let path = line.path(width, scroll_y, &self.cfg);
            surface.stroke_path(&path, self.cfg.stroke_style, self.cfg.line_width);
            line.advance();
        }
    }
}

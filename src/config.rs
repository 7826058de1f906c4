//! Page constants. Everything the page behaviour depends on lives here so that
//! tests can build pages (and expectations) against the same values.

use std::ops::Range;

/// Background wave field.
#[derive(Clone, Debug, PartialEq)]
pub struct LineFieldConfig {
    pub canvas_id: &'static str,
    pub line_count: usize,
    /// First baseline as a fraction of the viewport height.
    pub first_baseline_ratio: f64,
    /// Vertical distance between consecutive baselines, in pixels.
    pub baseline_spacing: f64,
    pub offset_range: Range<f64>,
    pub speed_range: Range<f64>,
    pub amplitude_range: Range<f64>,
    /// Horizontal distance between curve samples.
    pub step: f64,
    /// Spatial frequency of the curve along x.
    pub frequency: f64,
    /// Phase contributed per pixel of page scroll.
    pub scroll_factor: f64,
    pub stroke_style: &'static str,
    pub line_width: f64,
}

impl Default for LineFieldConfig {
    fn default() -> Self {
        Self {
            canvas_id: "bg-canvas",
            line_count: 4,
            first_baseline_ratio: 0.3,
            baseline_spacing: 200.0,
            offset_range: 0.0..100.0,
            speed_range: 0.001..0.003,
            amplitude_range: 30.0..80.0,
            step: 20.0,
            frequency: 0.003,
            scroll_factor: 0.001,
            stroke_style: "rgba(100, 100, 100, 0.15)",
            line_width: 0.8,
        }
    }
}

/// Reservation popup.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupConfig {
    pub trigger_id: &'static str,
    pub popup_id: &'static str,
    pub text_selector: &'static str,
    pub icon_selector: &'static str,
    /// Classes present on the popup while it is closed.
    pub closed_classes: [&'static str; 3],
    pub hidden_class: &'static str,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            trigger_id: "reserve-btn",
            popup_id: "reserve-popup",
            text_selector: ".btn-text",
            icon_selector: ".btn-icon",
            closed_classes: ["opacity-0", "translate-y-4", "pointer-events-none"],
            hidden_class: "hidden",
        }
    }
}

/// Testimonial strip.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoScrollConfig {
    pub container_id: &'static str,
    /// Pixels advanced per frame.
    pub speed: f64,
    /// Delay after `touchend` before advancing again.
    pub resume_delay_ms: f64,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            container_id: "voice-container",
            speed: 0.5,
            resume_delay_ms: 1000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub lines: LineFieldConfig,
    pub popup: PopupConfig,
    pub voice: AutoScrollConfig,
    /// Class added to `<body>` once the module has started.
    pub loaded_class: &'static str,
    pub log_level: log::Level,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lines: LineFieldConfig::default(),
            popup: PopupConfig::default(),
            voice: AutoScrollConfig::default(),
            loaded_class: "loaded",
            log_level: log::Level::Info,
        }
    }
}

//! Scroll-driven reveal and parallax animations, described as plain data.
//!
//! Nothing here talks to the browser. The wasm layer resolves elements, builds
//! one [`Animation`] per effect and hands it to GSAP. `E` is whatever handle the
//! caller uses for an element (a DOM `Element` in the browser).

pub const HERO_LOGO: &str = "#hero-logo";
pub const HERO_TEXT: &str = "#hero-text";
pub const HERO_BG_IMG: &str = "#hero-bg img";
pub const HERO_SECTION: &str = "#hero-section";
pub const REVEAL_WRAPPER: &str = ".reveal-img-wrapper";
pub const REVEAL_OVERLAY: &str = ".reveal-overlay";
pub const REVEAL_IMG: &str = ".reveal-img";
pub const FADE_IN_UP: &str = ".fade-in-up";
pub const PARALLAX_COL: &str = ".parallax-col";
pub const WORKS_SECTION: &str = "#works";
pub const PARALLAX_TEXT: &str = ".parallax-text";
pub const SPEED_ATTR: &str = "data-speed";

/// Column speed used when `data-speed` is missing, unparsable or zero.
pub const DEFAULT_COLUMN_SPEED: f64 = 0.05;
/// Vertical travel of a parallax column over the works section.
pub const COLUMN_TRAVEL: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Target<E> {
    Selector(&'static str),
    Element(E),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scrub {
    /// Progress locked to the scrollbar.
    Locked,
    /// Progress catches up with the scrollbar over this many seconds.
    Smoothed(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTriggerVars<E> {
    pub trigger: Target<E>,
    pub start: &'static str,
    pub end: Option<&'static str>,
    pub scrub: Option<Scrub>,
}

impl<E> ScrollTriggerVars<E> {
    pub fn new(trigger: Target<E>, start: &'static str) -> Self {
        Self {
            trigger,
            start,
            end: None,
            scrub: None,
        }
    }

    pub fn end(mut self, end: &'static str) -> Self {
        self.end = Some(end);
        self
    }

    pub fn scrub(mut self, scrub: Scrub) -> Self {
        self.scrub = Some(scrub);
        self
    }
}

/// Properties of one tween, in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct TweenVars<E> {
    pub props: Vec<(&'static str, Value)>,
    pub scroll_trigger: Option<ScrollTriggerVars<E>>,
}

impl<E> Default for TweenVars<E> {
    fn default() -> Self {
        Self {
            props: Vec::new(),
            scroll_trigger: None,
        }
    }
}

impl<E> TweenVars<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num(mut self, key: &'static str, value: f64) -> Self {
        self.props.push((key, Value::Number(value)));
        self
    }

    pub fn text(mut self, key: &'static str, value: &'static str) -> Self {
        self.props.push((key, Value::Text(value)));
        self
    }

    pub fn ease(self, ease: &'static str) -> Self {
        self.text("ease", ease)
    }

    pub fn scroll_trigger(mut self, st: ScrollTriggerVars<E>) -> Self {
        self.scroll_trigger = Some(st);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

/// One `.to()` on a timeline. `position` is GSAP's position parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<E> {
    pub target: Target<E>,
    pub vars: TweenVars<E>,
    pub position: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Animation<E> {
    To {
        target: Target<E>,
        vars: TweenVars<E>,
    },
    FromTo {
        target: Target<E>,
        from: TweenVars<E>,
        to: TweenVars<E>,
    },
    Timeline {
        scroll_trigger: Option<ScrollTriggerVars<E>>,
        steps: Vec<Step<E>>,
    },
}

/// Logo scales in, then the hero copy rises while the logo is still settling.
pub fn hero_intro<E>() -> Animation<E> {
    Animation::Timeline {
        scroll_trigger: None,
        steps: vec![
            Step {
                target: Target::Selector(HERO_LOGO),
                vars: TweenVars::new()
                    .num("opacity", 1.0)
                    .num("scale", 1.0)
                    .num("duration", 1.8)
                    .ease("power3.out"),
                position: None,
            },
            Step {
                target: Target::Selector(HERO_TEXT),
                vars: TweenVars::new()
                    .num("opacity", 1.0)
                    .num("y", 0.0)
                    .num("duration", 1.2)
                    .ease("power2.out"),
                position: Some("-=1.2"),
            },
        ],
    }
}

pub fn hero_parallax<E>() -> Animation<E> {
    Animation::To {
        target: Target::Selector(HERO_BG_IMG),
        vars: TweenVars::new()
            .num("yPercent", 20.0)
            .ease("none")
            .scroll_trigger(
                ScrollTriggerVars::new(Target::Selector(HERO_SECTION), "top top")
                    .end("bottom top")
                    .scrub(Scrub::Locked),
            ),
    }
}

/// Overlay wipes away while the image settles to its natural scale.
pub fn image_reveal<E>(wrapper: E, overlay: E, image: E) -> Animation<E> {
    Animation::Timeline {
        scroll_trigger: Some(ScrollTriggerVars::new(Target::Element(wrapper), "top 85%")),
        steps: vec![
            Step {
                target: Target::Element(overlay),
                vars: TweenVars::new()
                    .text("height", "0%")
                    .num("duration", 1.4)
                    .ease("expo.inOut"),
                position: None,
            },
            Step {
                target: Target::Element(image),
                vars: TweenVars::new()
                    .num("scale", 1.0)
                    .num("duration", 1.6)
                    .ease("power3.out"),
                position: Some("-=1.4"),
            },
        ],
    }
}

pub fn fade_in_up<E: Clone>(element: E) -> Animation<E> {
    Animation::FromTo {
        target: Target::Element(element.clone()),
        from: TweenVars::new().num("y", 40.0).num("opacity", 0.0),
        to: TweenVars::new()
            .num("y", 0.0)
            .num("opacity", 1.0)
            .num("duration", 1.2)
            .ease("power3.out")
            .scroll_trigger(ScrollTriggerVars::new(Target::Element(element), "top 90%")),
    }
}

/// Columns only use the sign of their speed: positive drifts up, anything
/// else drifts down.
pub fn column_shift(speed: f64) -> f64 {
    -COLUMN_TRAVEL * if speed > 0.0 { 1.0 } else { -1.0 }
}

/// `parsed` is `parseFloat` of the column's `data-speed` (NaN when absent).
pub fn column_parallax<E>(column: E, parsed: f64) -> Animation<E> {
    Animation::To {
        target: Target::Element(column),
        vars: TweenVars::new()
            .num("y", column_shift(column_speed(parsed)))
            .ease("none")
            .scroll_trigger(
                ScrollTriggerVars::new(Target::Selector(WORKS_SECTION), "top bottom")
                    .end("bottom top")
                    .scrub(Scrub::Smoothed(1.0)),
            ),
    }
}

pub fn text_parallax<E>() -> Animation<E> {
    Animation::To {
        target: Target::Selector(PARALLAX_TEXT),
        vars: TweenVars::new()
            .num("yPercent", 30.0)
            .ease("none")
            .scroll_trigger(
                ScrollTriggerVars::new(Target::Selector("body"), "top top")
                    .end("bottom bottom")
                    .scrub(Scrub::Smoothed(1.0)),
            ),
    }
}

/// Falls back to [`DEFAULT_COLUMN_SPEED`] for zero and NaN, the values
/// `parseFloat(..) || 0.05` treats as falsy.
pub fn column_speed(parsed: f64) -> f64 {
    if parsed == 0.0 || parsed.is_nan() {
        DEFAULT_COLUMN_SPEED
    } else {
        parsed
    }
}

use std::convert::Infallible;

use wave_page::config::AutoScrollConfig;
use wave_page::voice::{AutoScroller, Strip, StripGeometry};

/// Element stand-in. `round_writes` mimics browsers that snap `scrollLeft` to
/// whole pixels.
struct FakeStrip {
    scroll_left: f64,
    scroll_width: f64,
    client_width: f64,
    round_writes: bool,
    writes: Vec<f64>,
}

impl FakeStrip {
    fn at(scroll_left: f64) -> Self {
        Self {
            scroll_left,
            scroll_width: 1000.0,
            client_width: 300.0,
            round_writes: false,
            writes: Vec::new(),
        }
    }
}

impl Strip for FakeStrip {
    type Error = Infallible;

    fn geometry(&self) -> StripGeometry {
        StripGeometry {
            scroll_left: self.scroll_left,
            scroll_width: self.scroll_width,
            client_width: self.client_width,
        }
    }

    fn write_scroll_left(&mut self, value: f64) -> Result<(), Infallible> {
        self.writes.push(value);
        self.scroll_left = if self.round_writes { value.round() } else { value };
        Ok(())
    }
}

fn scroller() -> AutoScroller {
    AutoScroller::new(&AutoScrollConfig::default())
}

/// Offset after one frame at `now_ms`, or `None` when nothing was written.
fn frame(s: &mut AutoScroller, now_ms: f64, scroll_left: f64) -> Option<f64> {
    let mut el = FakeStrip::at(scroll_left);
    let moved = s.tick(now_ms, &mut el).unwrap();
    moved.then_some(el.scroll_left)
}

#[test]
fn advances_by_speed() {
    let mut s = scroller();
    assert_eq!(frame(&mut s, 0.0, 10.0), Some(10.5));
    assert_eq!(frame(&mut s, 16.0, 10.5), Some(11.0));
}

#[test]
fn wraps_at_end() {
    let mut s = scroller();
    assert_eq!(frame(&mut s, 0.0, 998.0), Some(0.0));
    assert_eq!(frame(&mut s, 0.0, 699.5), Some(0.0));
    assert_eq!(frame(&mut s, 0.0, 699.0), Some(699.5));
}

#[test]
fn wrap_writes_advance_then_rewind() {
    let mut s = scroller();
    let mut el = FakeStrip::at(998.0);
    assert!(s.tick(0.0, &mut el).unwrap());
    assert_eq!(el.writes, vec![998.5, 0.0]);
}

#[test]
fn wrap_check_uses_offset_read_back() {
    let mut s = scroller();
    // 699.7 is short of the end, but the element snaps it to 700.
    let mut el = FakeStrip {
        round_writes: true,
        ..FakeStrip::at(699.2)
    };
    assert!(s.tick(0.0, &mut el).unwrap());
    assert_eq!(el.writes.len(), 2);
    assert_eq!(el.scroll_left, 0.0);

    let mut el = FakeStrip::at(699.2);
    assert!(s.tick(0.0, &mut el).unwrap());
    assert_eq!(el.writes.len(), 1);
    assert!(el.scroll_left > 699.0);
}

#[test]
fn wrap_check_compares_with_max_scroll() {
    let at = |scroll_left| FakeStrip::at(scroll_left).geometry();
    assert!(AutoScroller::should_wrap(&at(700.0)));
    assert!(!AutoScroller::should_wrap(&at(699.9)));
}

#[test]
fn paused_strip_is_not_written() {
    let mut s = scroller();
    s.touch_start();
    let mut el = FakeStrip::at(50.0);
    assert!(!s.tick(0.0, &mut el).unwrap());
    assert!(el.writes.is_empty());
    assert_eq!(el.scroll_left, 50.0);
}

#[test]
fn touch_pauses_until_delay_after_release() {
    let mut s = scroller();
    s.touch_start();
    assert_eq!(frame(&mut s, 100.0, 50.0), None);
    assert_eq!(frame(&mut s, 5000.0, 50.0), None);

    s.touch_end(5000.0);
    assert_eq!(frame(&mut s, 5500.0, 50.0), None);
    assert_eq!(frame(&mut s, 5999.9, 50.0), None);
    assert_eq!(frame(&mut s, 6000.0, 50.0), Some(50.5));
    assert_eq!(frame(&mut s, 6016.0, 50.5), Some(51.0));
}

#[test]
fn new_touch_cancels_pending_resume() {
    let mut s = scroller();
    s.touch_start();
    s.touch_end(0.0);
    s.touch_start();
    assert_eq!(frame(&mut s, 2000.0, 50.0), None);

    s.touch_end(2000.0);
    assert_eq!(frame(&mut s, 3000.0, 50.0), Some(50.5));
}

#[test]
fn speed_comes_from_config() {
    let mut s = AutoScroller::new(&AutoScrollConfig {
        speed: 2.0,
        ..AutoScrollConfig::default()
    });
    assert_eq!(s.speed(), 2.0);
    assert_eq!(frame(&mut s, 0.0, 0.0), Some(2.0));
}

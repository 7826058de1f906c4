use wave_page::reveal::{
    column_parallax, column_shift, column_speed, fade_in_up, hero_intro, hero_parallax,
    image_reveal, text_parallax, Animation, Scrub, Target, Value, DEFAULT_COLUMN_SPEED,
};

#[test]
fn column_speed_keeps_parsed_value() {
    assert_eq!(column_speed(0.1), 0.1);
    assert_eq!(column_speed(-0.2), -0.2);
    assert_eq!(column_speed(f64::INFINITY), f64::INFINITY);
}

#[test]
fn column_speed_falls_back_on_zero_and_nan() {
    assert_eq!(column_speed(f64::NAN), DEFAULT_COLUMN_SPEED);
    assert_eq!(column_speed(0.0), DEFAULT_COLUMN_SPEED);
    assert_eq!(column_speed(-0.0), DEFAULT_COLUMN_SPEED);
}

#[test]
fn columns_move_by_sign_only() {
    assert_eq!(column_shift(0.05), -100.0);
    assert_eq!(column_shift(3.0), -100.0);
    assert_eq!(column_shift(-0.05), 100.0);
    assert_eq!(column_shift(0.0), 100.0);
}

#[test]
fn column_parallax_scrubs_over_works() {
    let Animation::To { target, vars } = column_parallax("col", -1.0) else {
        panic!("column parallax should be a single tween");
    };
    assert_eq!(target, Target::Element("col"));
    assert_eq!(vars.get("y"), Some(&Value::Number(100.0)));
    assert_eq!(vars.get("ease"), Some(&Value::Text("none")));

    let st = vars.scroll_trigger.expect("scroll trigger");
    assert_eq!(st.trigger, Target::Selector("#works"));
    assert_eq!(st.start, "top bottom");
    assert_eq!(st.end, Some("bottom top"));
    assert_eq!(st.scrub, Some(Scrub::Smoothed(1.0)));
}

#[test]
fn column_without_speed_moves_up() {
    for parsed in [f64::NAN, 0.0] {
        let Animation::To { vars, .. } = column_parallax("col", parsed) else {
            panic!("column parallax should be a single tween");
        };
        assert_eq!(vars.get("y"), Some(&Value::Number(-100.0)));
    }
}

#[test]
fn hero_text_overlaps_logo() {
    let Animation::Timeline { scroll_trigger, steps } = hero_intro::<()>() else {
        panic!("hero intro should be a timeline");
    };
    assert!(scroll_trigger.is_none());
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].target, Target::Selector("#hero-logo"));
    assert_eq!(steps[0].vars.get("duration"), Some(&Value::Number(1.8)));
    assert_eq!(steps[0].position, None);
    assert_eq!(steps[1].target, Target::Selector("#hero-text"));
    assert_eq!(steps[1].position, Some("-=1.2"));
}

#[test]
fn hero_background_is_locked_to_scroll() {
    let Animation::To { target, vars } = hero_parallax::<()>() else {
        panic!("hero parallax should be a single tween");
    };
    assert_eq!(target, Target::Selector("#hero-bg img"));
    assert_eq!(vars.get("yPercent"), Some(&Value::Number(20.0)));
    let st = vars.scroll_trigger.expect("scroll trigger");
    assert_eq!(st.trigger, Target::Selector("#hero-section"));
    assert_eq!(st.scrub, Some(Scrub::Locked));
}

#[test]
fn image_reveal_triggers_on_wrapper() {
    let Animation::Timeline { scroll_trigger, steps } = image_reveal("wrap", "overlay", "img") else {
        panic!("image reveal should be a timeline");
    };
    let st = scroll_trigger.expect("scroll trigger");
    assert_eq!(st.trigger, Target::Element("wrap"));
    assert_eq!(st.start, "top 85%");
    assert_eq!(st.end, None);
    assert_eq!(steps[0].target, Target::Element("overlay"));
    assert_eq!(steps[0].vars.get("height"), Some(&Value::Text("0%")));
    assert_eq!(steps[1].target, Target::Element("img"));
    assert_eq!(steps[1].position, Some("-=1.4"));
}

#[test]
fn fade_in_up_starts_low_and_transparent() {
    let Animation::FromTo { target, from, to } = fade_in_up("p") else {
        panic!("fade in should be a fromTo");
    };
    assert_eq!(target, Target::Element("p"));
    assert_eq!(from.get("y"), Some(&Value::Number(40.0)));
    assert_eq!(from.get("opacity"), Some(&Value::Number(0.0)));
    assert!(from.scroll_trigger.is_none());
    assert_eq!(to.get("opacity"), Some(&Value::Number(1.0)));
    let st = to.scroll_trigger.expect("scroll trigger");
    assert_eq!(st.trigger, Target::Element("p"));
    assert_eq!(st.start, "top 90%");
}

#[test]
fn background_text_spans_whole_page() {
    let Animation::To { vars, .. } = text_parallax::<()>() else {
        panic!("text parallax should be a single tween");
    };
    assert_eq!(vars.get("yPercent"), Some(&Value::Number(30.0)));
    let st = vars.scroll_trigger.expect("scroll trigger");
    assert_eq!(st.trigger, Target::Selector("body"));
    assert_eq!(st.end, Some("bottom bottom"));
}

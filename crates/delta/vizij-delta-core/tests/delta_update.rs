use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use vizij_delta_core::{
    shared, CurveSpec, CustomProperties, CustomProperty, Delta, DeltaProps, PropValue,
    PropertyBag, PropertySpec, WriteLog, WriteOp,
};

fn bound(key: &str, spec: PropertySpec) -> (Rc<RefCell<PropertyBag>>, Delta) {
    let el = shared(PropertyBag::new());
    let delta = Delta::new(DeltaProps::new(key, spec).with_target(el.clone())).unwrap();
    (el, delta)
}

fn value(el: &Rc<RefCell<PropertyBag>>, key: &str) -> PropValue {
    el.borrow().get(key).cloned().expect("property was written")
}

#[test]
fn number_hits_start_and_end() {
    let (el, d) = bound("radius", PropertySpec::pair("20", 30));
    d.update(0.0, 0.0, true);
    assert_eq!(value(&el, "radius"), PropValue::Number(20.0));
    d.update(1.0, 1.0, true);
    assert_eq!(value(&el, "radius"), PropValue::Number(30.0));
    d.update(0.5, 0.5, true);
    assert_eq!(value(&el, "radius"), PropValue::Number(25.0));
}

#[test]
fn number_with_curve_scales_start_by_curve_of_raw() {
    let spec = PropertySpec::pair("20", 30).curve(CurveSpec::function(|p| p * p));
    let (el, d) = bound("radius", spec);
    // eased progress is ignored once a curve is present
    d.update(0.9, 0.5, true);
    let v = value(&el, "radius").as_number().unwrap();
    assert_abs_diff_eq!(v, 0.25 * 20.0 + 0.5 * 10.0, epsilon = 1e-12);
}

#[test]
fn unit_appends_the_unit() {
    let (el, d) = bound("x", PropertySpec::pair("20", "30rem"));
    d.update(0.5, 0.5, true);
    assert_eq!(value(&el, "x"), PropValue::Text("25rem".into()));
    d.update(0.0, 0.0, true);
    assert_eq!(value(&el, "x"), PropValue::Text("20rem".into()));
}

#[test]
fn unit_with_curve_is_not_rounded() {
    let spec = PropertySpec::pair("20", "30rem").curve(CurveSpec::function(|p| p * p * p));
    let (el, d) = bound("x", spec);
    d.update(0.1, 0.75, true);
    // 0.421875 * 20 + 0.75 * 10
    assert_eq!(value(&el, "x"), PropValue::Text("15.9375rem".into()));
}

#[test]
fn color_truncates_rgb_and_keeps_alpha() {
    let (el, d) = bound("fill", PropertySpec::pair("cyan", "hotpink"));
    d.update(0.5, 0.5, true);
    assert_eq!(value(&el, "fill"), PropValue::Text("rgba(127, 180, 217, 1)".into()));

    let (el, d) = bound("fill", PropertySpec::pair("cyan", "rgba(20,10,5,.25)"));
    d.update(0.5, 0.5, true);
    assert_eq!(value(&el, "fill"), PropValue::Text("rgba(10, 132, 130, 0.625)".into()));
}

#[test]
fn color_channels_truncate_toward_zero_when_negative() {
    // overshoot below the start: -2.7 becomes -2, not -3
    let (el, d) = bound("fill", PropertySpec::pair("rgba(0,0,0,1)", "rgba(10,10,10,1)"));
    d.update(-0.27, -0.27, true);
    assert_eq!(value(&el, "fill"), PropValue::Text("rgba(-2, -2, -2, 1)".into()));

    let spec = PropertySpec::pair("rgba(5,5,5,1)", "rgba(5,5,5,1)")
        .curve(CurveSpec::function(|_| -0.5));
    let (el, d) = bound("fill", spec);
    d.update(0.5, 0.5, true);
    assert_eq!(value(&el, "fill"), PropValue::Text("rgba(-2, -2, -2, -0.5)".into()));
}

#[test]
fn huge_unit_values_use_exponent_form() {
    let (el, d) = bound("x", PropertySpec::pair("0px", "1e25px"));
    d.update(1.0, 1.0, true);
    assert_eq!(value(&el, "x"), PropValue::Text("1e+25px".into()));
}

#[test]
fn color_with_named_curve() {
    let spec = PropertySpec::pair("deeppink", "yellow").curve("pow(2).out");
    let (el, d) = bound("fill", spec);
    d.update(0.5, 0.5, true);
    assert_eq!(value(&el, "fill"), PropValue::Text("rgba(191, 132, 36, 0.75)".into()));
}

#[test]
fn update_returns_self_for_chaining() {
    let (el, d) = bound("radius", PropertySpec::pair("0", 100));
    let same = d.update(0.2, 0.2, true).update(0.4, 0.4, true);
    assert!(std::ptr::eq(same, &d));
    assert_eq!(value(&el, "radius"), PropValue::Number(40.0));
}

#[test]
fn repeated_updates_write_identical_values() {
    let log = shared(WriteLog::new());
    let d = Delta::new(
        DeltaProps::new("x", PropertySpec::pair("20", "30rem")).with_target(log.clone()),
    )
    .unwrap();

    d.update(0.3, 0.3, true);
    d.update(0.3, 0.3, true);
    d.update(0.8, 0.8, false);
    d.update(0.3, 0.3, true);

    let writes = log.borrow();
    assert_eq!(writes.len(), 4);
    assert_eq!(writes.0[0], WriteOp::new("x", PropValue::Text("23rem".into())));
    assert_eq!(writes.0[0], writes.0[1]);
    assert_eq!(writes.0[0], writes.0[3]);
    assert_eq!(writes.0[2].value, PropValue::Text("28rem".into()));
}

#[test]
fn skip_render_writes_to_support_props() {
    let el = shared(PropertyBag::new());
    let support = shared(PropertyBag::new());
    let mut custom = CustomProperties::new();
    custom.insert("shape".into(), CustomProperty::default().skip_render());

    let d = Delta::new(
        DeltaProps::new("shape", PropertySpec::pair("0", 10))
            .with_custom_properties(custom)
            .with_target(el.clone())
            .with_support_props(support.clone()),
    )
    .unwrap();
    d.update(0.5, 0.5, true);

    assert!(el.borrow().is_empty());
    assert_eq!(support.borrow().get("shape"), Some(&PropValue::Number(5.0)));
}

#[test]
fn without_target_writes_go_to_a_private_bag() {
    let d = Delta::new(DeltaProps::new("x", PropertySpec::pair("0", 10))).unwrap();
    d.update(1.0, 1.0, true);
    // nothing outside the delta holds the fallback bag
    assert_eq!(Rc::strong_count(d.target()), 1);
}

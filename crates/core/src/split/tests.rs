use super::*;

#[test]
fn split_evenly_puts_remainder_on_last() {
    assert_eq!(split_evenly(100, 3), vec![33, 33, 34]);
    assert_eq!(split_evenly(100, 4), vec![25, 25, 25, 25]);
    assert_eq!(split_evenly(100, 1), vec![100]);
    assert_eq!(split_evenly(66, 4), vec![16, 16, 16, 18]);
    assert!(split_evenly(100, 0).is_empty());
}

#[test]
fn split_evenly_handles_more_slots_than_units() {
    let out = split_evenly(100, 150);
    assert_eq!(out.len(), 150);
    assert_eq!(out.iter().sum::<u32>(), 100);
    assert_eq!(out[149], 100);
    assert!(out[..149].iter().all(|v| *v == 0));
}

#[test]
fn redistribute_pins_target_and_splits_rest() {
    assert_eq!(redistribute(3, 0, 50, 100).unwrap(), vec![50, 25, 25]);
    assert_eq!(redistribute(3, 1, 34, 100).unwrap(), vec![33, 34, 33]);
    assert_eq!(redistribute(4, 0, 0, 100).unwrap(), vec![0, 33, 33, 34]);
}

#[test]
fn redistribute_remainder_goes_to_last_other_sibling() {
    // Target is the last slot: the remainder lands on the slot just before it.
    assert_eq!(redistribute(4, 3, 0, 100).unwrap(), vec![33, 33, 34, 0]);
    assert_eq!(redistribute(3, 2, 35, 100).unwrap(), vec![32, 33, 35]);
}

#[test]
fn redistribute_caps_value_and_rejects_bad_input() {
    assert_eq!(redistribute(2, 0, 250, 100).unwrap(), vec![100, 0]);
    assert_eq!(
        redistribute(2, 2, 10, 100).unwrap_err(),
        SplitError::IndexOutOfBounds { index: 2, count: 2 }
    );
    assert_eq!(
        redistribute(1, 0, 40, 100).unwrap_err(),
        SplitError::NoSiblings
    );
    assert_eq!(redistribute(1, 0, 100, 100).unwrap(), vec![100]);
}

#[test]
fn rounded_percent_rounds_half_up_and_caps_incomplete() {
    assert_eq!(rounded_percent(0, 0), 0);
    assert_eq!(rounded_percent(1, 4), 25);
    assert_eq!(rounded_percent(1, 2), 50);
    assert_eq!(rounded_percent(1, 3), 33);
    assert_eq!(rounded_percent(2, 3), 67);
    assert_eq!(rounded_percent(1, 8), 13);
    assert_eq!(rounded_percent(199, 200), 99);
    assert_eq!(rounded_percent(5, 5), 100);
}

#[test]
fn equal_share_percent_ignores_tally_size() {
    assert_eq!(equal_share_percent(&[]), 0);
    assert_eq!(
        equal_share_percent(&[(1, 1), (0, 30), (0, 2), (0, 0)]),
        25
    );
    assert_eq!(equal_share_percent(&[(3, 3), (9, 9)]), 100);
    assert_eq!(equal_share_percent(&[(1, 2), (0, 0)]), 25);
    assert_eq!(equal_share_percent(&[(2, 2), (0, 0)]), 50);
}

#[test]
fn ease_curve_is_anchored_and_symmetric() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert_eq!(ease_in_out_cubic(0.5), 0.5);
    assert_eq!(ease_in_out_cubic(-3.0), 0.0);
    assert_eq!(ease_in_out_cubic(7.0), 1.0);
    let a = ease_in_out_cubic(0.25);
    let b = ease_in_out_cubic(0.75);
    assert!((a + b - 1.0).abs() < 1e-12);
    assert!(a < 0.25);
}

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(10.0, 40.0, 0.0), 10.0);
    assert_eq!(lerp(10.0, 40.0, 1.0), 40.0);
    assert_eq!(lerp(40.0, 10.0, 0.5), 25.0);
}

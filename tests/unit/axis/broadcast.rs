use super::*;

#[test]
fn scalar_broadcasts_to_every_axis() {
    let v: Vec<usize> = dimensionize(3usize, 2).unwrap();
    assert_eq!(v, vec![3, 3]);

    let v: Vec<usize> = dimensionize(3usize, 4).unwrap();
    assert_eq!(v, vec![3, 3, 3, 3]);
}

#[test]
fn pair_is_passed_through_for_two_axes() {
    let v = AxisValue::PerAxis(2usize, 5usize).broadcast(2).unwrap();
    assert_eq!(v, vec![2, 5]);

    let p = AxisValue::PerAxis(2usize, 5usize).pair();
    assert_eq!(p, AxisPair { row: 2, col: 5 });
}

#[test]
fn pair_rejects_other_axis_counts() {
    let err = AxisValue::PerAxis(1usize, 1usize).broadcast(3).unwrap_err();
    assert!(matches!(
        err,
        ConvError::AxisCount {
            expected: 3,
            got: 2
        }
    ));
}

#[test]
fn scalar_accessor_rejects_pairs() {
    assert_eq!(AxisValue::Scalar(7usize).scalar().unwrap(), 7);
    assert!(matches!(
        AxisValue::PerAxis(1usize, 2usize).scalar(),
        Err(ConvError::AxisCount {
            expected: 1,
            got: 2
        })
    ));
}

#[test]
fn json_accepts_scalar_or_two_element_list() {
    let s: AxisValue<usize> = serde_json::from_str("4").unwrap();
    assert_eq!(s, AxisValue::Scalar(4));

    let p: AxisValue<usize> = serde_json::from_str("[2, 3]").unwrap();
    assert_eq!(p, AxisValue::PerAxis(2, 3));

    assert_eq!(serde_json::to_string(&p).unwrap(), "[2,3]");
    assert_eq!(serde_json::to_string(&s).unwrap(), "4");
}

#[test]
fn json_rejects_lists_of_the_wrong_length() {
    let err = serde_json::from_str::<AxisValue<usize>>("[1, 2, 3]").unwrap_err();
    assert!(err.to_string().contains("expected 2 per-axis values, got 3"));

    assert!(serde_json::from_str::<AxisValue<usize>>("[]").is_err());
}

use super::*;
use serde_json::json;

#[test]
fn empty_object_uses_defaults() {
    let cfg = WindowConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, WindowConfig::default());
    assert_eq!(cfg.tail_policy(), TailPolicy::Drop);
}

#[test]
fn parses_scalar_and_per_axis_values() {
    let cfg = WindowConfig::from_json_str(
        r#"{ "kernel_size": [2, 3], "stride": 1, "padding": ["SAME", 0] }"#,
    )
    .unwrap();
    assert_eq!(cfg.kernel_size, AxisValue::PerAxis(2, 3));
    assert_eq!(cfg.stride, AxisValue::Scalar(1));
    assert_eq!(
        cfg.padding,
        AxisValue::PerAxis(Padding::Same, Padding::Explicit(0))
    );
}

#[test]
fn tail_overrides_incomplete_pass_flag() {
    let cfg = WindowConfig::from_json_str(r#"{ "include_incomplete_pass": true }"#).unwrap();
    assert_eq!(cfg.tail_policy(), TailPolicy::Truncate);

    let cfg =
        WindowConfig::from_json_str(r#"{ "include_incomplete_pass": true, "tail": "pad" }"#)
            .unwrap();
    assert_eq!(cfg.tail_policy(), TailPolicy::Pad);
}

#[test]
fn rejects_unknown_fields_and_malformed_documents() {
    assert!(matches!(
        WindowConfig::from_json_str(r#"{ "kernal_size": 2 }"#),
        Err(ConvError::Serde(_))
    ));
    assert!(matches!(
        WindowConfig::from_json_str(r#"{ "stride": "two" }"#),
        Err(ConvError::Serde(_))
    ));
    assert!(matches!(
        WindowConfig::from_json_str("{ "),
        Err(ConvError::Serde(_))
    ));
}

#[test]
fn lists_must_hold_one_value_per_axis() {
    assert!(matches!(
        WindowConfig::from_json_str(r#"{ "stride": [1, 2, 3] }"#),
        Err(ConvError::AxisCount {
            expected: 2,
            got: 3
        })
    ));
    assert!(matches!(
        WindowConfig::from_json_str(r#"{ "kernel_size": [4] }"#),
        Err(ConvError::AxisCount {
            expected: 2,
            got: 1
        })
    ));
    assert!(matches!(
        WindowConfig::from_json_str(r#"{ "padding": [] }"#),
        Err(ConvError::AxisCount {
            expected: 2,
            got: 0
        })
    ));
}

#[test]
fn padding_values_fail_like_the_typed_builders() {
    let err = WindowConfig::from_json_str(r#"{ "padding": -1 }"#).unwrap_err();
    assert!(matches!(err, ConvError::NegativePadding(-1)));
    assert_eq!(err.to_string(), Padding::explicit(-1).unwrap_err().to_string());

    assert!(matches!(
        WindowConfig::from_json_str(r#"{ "padding": "BAD" }"#),
        Err(ConvError::InvalidPadding(_))
    ));
    assert!(matches!(
        WindowConfig::from_json_str(r#"{ "padding": ["SAME", -2] }"#),
        Err(ConvError::NegativePadding(-2))
    ));
}

#[test]
fn plain_serde_keeps_the_validation_message() {
    let err = serde_json::from_str::<WindowConfig>(r#"{ "padding": -1 }"#).unwrap_err();
    assert!(err.to_string().contains("padding must be at least zero"));

    let err = serde_json::from_str::<WindowConfig>(r#"{ "stride": [1, 2, 3] }"#).unwrap_err();
    assert!(err.to_string().contains("expected 2 per-axis values, got 3"));
}

#[test]
fn one_dimensional_spec_requires_scalars() {
    let cfg = WindowConfig {
        kernel_size: AxisValue::PerAxis(2, 2),
        ..WindowConfig::default()
    };
    assert!(matches!(
        cfg.window_spec(0),
        Err(ConvError::AxisCount {
            expected: 1,
            got: 2
        })
    ));
}

#[test]
fn windows_a_json_array() {
    let cfg = WindowConfig {
        kernel_size: AxisValue::Scalar(2),
        padding: AxisValue::Scalar(Padding::Explicit(2)),
        ..WindowConfig::default()
    };
    let out = windowed_value(&json!([1, 2, 3]), &cfg, json!(42)).unwrap();
    assert_eq!(
        out,
        vec![
            vec![json!(42), json!(42)],
            vec![json!(42), json!(1)],
            vec![json!(1), json!(2)],
            vec![json!(2), json!(3)],
            vec![json!(3), json!(42)],
            vec![json!(42), json!(42)],
        ]
    );
}

#[test]
fn null_is_the_default_fill() {
    let cfg = WindowConfig {
        kernel_size: AxisValue::Scalar(3),
        padding: AxisValue::Scalar(Padding::Same),
        ..WindowConfig::default()
    };
    let out = windowed_value(&json!(["a"]), &cfg, Value::Null).unwrap();
    assert_eq!(out, vec![vec![Value::Null, json!("a"), Value::Null]]);
}

#[test]
fn non_arrays_are_not_iterable() {
    let cfg = WindowConfig::default();
    let err = windowed_value(&json!(7), &cfg, Value::Null).unwrap_err();
    assert!(matches!(err, ConvError::NotIterable(_)));
    assert!(err.to_string().contains("got a number"));

    let err = windowed_2d_value(&json!([[1, 2], 3]), &cfg, Value::Null).unwrap_err();
    assert!(matches!(err, ConvError::NotIterable(_)));
    assert!(err.to_string().contains("matrix row 1"));
}

#[test]
fn windows_a_json_matrix() {
    let cfg = WindowConfig::from_json_str(r#"{ "kernel_size": 2 }"#).unwrap();
    let out = windowed_2d_value(&json!([[1, 2], [3, 4], [5, 6]]), &cfg, Value::Null).unwrap();
    assert_eq!(
        out,
        vec![
            vec![vec![json!(1), json!(2)], vec![json!(3), json!(4)]],
            vec![vec![json!(3), json!(4)], vec![json!(5), json!(6)]],
        ]
    );
}

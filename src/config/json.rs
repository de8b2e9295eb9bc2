use serde_json::Value;

use crate::{
    axis::broadcast::{AxisRepr, AxisValue},
    foundation::error::{ConvError, ConvResult},
    rect::compose::{RectSpec, RectWindow, windowed_2d},
    window::{
        iter::windowed,
        padding::{Padding, PaddingRepr},
        spec::{TailPolicy, WindowSpec},
    },
};

/// Serializable windowing options.
///
/// ```json
/// { "kernel_size": [2, 3], "stride": 1, "padding": "SAME", "tail": "pad" }
/// ```
///
/// Missing fields take their defaults and unknown fields are rejected. A list value must hold
/// exactly one entry per axis.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawWindowConfig")]
pub struct WindowConfig {
    /// Elements per window, scalar or `[row, col]`.
    pub kernel_size: AxisValue<usize>,

    /// Step between windows, scalar or `[row, col]`.
    pub stride: AxisValue<usize>,

    /// Boundary padding, scalar or `[row, col]`; integers or `"SAME"` / `"VALID"`.
    pub padding: AxisValue<Padding>,

    /// Emit one truncated trailing window.
    pub include_incomplete_pass: bool,

    /// Explicit tail policy; takes precedence over `include_incomplete_pass`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tail: Option<TailPolicy>,
}

fn default_one() -> AxisValue<usize> {
    AxisValue::Scalar(1)
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            kernel_size: default_one(),
            stride: default_one(),
            padding: AxisValue::default(),
            include_incomplete_pass: false,
            tail: None,
        }
    }
}

/// Document shape of [`WindowConfig`] before axis counts and padding values are checked.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWindowConfig {
    #[serde(default)]
    kernel_size: Option<AxisRepr<usize>>,
    #[serde(default)]
    stride: Option<AxisRepr<usize>>,
    #[serde(default)]
    padding: Option<AxisRepr<PaddingRepr>>,
    #[serde(default)]
    include_incomplete_pass: bool,
    #[serde(default)]
    tail: Option<TailPolicy>,
}

impl TryFrom<RawWindowConfig> for WindowConfig {
    type Error = ConvError;

    fn try_from(raw: RawWindowConfig) -> Result<Self, Self::Error> {
        let axis = |repr: Option<AxisRepr<usize>>| {
            repr.map_or_else(|| Ok(default_one()), AxisValue::try_from)
        };
        let padding = match raw.padding {
            Some(repr) => AxisValue::<PaddingRepr>::try_from(repr)?.try_map(Padding::try_from)?,
            None => AxisValue::default(),
        };
        Ok(Self {
            kernel_size: axis(raw.kernel_size)?,
            stride: axis(raw.stride)?,
            padding,
            include_incomplete_pass: raw.include_incomplete_pass,
            tail: raw.tail,
        })
    }
}

impl WindowConfig {
    /// Parse a JSON document.
    ///
    /// Malformed JSON, unknown fields and wrongly typed values fail with
    /// [`ConvError::Serde`]. Lists of the wrong length and bad padding values fail with the
    /// same variants as the typed builders.
    pub fn from_json_str(s: &str) -> ConvResult<Self> {
        let raw: RawWindowConfig = serde_json::from_str(s)?;
        let config = Self::try_from(raw)?;
        tracing::debug!(?config, "window config parsed");
        Ok(config)
    }

    /// Effective tail policy.
    pub fn tail_policy(&self) -> TailPolicy {
        self.tail
            .unwrap_or_else(|| TailPolicy::from_incomplete_pass(self.include_incomplete_pass))
    }

    /// 1-D spec; every value must be a scalar.
    pub fn window_spec<T>(&self, default_value: T) -> ConvResult<WindowSpec<T>> {
        Ok(WindowSpec {
            kernel_size: self.kernel_size.scalar()?,
            stride: self.stride.scalar()?,
            padding: self.padding.scalar()?,
            default_value,
            tail: self.tail_policy(),
        })
    }

    /// 2-D spec; scalars are broadcast to both axes.
    pub fn rect_spec<T>(&self, default_value: T) -> RectSpec<T> {
        RectSpec {
            kernel_size: self.kernel_size,
            stride: self.stride,
            padding: self.padding,
            default_value,
            tail: self.tail_policy(),
        }
    }
}

fn as_array<'a>(value: &'a Value, what: &str) -> ConvResult<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| {
        ConvError::not_iterable(format!("{what} must be a JSON array, got {}", kind(value)))
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Window a JSON array.
pub fn windowed_value(
    sequence: &Value,
    config: &WindowConfig,
    default_value: Value,
) -> ConvResult<Vec<Vec<Value>>> {
    let items = as_array(sequence, "sequence")?;
    let spec = config.window_spec(default_value)?;
    Ok(windowed(items.iter().cloned(), spec)?.collect())
}

/// Window a JSON array of arrays (row-major matrix).
pub fn windowed_2d_value(
    matrix: &Value,
    config: &WindowConfig,
    default_value: Value,
) -> ConvResult<Vec<RectWindow<Value>>> {
    let rows = as_array(matrix, "matrix")?
        .iter()
        .enumerate()
        .map(|(i, row)| as_array(row, &format!("matrix row {i}")).map(|r| r.to_vec()))
        .collect::<ConvResult<Vec<_>>>()?;
    Ok(windowed_2d(rows, config.rect_spec(default_value))?.collect())
}

#[cfg(test)]
#[path = "../../tests/unit/config/json.rs"]
mod tests;

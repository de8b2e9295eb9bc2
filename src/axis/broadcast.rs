use crate::foundation::error::{ConvError, ConvResult};

/// A configuration value given either once for every axis or once per axis.
///
/// In JSON a scalar is written as-is and a per-axis value as a two-element array `[row, col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(
    try_from = "AxisRepr<V>",
    into = "AxisRepr<V>",
    bound(
        serialize = "V: Clone + serde::Serialize",
        deserialize = "V: serde::Deserialize<'de>"
    )
)]
pub enum AxisValue<V> {
    /// Broadcast to every axis.
    Scalar(V),
    /// `(row, col)` values.
    PerAxis(V, V),
}

/// Per-axis values after broadcasting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisPair<V> {
    /// Value for the row (outer) axis.
    pub row: V,
    /// Value for the column (inner) axis.
    pub col: V,
}

impl<V: Clone> AxisValue<V> {
    /// Broadcast to `axis_count` values.
    ///
    /// A scalar is repeated; a per-axis pair is only valid when `axis_count == 2`.
    pub fn broadcast(&self, axis_count: usize) -> ConvResult<Vec<V>> {
        match self {
            Self::Scalar(v) => Ok(vec![v.clone(); axis_count]),
            Self::PerAxis(row, col) => {
                if axis_count != 2 {
                    return Err(ConvError::AxisCount {
                        expected: axis_count,
                        got: 2,
                    });
                }
                Ok(vec![row.clone(), col.clone()])
            }
        }
    }

    /// Broadcast to the `(row, col)` pair used by the 2-D composer.
    pub fn pair(&self) -> AxisPair<V> {
        match self {
            Self::Scalar(v) => AxisPair {
                row: v.clone(),
                col: v.clone(),
            },
            Self::PerAxis(row, col) => AxisPair {
                row: row.clone(),
                col: col.clone(),
            },
        }
    }

    /// The single value of a scalar, for 1-D passes.
    pub fn scalar(&self) -> ConvResult<V> {
        match self {
            Self::Scalar(v) => Ok(v.clone()),
            Self::PerAxis(..) => Err(ConvError::AxisCount {
                expected: 1,
                got: 2,
            }),
        }
    }
}

impl<V> AxisValue<V> {
    /// Apply a fallible conversion to every per-axis value.
    pub(crate) fn try_map<U, E>(
        self,
        mut f: impl FnMut(V) -> Result<U, E>,
    ) -> Result<AxisValue<U>, E> {
        Ok(match self {
            Self::Scalar(v) => AxisValue::Scalar(f(v)?),
            Self::PerAxis(row, col) => AxisValue::PerAxis(f(row)?, f(col)?),
        })
    }
}

impl<V: Default> Default for AxisValue<V> {
    fn default() -> Self {
        Self::Scalar(V::default())
    }
}

impl<V> From<V> for AxisValue<V> {
    fn from(v: V) -> Self {
        Self::Scalar(v)
    }
}

/// Normalize a scalar-or-per-axis value into exactly `nd` per-axis values.
pub fn dimensionize<V: Clone>(value: impl Into<AxisValue<V>>, nd: usize) -> ConvResult<Vec<V>> {
    value.into().broadcast(nd)
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum AxisRepr<V> {
    Scalar(V),
    List(Vec<V>),
}

impl<V> TryFrom<AxisRepr<V>> for AxisValue<V> {
    type Error = ConvError;

    fn try_from(repr: AxisRepr<V>) -> Result<Self, Self::Error> {
        match repr {
            AxisRepr::Scalar(v) => Ok(Self::Scalar(v)),
            AxisRepr::List(values) => {
                let got = values.len();
                let mut it = values.into_iter();
                match (it.next(), it.next(), it.next()) {
                    (Some(row), Some(col), None) => Ok(Self::PerAxis(row, col)),
                    _ => Err(ConvError::AxisCount { expected: 2, got }),
                }
            }
        }
    }
}

impl<V> From<AxisValue<V>> for AxisRepr<V> {
    fn from(value: AxisValue<V>) -> Self {
        match value {
            AxisValue::Scalar(v) => Self::Scalar(v),
            AxisValue::PerAxis(row, col) => Self::List(vec![row, col]),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/axis/broadcast.rs"]
mod tests;

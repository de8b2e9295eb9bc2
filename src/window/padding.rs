use std::{fmt, str::FromStr};

use crate::foundation::error::{ConvError, ConvResult};

/// Boundary padding applied to both ends of a sequence before windowing.
///
/// Serialized as a non-negative integer or as the tokens `"SAME"` / `"VALID"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "PaddingRepr", into = "PaddingRepr")]
pub enum Padding {
    /// Exactly this many fill values on each side.
    Explicit(usize),
    /// `kernel_size / 2` fill values on each side.
    Same,
    /// No padding; equivalent to `Explicit(0)`.
    Valid,
}

impl Default for Padding {
    fn default() -> Self {
        Self::Explicit(0)
    }
}

impl Padding {
    /// Explicit padding from a signed count; negative counts are rejected.
    pub fn explicit(padding: i64) -> ConvResult<Self> {
        if padding < 0 {
            return Err(ConvError::NegativePadding(padding));
        }
        usize::try_from(padding)
            .map(Self::Explicit)
            .map_err(|_| ConvError::invalid_padding(format!("padding {padding} is out of range")))
    }

    /// Number of fill values added on each side for the given kernel size.
    pub fn resolve(self, kernel_size: usize) -> usize {
        match self {
            Self::Explicit(n) => n,
            Self::Same => kernel_size / 2,
            Self::Valid => 0,
        }
    }
}

impl From<usize> for Padding {
    fn from(n: usize) -> Self {
        Self::Explicit(n)
    }
}

impl FromStr for Padding {
    type Err = ConvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("same") {
            return Ok(Self::Same);
        }
        if token.eq_ignore_ascii_case("valid") {
            return Ok(Self::Valid);
        }
        match token.parse::<i64>() {
            Ok(n) => Self::explicit(n),
            Err(_) => Err(ConvError::invalid_padding(format!(
                "padding must be an integer or one of `SAME` / `VALID`, got '{token}'"
            ))),
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(n) => write!(f, "{n}"),
            Self::Same => f.write_str("SAME"),
            Self::Valid => f.write_str("VALID"),
        }
    }
}

#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum PaddingRepr {
    Count(i64),
    Mode(String),
}

impl TryFrom<PaddingRepr> for Padding {
    type Error = ConvError;

    fn try_from(repr: PaddingRepr) -> Result<Self, Self::Error> {
        match repr {
            PaddingRepr::Count(n) => Self::explicit(n),
            PaddingRepr::Mode(s) => s.parse(),
        }
    }
}

impl From<Padding> for PaddingRepr {
    fn from(p: Padding) -> Self {
        match p {
            Padding::Explicit(n) => Self::Count(i64::try_from(n).unwrap_or(i64::MAX)),
            Padding::Same | Padding::Valid => Self::Mode(p.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/window/padding.rs"]
mod tests;

//! CSS size expressions
//!
//! Slide widths are configured the way a stylesheet would state them:
//! `300px`, `85%`, `80vw`, `20rem`, `auto`, or a `calc()` sum such as
//! `calc(100% - 2rem)`. This module parses those expressions and resolves
//! them to pixels against a container and viewport width.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::ROOT_FONT_SIZE;

/// Errors produced when parsing a size expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CssSizeError {
    #[error("empty size expression")]
    Empty,

    #[error("invalid number in size expression: {0:?}")]
    InvalidNumber(String),

    #[error("unsupported unit in size expression: {0:?}")]
    UnknownUnit(String),

    #[error("malformed calc() expression: {0:?}")]
    MalformedCalc(String),
}

/// Length units understood by [`CssSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Rem,
    /// Percent of the containing block width
    Percent,
    /// Percent of the viewport width
    Vw,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Percent => "%",
            Unit::Vw => "vw",
        }
    }
}

/// A signed length: value plus unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub value: f32,
    pub unit: Unit,
}

impl Term {
    pub const fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }

    fn resolve(&self, ctx: ResolveContext) -> f32 {
        match self.unit {
            Unit::Px => self.value,
            Unit::Rem => self.value * ROOT_FONT_SIZE,
            Unit::Percent => self.value / 100.0 * ctx.container_width,
            Unit::Vw => self.value / 100.0 * ctx.viewport_width,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Term {
    type Err = CssSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CssSizeError::Empty);
        }
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(s.len());
        let (number, suffix) = s.split_at(split);
        let value: f32 = number
            .parse()
            .map_err(|_| CssSizeError::InvalidNumber(s.to_string()))?;
        if !value.is_finite() {
            return Err(CssSizeError::InvalidNumber(s.to_string()));
        }
        let unit = match suffix {
            "px" => Unit::Px,
            "rem" => Unit::Rem,
            "%" => Unit::Percent,
            "vw" => Unit::Vw,
            // Unitless zero is the one bare number CSS accepts for lengths.
            "" if value == 0.0 => Unit::Px,
            other => return Err(CssSizeError::UnknownUnit(other.to_string())),
        };
        Ok(Term::new(value, unit))
    }
}

/// Widths used to resolve relative units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveContext {
    /// Width of the containing block (for `%`)
    pub container_width: f32,
    /// Width of the viewport (for `vw`)
    pub viewport_width: f32,
}

/// A CSS size expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CssSize {
    /// Size to content
    Auto,
    /// A single length such as `300px`
    Length(Term),
    /// `calc()` of summed terms, subtraction stored as negative values
    Calc(Vec<Term>),
}

impl CssSize {
    pub const fn px(value: f32) -> Self {
        CssSize::Length(Term::new(value, Unit::Px))
    }

    pub const fn percent(value: f32) -> Self {
        CssSize::Length(Term::new(value, Unit::Percent))
    }

    pub const fn vw(value: f32) -> Self {
        CssSize::Length(Term::new(value, Unit::Vw))
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, CssSize::Auto)
    }

    /// Resolve to pixels. `Auto` yields `None` so the caller can size to
    /// content; negative results clamp to zero.
    pub fn resolve(&self, ctx: ResolveContext) -> Option<f32> {
        let px = match self {
            CssSize::Auto => return None,
            CssSize::Length(term) => term.resolve(ctx),
            CssSize::Calc(terms) => terms.iter().map(|t| t.resolve(ctx)).sum(),
        };
        Some(px.max(0.0))
    }

    fn parse_calc(inner: &str) -> Result<Vec<Term>, CssSizeError> {
        let malformed = || CssSizeError::MalformedCalc(inner.to_string());
        let mut tokens = inner.split_whitespace();
        let mut terms = vec![tokens.next().ok_or_else(malformed)?.parse::<Term>()?];
        while let Some(op) = tokens.next() {
            let sign = match op {
                "+" => 1.0,
                "-" => -1.0,
                _ => return Err(malformed()),
            };
            let term: Term = tokens.next().ok_or_else(malformed)?.parse()?;
            terms.push(Term::new(sign * term.value, term.unit));
        }
        Ok(terms)
    }
}

impl Default for CssSize {
    fn default() -> Self {
        CssSize::Auto
    }
}

impl FromStr for CssSize {
    type Err = CssSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CssSizeError::Empty);
        }
        if s.eq_ignore_ascii_case("auto") {
            return Ok(CssSize::Auto);
        }
        if let Some(inner) = s.strip_prefix("calc(").and_then(|rest| rest.strip_suffix(')')) {
            return Self::parse_calc(inner).map(CssSize::Calc);
        }
        s.parse().map(CssSize::Length)
    }
}

impl fmt::Display for CssSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssSize::Auto => write!(f, "auto"),
            CssSize::Length(term) => write!(f, "{term}"),
            CssSize::Calc(terms) => {
                write!(f, "calc(")?;
                for (i, term) in terms.iter().enumerate() {
                    if i == 0 {
                        write!(f, "{term}")?;
                    } else if term.value < 0.0 {
                        write!(f, " - {}", Term::new(-term.value, term.unit))?;
                    } else {
                        write!(f, " + {term}")?;
                    }
                }
                write!(f, ")")
            }
        }
    }
}

impl TryFrom<String> for CssSize {
    type Error = CssSizeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CssSize> for String {
    fn from(size: CssSize) -> String {
        size.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: ResolveContext = ResolveContext {
        container_width: 400.0,
        viewport_width: 500.0,
    };

    #[test]
    fn parses_simple_lengths() {
        assert_eq!("300px".parse::<CssSize>(), Ok(CssSize::px(300.0)));
        assert_eq!("85%".parse::<CssSize>(), Ok(CssSize::percent(85.0)));
        assert_eq!(" 80vw ".parse::<CssSize>(), Ok(CssSize::vw(80.0)));
        assert_eq!("auto".parse::<CssSize>(), Ok(CssSize::Auto));
        assert_eq!("0".parse::<CssSize>(), Ok(CssSize::px(0.0)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<CssSize>(), Err(CssSizeError::Empty));
        assert!(matches!("12em".parse::<CssSize>(), Err(CssSizeError::UnknownUnit(_))));
        assert!(matches!("px".parse::<CssSize>(), Err(CssSizeError::InvalidNumber(_))));
        assert!(matches!(
            "calc(100% * 2)".parse::<CssSize>(),
            Err(CssSizeError::MalformedCalc(_))
        ));
        assert!(matches!("calc(100% -)".parse::<CssSize>(), Err(CssSizeError::MalformedCalc(_))));
    }

    #[test]
    fn resolves_against_context() {
        assert_eq!(CssSize::px(300.0).resolve(CTX), Some(300.0));
        assert_eq!(CssSize::percent(50.0).resolve(CTX), Some(200.0));
        assert_eq!(CssSize::vw(80.0).resolve(CTX), Some(400.0));
        assert_eq!("2rem".parse::<CssSize>().map(|s| s.resolve(CTX)), Ok(Some(32.0)));
        assert_eq!(CssSize::Auto.resolve(CTX), None);
    }

    #[test]
    fn calc_sums_terms_and_clamps() {
        let size: CssSize = "calc(100% - 2rem)".parse().unwrap();
        assert_eq!(size.resolve(CTX), Some(368.0));
        assert_eq!(size.to_string(), "calc(100% - 2rem)");

        let negative: CssSize = "calc(10px - 50px)".parse().unwrap();
        assert_eq!(negative.resolve(CTX), Some(0.0));
    }

    #[test]
    fn serde_uses_string_form() {
        let size: CssSize = serde_json::from_str("\"calc(80vw + 8px)\"").unwrap();
        assert_eq!(size.resolve(CTX), Some(408.0));
        assert_eq!(serde_json::to_string(&size).unwrap(), "\"calc(80vw + 8px)\"");
        assert!(serde_json::from_str::<CssSize>("\"wide\"").is_err());
    }
}

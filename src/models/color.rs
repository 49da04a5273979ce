use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::OnceLock;

/// An RGBA color as understood by the chart engine (`rgba(r, g, b, a)`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

fn rgba_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\s*rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)\s*$",
        )
        .expect("static rgba pattern")
    })
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Each RGB channel reduced by `amount`, floored at 0. Alpha is kept.
    pub fn darker(&self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
            a: self.a,
        }
    }

    /// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let caps = rgba_re()
            .captures(s)
            .ok_or_else(|| AppError::InvalidColor(s.to_string()))?;

        let channel = |i: usize| -> AppResult<u8> {
            caps[i]
                .parse::<u8>()
                .map_err(|_| AppError::InvalidColor(s.to_string()))
        };

        let a = match caps.get(4) {
            Some(m) => m
                .as_str()
                .parse::<f32>()
                .map_err(|_| AppError::InvalidColor(s.to_string()))?,
            None => 1.0,
        };
        if !(0.0..=1.0).contains(&a) {
            return Err(AppError::InvalidColor(s.to_string()));
        }

        Ok(Self::new(channel(1)?, channel(2)?, channel(3)?, a))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Rgba::parse(&raw).map_err(serde::de::Error::custom)
    }
}

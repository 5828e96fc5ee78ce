//! Anchor pairs describing when scroll tracking starts and ends
//!
//! An offset such as `"start end"` reads "the element's start edge meets the
//! viewport's end edge". Edges are `start`, `center`, `end`, a fraction in
//! `[0, 1]`, or a percentage such as `25%`. A single token applies to both.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Position along an element or the viewport, as a fraction of its height
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
    Fraction(f64),
}

impl Edge {
    pub fn fraction(&self) -> f64 {
        match *self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
            Edge::Fraction(f) => f,
        }
    }
}

impl FromStr for Edge {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token {
            "start" => return Ok(Edge::Start),
            "center" => return Ok(Edge::Center),
            "end" => return Ok(Edge::End),
            _ => {}
        }

        let fraction = if let Some(percent) = token.strip_suffix('%') {
            percent.parse::<f64>().map(|p| p / 100.0)
        } else {
            token.parse::<f64>()
        }
        .map_err(|_| Error::InvalidOffset(format!("unknown edge '{}'", token)))?;

        if !(0.0..=1.0).contains(&fraction) {
            return Err(Error::InvalidOffset(format!(
                "edge '{}' is outside the element",
                token
            )));
        }
        Ok(Edge::Fraction(fraction))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Start => write!(f, "start"),
            Edge::Center => write!(f, "center"),
            Edge::End => write!(f, "end"),
            Edge::Fraction(v) => write!(f, "{}", v),
        }
    }
}

/// "Element edge meets viewport edge"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScrollOffset {
    pub target: Edge,
    pub container: Edge,
}

impl ScrollOffset {
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }
}

impl FromStr for ScrollOffset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [both] => {
                let edge: Edge = both.parse()?;
                Ok(Self::new(edge, edge))
            }
            [target, container] => Ok(Self::new(target.parse()?, container.parse()?)),
            _ => Err(Error::InvalidOffset(format!(
                "expected '<element edge> <viewport edge>', got '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for ScrollOffset {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScrollOffset> for String {
    fn from(offset: ScrollOffset) -> Self {
        offset.to_string()
    }
}

impl fmt::Display for ScrollOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.container)
    }
}

/// Where progress is 0 (`start`) and where it reaches 1 (`end`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollWindow {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl Default for ScrollWindow {
    /// From "element top at viewport top" until "element bottom at viewport top"
    fn default() -> Self {
        Self {
            start: ScrollOffset::new(Edge::Start, Edge::Start),
            end: ScrollOffset::new(Edge::End, Edge::Start),
        }
    }
}

impl ScrollWindow {
    pub const fn new(start: ScrollOffset, end: ScrollOffset) -> Self {
        Self { start, end }
    }

    /// Parse both anchors, e.g. `ScrollWindow::parse("start end", "end start")`
    pub fn parse(start: &str, end: &str) -> crate::Result<Self> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_edges() {
        let offset: ScrollOffset = "start end".parse().unwrap();
        assert_eq!(offset, ScrollOffset::new(Edge::Start, Edge::End));

        let single: ScrollOffset = "center".parse().unwrap();
        assert_eq!(single, ScrollOffset::new(Edge::Center, Edge::Center));
    }

    #[test]
    fn test_parse_fractions() {
        let offset: ScrollOffset = "0.25 75%".parse().unwrap();
        assert_eq!(offset.target.fraction(), 0.25);
        assert_eq!(offset.container.fraction(), 0.75);
    }

    #[test]
    fn test_parse_errors() {
        assert!("top bottom".parse::<ScrollOffset>().is_err());
        assert!("start end center".parse::<ScrollOffset>().is_err());
        assert!("1.5 start".parse::<ScrollOffset>().is_err());
        assert!("".parse::<ScrollOffset>().is_err());
    }

    #[test]
    fn test_default_window() {
        assert_eq!(
            ScrollWindow::default(),
            ScrollWindow::parse("start start", "end start").unwrap()
        );
    }
}

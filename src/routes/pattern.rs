//! Path patterns and captured parameters.
//!
//! Patterns are `/`-separated segment lists made of literal text, `:name`
//! parameters, and at most one trailing `:name?` optional parameter.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::percent_decode_str;

use super::RouteError;

/// Split a path into its non-empty segments.
pub(crate) fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Decode a captured segment; invalid UTF-8 is replaced, not rejected.
fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Canonical form of a navigation path: query and fragment dropped, empty
/// segments collapsed, a single leading `/`, no trailing `/`.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let segments: Vec<&str> = split_segments(&path[..end]).collect();
    format!("/{}", segments.join("/"))
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    OptionalParam(String),
}

impl Segment {
    fn param_name(&self) -> Option<&str> {
        match self {
            Self::Static(_) => None,
            Self::Param(name) | Self::OptionalParam(name) => Some(name),
        }
    }
}

/// Parameters captured while matching a path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parsed route pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern such as `/authenticated/chat/:chatRoomId?`.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::InvalidPattern` for an empty or repeated parameter
    /// name, or an optional parameter that is not the last segment.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern { pattern: raw.to_owned(), reason: reason.to_owned() };

        let mut segments: Vec<Segment> = Vec::new();
        for part in split_segments(raw) {
            let Some(param) = part.strip_prefix(':') else {
                segments.push(Segment::Static(part.to_owned()));
                continue;
            };
            let (name, optional) = match param.strip_suffix('?') {
                Some(name) => (name, true),
                None => (param, false),
            };
            if name.is_empty() {
                return Err(invalid("empty parameter name"));
            }
            if segments.iter().any(|s| s.param_name() == Some(name)) {
                return Err(invalid("duplicate parameter name"));
            }
            segments.push(if optional {
                Segment::OptionalParam(name.to_owned())
            } else {
                Segment::Param(name.to_owned())
            });
        }

        if let Some(pos) = segments.iter().position(|s| matches!(s, Segment::OptionalParam(_))) {
            if pos + 1 != segments.len() {
                return Err(invalid("optional parameter must be the last segment"));
            }
        }

        Ok(Self { segments })
    }

    /// Match already-split path segments, returning captured parameters.
    /// Literal segments compare against the raw text; parameter values are
    /// percent-decoded.
    pub fn matches(&self, path: &[&str]) -> Option<Params> {
        let mut params = Params::default();
        let mut parts = path.iter().copied();
        for segment in &self.segments {
            match segment {
                Segment::Static(text) => {
                    if parts.next()? != text.as_str() {
                        return None;
                    }
                }
                Segment::Param(name) => params.insert(name.as_str(), decode_segment(parts.next()?)),
                Segment::OptionalParam(name) => {
                    if let Some(value) = parts.next() {
                        params.insert(name.as_str(), decode_segment(value));
                    }
                }
            }
        }
        parts.next().is_none().then_some(params)
    }

    /// Fill the pattern from `params`. Missing optional parameters are
    /// dropped; a missing required one is returned as the error.
    ///
    /// # Errors
    ///
    /// Returns the name of the first required parameter absent from `params`.
    pub fn build(&self, params: &Params) -> Result<String, String> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Static(text) => parts.push(text.as_str()),
                Segment::Param(name) => parts.push(params.get(name).ok_or_else(|| name.clone())?),
                Segment::OptionalParam(name) => {
                    if let Some(value) = params.get(name) {
                        parts.push(value);
                    }
                }
            }
        }
        Ok(format!("/{}", parts.join("/")))
    }

    /// Names of every parameter, required or optional, in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::param_name)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Static(text) => write!(f, "/{text}")?,
                Segment::Param(name) => write!(f, "/:{name}")?,
                Segment::OptionalParam(name) => write!(f, "/:{name}?")?,
            }
        }
        Ok(())
    }
}

//! Length-to-depth policies bounding the subtoken window
//!
//! Generating subtokens costs O(length × depth), so long tokens are given a
//! shallow window. The interpolated policy keeps its historical parameter
//! naming: `max_length` pairs with `max_depth` and `min_length` with
//! `min_depth`. In the usual configuration `max_length < min_length` and
//! `max_depth > min_depth`, meaning short tokens get the deep window.

use crate::error::{Error, Result};

/// Clamped linear mapping from token length to depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpolatedDepth {
    max_length: usize,
    max_depth: usize,
    min_length: usize,
    min_depth: usize,
}

impl InterpolatedDepth {
    /// Create an interpolated policy
    ///
    /// Both depths must be at least one.
    pub fn new(
        max_length: usize,
        max_depth: usize,
        min_length: usize,
        min_depth: usize,
    ) -> Result<Self> {
        if max_depth == 0 || min_depth == 0 {
            return Err(Error::Configuration(
                "depth policy depths must be greater than 0".into(),
            ));
        }

        Ok(Self {
            max_length,
            max_depth,
            min_length,
            min_depth,
        })
    }

    /// Depth for a token of `length` characters
    pub fn depth(&self, length: usize) -> usize {
        if length <= self.max_length {
            return self.max_depth;
        }
        if length >= self.min_length {
            return self.min_depth;
        }

        // Strictly between the two lengths, so the span is non-zero
        let min_depth = self.min_depth as f64;
        let depth_span = self.max_depth as f64 - min_depth;
        let remaining = (self.min_length - length) as f64;
        let length_span = (self.min_length - self.max_length) as f64;
        (min_depth + depth_span * remaining / length_span) as usize
    }

    /// Parameters as `(max_length, max_depth, min_length, min_depth)`
    pub fn parameters(&self) -> (usize, usize, usize, usize) {
        (
            self.max_length,
            self.max_depth,
            self.min_length,
            self.min_depth,
        )
    }
}

/// Policy mapping a token's character length to its window depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthPolicy {
    /// Clamped linear interpolation between two (length, depth) points
    Interpolated(InterpolatedDepth),
    /// Depth equals length; the window spans the whole token
    Unbounded,
    /// Same depth for every token
    Fixed(usize),
}

impl DepthPolicy {
    /// Create an interpolated policy
    pub fn interpolated(
        max_length: usize,
        max_depth: usize,
        min_length: usize,
        min_depth: usize,
    ) -> Result<Self> {
        InterpolatedDepth::new(max_length, max_depth, min_length, min_depth)
            .map(DepthPolicy::Interpolated)
    }

    /// Create a fixed-depth policy
    pub fn fixed(depth: usize) -> Result<Self> {
        if depth == 0 {
            return Err(Error::Configuration(
                "fixed depth must be greater than 0".into(),
            ));
        }
        Ok(DepthPolicy::Fixed(depth))
    }

    /// Depth for a token of `length` characters
    pub fn depth(&self, length: usize) -> usize {
        match self {
            DepthPolicy::Interpolated(policy) => policy.depth(length),
            DepthPolicy::Unbounded => length,
            DepthPolicy::Fixed(depth) => *depth,
        }
    }
}

impl Default for DepthPolicy {
    fn default() -> Self {
        DepthPolicy::Interpolated(InterpolatedDepth {
            max_length: 10,
            max_depth: 10,
            min_length: 18,
            min_depth: 2,
        })
    }
}

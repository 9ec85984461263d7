//! PDF Type 4 (PostScript calculator) functions.
//!
//! A Type 4 function maps `m` inputs to `n` outputs. Inputs are clipped to
//! the function's Domain, pushed onto the engine stack in order, the program
//! runs, and the top `n` stack entries are clipped to the Range.

use crate::error::{PsError, Result};
use crate::interp::engine::PSEngine;

/// A closed interval `[min, max]` from a Domain or Range array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn clamp(&self, value: f32) -> f32 {
        // NaN compares false both ways and ends up at min.
        if value > self.max {
            self.max
        } else if value >= self.min {
            value
        } else {
            self.min
        }
    }
}

/// Splits a flat `[min0 max0 min1 max1 ...]` array into intervals.
fn intervals(name: &str, values: &[f32]) -> Result<Vec<Interval>> {
    if values.is_empty() || values.len() % 2 != 0 {
        return Err(PsError::InvalidFunction(format!(
            "{name} must hold a non-empty list of min/max pairs, got {} values",
            values.len()
        )));
    }
    values
        .chunks_exact(2)
        .map(|pair| {
            let (min, max) = (pair[0], pair[1]);
            if min <= max {
                Ok(Interval { min, max })
            } else {
                Err(PsError::InvalidFunction(format!(
                    "{name} interval [{min} {max}] is inverted"
                )))
            }
        })
        .collect()
}

/// A parsed Type 4 function ready for evaluation.
#[derive(Debug, Clone)]
pub struct PSFunction {
    domain: Vec<Interval>,
    range: Vec<Interval>,
    engine: PSEngine,
}

impl PSFunction {
    /// Builds a function from its Domain and Range arrays and program text.
    pub fn new(domain: &[f32], range: &[f32], program: &[u8]) -> Result<Self> {
        let domain = intervals("Domain", domain)?;
        let range = intervals("Range", range)?;
        let mut engine = PSEngine::new();
        engine.parse(program)?;
        Ok(Self {
            domain,
            range,
            engine,
        })
    }

    /// Number of inputs (`m`).
    pub fn inputs(&self) -> usize {
        self.domain.len()
    }

    /// Number of outputs (`n`).
    pub fn outputs(&self) -> usize {
        self.range.len()
    }

    pub fn domain(&self) -> &[Interval] {
        &self.domain
    }

    pub fn range(&self) -> &[Interval] {
        &self.range
    }

    pub fn engine(&self) -> &PSEngine {
        &self.engine
    }

    /// Evaluates the function. Each call starts from an empty stack.
    pub fn call(&mut self, inputs: &[f32]) -> Result<Vec<f32>> {
        if inputs.len() != self.domain.len() {
            return Err(PsError::InputCount {
                expected: self.domain.len(),
                got: inputs.len(),
            });
        }

        self.engine.reset();
        for (input, interval) in inputs.iter().zip(&self.domain) {
            self.engine.push(interval.clamp(*input));
        }
        self.engine.execute()?;

        let n = self.range.len();
        let available = self.engine.stack_size();
        if available < n {
            return Err(PsError::StackUnderflow {
                expected: n,
                got: available,
            });
        }

        let mut outputs = vec![0.0; n];
        for i in (0..n).rev() {
            outputs[i] = self.range[i].clamp(self.engine.pop());
        }
        tracing::trace!(?inputs, ?outputs, "evaluated type 4 function");
        Ok(outputs)
    }
}

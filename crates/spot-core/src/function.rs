// File: crates/spot-core/src/function.rs
// Summary: Sample functions for generating demo series.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseNameError;
use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Ln,
    Sqr,
    Sqrt,
    X,
}

impl Function {
    pub const ALL: [Function; 6] = [Function::Sin, Function::Cos, Function::Ln, Function::Sqr, Function::Sqrt, Function::X];

    pub fn eval(self, x: f64) -> f64 {
        match self {
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Ln => x.ln(),
            Function::Sqr => x * x,
            Function::Sqrt => x.sqrt(),
            Function::X => x,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Ln => "ln",
            Function::Sqr => "sqr",
            Function::Sqrt => "sqrt",
            Function::X => "x",
        }
    }

    /// `n + 1` evenly spaced samples over `[a, b]`. Samples with a non-finite
    /// value (e.g. `ln` of a non-positive x) are skipped.
    pub fn sample(self, a: f64, b: f64, n: usize) -> Vec<Point> {
        if n == 0 {
            let y = self.eval(a);
            return if y.is_finite() { vec![Point::new(a, y)] } else { Vec::new() };
        }
        let h = (b - a) / n as f64;
        (0..=n)
            .map(|i| a + h * i as f64)
            .filter_map(|x| {
                let y = self.eval(x);
                y.is_finite().then_some(Point::new(x, y))
            })
            .collect()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Function {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Function::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| ParseNameError { kind: "function", input: s.to_string() })
    }
}

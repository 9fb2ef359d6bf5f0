//! Interactive input gathering: mode selection, Julia parameter, region
//! bounds and iteration bound.
//!
//! Every prompt returns `Ok(None)` once the input is exhausted so the caller
//! can end the session cleanly.

use std::io::{BufRead, Write};
use std::str::FromStr;

use num::Complex;

use crate::error::{FractalError, Result};
use crate::grid::Region;

/// Which fractal family to explore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Julia,
    Mandelbrot,
}

impl FromStr for Selection {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "julia" => Ok(Selection::Julia),
            "2" | "mandelbrot" => Ok(Selection::Mandelbrot),
            other => Err(FractalError::InvalidSelection(other.to_string())),
        }
    }
}

/// Parse a complex literal such as `-0.8+0.156j`, `0.3-0.5i`, `2j` or `(1+1j)`.
pub fn parse_complex(s: &str) -> Result<Complex<f64>> {
    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);
    let compact: String = inner.chars().filter(|ch| !ch.is_whitespace()).collect();
    Complex::<f64>::from_str(&compact)
        .map_err(|e| FractalError::InvalidParameter(format!("'{}': {}", s.trim(), e)))
}

fn parse_float(label: &str, s: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| FractalError::InvalidInput(format!("{}: '{}' is not a number", label, s.trim())))
}

/// Parse a positive iteration bound.
pub fn parse_iterations(s: &str) -> Result<u32> {
    match s.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(FractalError::InvalidIterations(format!(
            "'{}' is not a positive integer",
            s.trim()
        ))),
        Ok(n) => Ok(n),
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one line of answer.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn selection(&mut self) -> Result<Option<Selection>> {
        self.ask("1: Julia, 2: Mandelbrot: ")?
            .map(|answer| answer.parse())
            .transpose()
    }

    pub fn parameter(&mut self) -> Result<Option<Complex<f64>>> {
        self.ask("c? ")?.map(|answer| parse_complex(&answer)).transpose()
    }

    /// Ask for `Top?`, `Left?`, `Right?` and `Iterations?`. The region is
    /// validated before the iteration bound is asked for.
    pub fn region_and_iterations(&mut self) -> Result<Option<(Region, u32)>> {
        let mut bounds = [0.0; 3];
        for (slot, label) in bounds.iter_mut().zip(["Top", "Left", "Right"]) {
            match self.ask(&format!("{}? ", label))? {
                Some(answer) => *slot = parse_float(label, &answer)?,
                None => return Ok(None),
            }
        }
        let region = Region::new(bounds[0], bounds[1], bounds[2])?;
        match self.ask("Iterations? ")? {
            Some(answer) => Ok(Some((region, parse_iterations(&answer)?))),
            None => Ok(None),
        }
    }

    /// Wait for the user to press enter; `false` once input is exhausted.
    pub fn pause(&mut self, question: &str) -> Result<bool> {
        Ok(self.ask(question)?.is_some())
    }
}

//! Whitespace-separated input file parser.
//!
//! Format: one integer dimension n, then n groups of n coefficients
//! followed by the row's right-hand-side value. No header, no
//! comments, no delimiters beyond whitespace.

use std::path::Path;

use anyhow::{Context, Result};

use meg_core::LinearSystem;

/// Read and parse a system description from a file.
pub fn parse_system_file(path: &Path) -> Result<LinearSystem> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    parse_system(&contents)
}

/// Parse a system description from text.
pub fn parse_system(text: &str) -> Result<LinearSystem> {
    let mut tokens = text.split_whitespace();

    let dim_token = tokens.next().context("Empty input: missing dimension")?;
    let n: usize = dim_token
        .parse()
        .with_context(|| format!("Invalid dimension '{}'", dim_token))?;

    let values = tokens
        .map(|tok| {
            tok.parse::<f64>()
                .with_context(|| format!("Invalid numeric value '{}'", tok))
        })
        .collect::<Result<Vec<f64>>>()?;

    LinearSystem::from_tokens(n, &values).context("Invalid system description")
}

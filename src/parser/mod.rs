//! Flat-text instance format
//!
//! ```text
//! n m c k
//! e e e ...      <- m subset lines, at most c elements each
//! ```
//!
//! The header holds universe size, subset count, maximum subset size and
//! budget. Elements are 1-indexed. A `0` token is fixed-width row padding and
//! is dropped while loading, so padded rows never reach the solver.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::instance::{Element, Instance, InstanceError, Subset};

/// Malformed input, with the 1-based line it was found on
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing header line 'n m c k'")]
    MissingHeader,

    #[error("line {line}: header must have 4 fields 'n m c k', found {found}")]
    HeaderFieldCount { line: usize, found: usize },

    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: {field} must be non-negative, got {value}")]
    NegativeValue {
        line: usize,
        field: &'static str,
        value: i64,
    },

    #[error("line {line}: subset has {count} elements, more than the maximum {max}")]
    TooManyElements { line: usize, count: usize, max: u32 },

    #[error("line {line}: element {element} outside universe [1, {universe_size}]")]
    ElementOutOfRange {
        line: usize,
        element: i64,
        universe_size: u32,
    },

    #[error("line {line}: subset has no elements")]
    EmptySubset { line: usize },

    #[error("expected {expected} subsets, found {found}")]
    MissingSubsets { expected: u32, found: u32 },

    #[error("line {line}: unexpected content after the last subset")]
    TrailingContent { line: usize },

    #[error("invalid instance: {0}")]
    Instance(#[from] InstanceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The four header fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub universe_size: u32,
    pub subset_count: u32,
    pub max_subset_size: u32,
    pub budget: u32,
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n:{} m:{} c:{} k:{}",
            self.universe_size, self.subset_count, self.max_subset_size, self.budget
        )
    }
}

/// Parse a non-negative header field
fn parse_field(token: &str, field: &'static str, line: usize) -> Result<u32, ParseError> {
    let value = token.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    })?;
    if value < 0 {
        return Err(ParseError::NegativeValue { line, field, value });
    }
    u32::try_from(value).map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

/// Parse the `n m c k` header line
pub fn parse_header(content: &str, line: usize) -> Result<Header, ParseError> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(ParseError::HeaderFieldCount {
            line,
            found: tokens.len(),
        });
    }

    Ok(Header {
        universe_size: parse_field(tokens[0], "n", line)?,
        subset_count: parse_field(tokens[1], "m", line)?,
        max_subset_size: parse_field(tokens[2], "c", line)?,
        budget: parse_field(tokens[3], "k", line)?,
    })
}

/// Parse one subset line, dropping `0` padding
pub fn parse_subset(content: &str, header: &Header, line: usize) -> Result<Subset, ParseError> {
    let mut elements: Vec<Element> = Vec::new();

    for token in content.split_whitespace() {
        let value = token.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
            line,
            token: token.to_string(),
        })?;
        if value == 0 {
            continue;
        }
        if value < 0 || value > i64::from(header.universe_size) {
            return Err(ParseError::ElementOutOfRange {
                line,
                element: value,
                universe_size: header.universe_size,
            });
        }
        elements.push(value as Element);
    }

    if elements.is_empty() {
        return Err(ParseError::EmptySubset { line });
    }
    if elements.len() > header.max_subset_size as usize {
        return Err(ParseError::TooManyElements {
            line,
            count: elements.len(),
            max: header.max_subset_size,
        });
    }

    Ok(Subset::new(elements))
}

/// Parse an instance and keep its header
pub fn parse_instance_with_header(text: &str) -> Result<(Header, Instance), ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, content)| (i + 1, content.trim()));

    let (header_line, header_content) = lines
        .by_ref()
        .find(|(_, content)| !content.is_empty())
        .ok_or(ParseError::MissingHeader)?;
    let header = parse_header(header_content, header_line)?;

    // A subset needs a line, so the header count cannot reserve past the text
    let remaining_lines = text.lines().count().saturating_sub(header_line);
    let mut subsets = Vec::with_capacity(remaining_lines.min(header.subset_count as usize));
    for _ in 0..header.subset_count {
        let Some((line, content)) = lines.next() else {
            return Err(ParseError::MissingSubsets {
                expected: header.subset_count,
                found: subsets.len() as u32,
            });
        };
        subsets.push(parse_subset(content, &header, line)?);
    }

    if let Some((line, _)) = lines.find(|(_, content)| !content.is_empty()) {
        return Err(ParseError::TrailingContent { line });
    }

    let instance = Instance::new(header.universe_size, subsets, header.budget)?;
    Ok((header, instance))
}

/// Parse an instance from text
pub fn parse_instance(text: &str) -> Result<Instance, ParseError> {
    parse_instance_with_header(text).map(|(_, instance)| instance)
}

/// Load an instance file, keeping its header
pub fn load_instance_with_header(path: &Path) -> Result<(Header, Instance), ParseError> {
    let text = fs::read_to_string(path)?;
    parse_instance_with_header(&text)
}

/// Load an instance file
pub fn load_instance(path: &Path) -> Result<Instance, ParseError> {
    load_instance_with_header(path).map(|(_, instance)| instance)
}

/// Render an instance in the flat-text format. `c` is the longest subset.
pub fn format_instance(instance: &Instance) -> String {
    let header = format!(
        "{} {} {} {}",
        instance.universe_size(),
        instance.subset_count(),
        instance.max_subset_size(),
        instance.budget()
    );
    let rows = instance.subsets().iter().map(|subset| {
        let row: Vec<String> = subset.elements().iter().map(|e| e.to_string()).collect();
        row.join(" ")
    });

    let mut lines: Vec<String> = std::iter::once(header).chain(rows).collect();
    lines.push(String::new());
    lines.join("\n")
}

/// Write an instance file
pub fn write_instance(path: &Path, instance: &Instance) -> Result<(), ParseError> {
    fs::write(path, format_instance(instance))?;
    Ok(())
}

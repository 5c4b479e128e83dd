//! Line-oriented input reader.
//!
//! Layout, one record per line:
//!
//! ```text
//! <budget>
//! <component count P>
//! <id> <category> <score> <cost> <spec1> <spec2>     (P lines)
//! <kit count K>
//! <kit_id> <cpu> <motherboard> <gpu> <ram> <psu>     (K lines)
//! ```
//!
//! Reading is positional. Blank lines inside a section use up one slot of
//! the declared count without producing a record, and reading past the end
//! of input behaves like reading blank lines. Integers saturate at the
//! `i64` bounds, and invalid UTF-8 is replaced rather than rejected.

use std::borrow::Cow;
use std::io::BufRead;

use thiserror::Error;
use tracing::debug;

use crate::component::parser::parse_integer;
use crate::component::ComponentRecord;
use crate::selection::KitRecord;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything read from the input source, before any evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInput {
    /// `None` when the first line is not an integer.
    pub budget: Option<i64>,
    pub components: Vec<ComponentRecord>,
    pub kits: Vec<KitRecord>,
}

impl BuildInput {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, InputError> {
        let mut lines = Lines::new(reader);

        let Some(budget) = parse_integer(&lines.next_line()?) else {
            // Nothing after an unusable budget is read.
            return Ok(BuildInput::default());
        };

        let component_count = count_or_zero(&lines.next_line()?, "component");
        let mut components = Vec::new();
        for _ in 0..component_count {
            if lines.exhausted() {
                break;
            }
            let line = lines.next_line()?;
            if line.is_empty() {
                continue;
            }
            components.push(ComponentRecord::from_line(&line));
        }

        let kit_count = count_or_zero(&lines.next_line()?, "kit");
        let mut kits = Vec::new();
        for _ in 0..kit_count {
            if lines.exhausted() {
                break;
            }
            let line = lines.next_line()?;
            if line.is_empty() {
                continue;
            }
            kits.push(KitRecord::from_line(&line));
        }

        debug!(
            budget,
            components = components.len(),
            kits = kits.len(),
            "input read"
        );

        Ok(BuildInput {
            budget: Some(budget),
            components,
            kits,
        })
    }

    pub fn parse(text: &str) -> Self {
        // Reading from an in-memory slice cannot fail.
        Self::from_reader(text.as_bytes()).unwrap_or_default()
    }
}

/// Trimmed line source that yields "" once the reader is exhausted.
///
/// Lines are read as bytes and decoded lossily, so invalid UTF-8 damages
/// only the record it appears in.
struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
    exhausted: bool,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            exhausted: false,
        }
    }

    fn next_line(&mut self) -> Result<String, InputError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            self.exhausted = true;
            return Ok(String::new());
        }

        let line = String::from_utf8_lossy(&self.buf);
        if let Cow::Owned(_) = line {
            debug!("input line is not valid UTF-8, decoded lossily");
        }
        Ok(line.trim().to_string())
    }

    fn exhausted(&self) -> bool {
        self.exhausted
    }
}

// Unparseable or negative counts mean "no records".
fn count_or_zero(line: &str, section: &str) -> u64 {
    match parse_integer(line) {
        Some(count) if count > 0 => count as u64,
        Some(_) => 0,
        None => {
            debug!(section, line, "unparseable record count, treated as 0");
            0
        }
    }
}

// src/morse/timing.rs  —  Unit length → run lengths in bits
use crate::morse::error::{CodecError, Result};

/// All run lengths derived from a single unit (bits per dot)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub unit:       usize,
    pub dot:        usize,  // 1 unit  On
    pub dash:       usize,  // 3 units On
    pub elem_gap:   usize,  // 1 unit  Off (between dits/dahs in same symbol)
    pub char_gap:   usize,  // 3 units Off (between symbols)
    pub word_gap:   usize,  // 7 units Off (between words)
}

impl Timing {
    pub fn from_unit(unit: usize) -> Self {
        let unit = unit.max(1);
        Self {
            unit,
            dot:      unit,
            dash:     unit * 3,
            elem_gap: unit,
            char_gap: unit * 3,
            word_gap: unit * 7,
        }
    }

    pub fn dot_bits(&self)      -> String { "1".repeat(self.dot) }
    pub fn dash_bits(&self)     -> String { "1".repeat(self.dash) }
    pub fn elem_gap_bits(&self) -> String { "0".repeat(self.elem_gap) }
    pub fn char_gap_bits(&self) -> String { "0".repeat(self.char_gap) }
    pub fn word_gap_bits(&self) -> String { "0".repeat(self.word_gap) }
}

impl Default for Timing {
    fn default() -> Self { Self::from_unit(1) }
}

/// Shortest maximal run of identical '1's or '0's.
///
/// Assumes the shortest run in the transmission is exactly one unit. Input
/// without any single-unit pulse or gap (e.g. a lone dash) yields a unit
/// that is too large.
pub fn find_unit_length(bits: &str) -> Result<usize> {
    let mut min: Option<usize> = None;
    let mut run_char: Option<char> = None;
    let mut run_len = 0usize;

    for c in bits.chars() {
        if c != '0' && c != '1' {
            // Not part of any run; closes the current one
            flush_run(&mut min, &mut run_len);
            run_char = None;
            continue;
        }
        if run_char == Some(c) {
            run_len += 1;
        } else {
            flush_run(&mut min, &mut run_len);
            run_char = Some(c);
            run_len = 1;
        }
    }
    flush_run(&mut min, &mut run_len);

    let unit = min.ok_or(CodecError::EmptyInput)?;
    log::debug!("[timing] unit length {} from {} bits", unit, bits.len());
    Ok(unit)
}

fn flush_run(min: &mut Option<usize>, run_len: &mut usize) {
    if *run_len > 0 {
        *min = Some(min.map_or(*run_len, |m| m.min(*run_len)));
    }
    *run_len = 0;
}

/*!
Readers for the inputs of the pipeline.

- [Clause sources and WCNF](dimacs), in DIMACS style.
- [Assumptions](assumptions), in either [mode](crate::config::AssumptionMode).
- [Axiom definitions](definitions), from GCI and RI sources.
- [Modules](module), as reported by a solver.
- [Index maps](index_map), as written by the extractor.

Each reader takes anything implementing [BufRead], so inputs may be files, decompressed streams, or byte slices.
*/

use std::io::BufRead;

use crate::types::err::{self};

pub mod assumptions;
pub mod definitions;
pub mod dimacs;
pub mod index_map;
pub mod module;

/// Whether to continue reading after a line.
pub(crate) enum LineControl {
    Continue,
    Break,
}

/// Calls `f` on each line of the reader with the number of the line, counted from 1.
///
/// Reading stops at the end of the reader, at the first error from the reader or `f`, or when `f` asks to break.
pub(crate) fn read_lines(
    mut reader: impl BufRead,
    mut f: impl FnMut(&str, usize) -> Result<LineControl, err::ErrorKind>,
) -> Result<(), err::ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut line_counter = 0;

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter + 1))),
        }

        match f(&buffer, line_counter)? {
            LineControl::Continue => {}
            LineControl::Break => break,
        }
    }

    Ok(())
}

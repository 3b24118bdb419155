use std::io::BufRead;

use crate::{
    builder::{read_lines, LineControl},
    misc::log::targets::{self},
    structures::axiom::AxiomId,
    types::err::{self},
};

/// Reads a module: the axiom identifiers of the last non-blank line, without the terminator.
///
/// A solver may report a sequence of improving modules, one per line, so only the last is read.
/// Any earlier lines are replaced, though noted in the log.
///
/// ```rust
/// # use pinpoint::builder::module::read_module;
/// # use pinpoint::structures::axiom::AxiomId;
/// let module = read_module("40 7 12 0\n".as_bytes()).unwrap();
/// assert_eq!(module, vec![AxiomId(40), AxiomId(7), AxiomId(12)]);
///
/// let module = read_module("4 2 0\n1 3 0\n\n".as_bytes()).unwrap();
/// assert_eq!(module, vec![AxiomId(1), AxiomId(3)]);
/// ```
pub fn read_module(reader: impl BufRead) -> Result<Vec<AxiomId>, err::ErrorKind> {
    let mut last_line: Option<(String, usize)> = None;

    read_lines(reader, |line, line_number| {
        if line.trim().is_empty() {
            return Ok(LineControl::Continue);
        }
        if let Some((_, replaced)) = last_line.replace((line.to_string(), line_number)) {
            log::warn!(target: targets::PARSE, "Module line {replaced} replaced by line {line_number}");
        }
        Ok(LineControl::Continue)
    })?;

    let module = match last_line {
        Some((line, line_number)) => read_module_line(&line, line_number)?,
        None => Vec::default(),
    };

    if module.is_empty() {
        log::warn!(target: targets::PARSE, "Empty module");
    }
    Ok(module)
}

/// Reads the identifiers of a single terminated module line.
fn read_module_line(line: &str, line_number: usize) -> Result<Vec<AxiomId>, err::ParseError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();

    let Some((terminator, ids)) = tokens.split_last() else {
        return Ok(Vec::default());
    };
    if *terminator != "0" {
        return Err(err::ParseError::MissingTerminator(line_number));
    }

    ids.iter()
        .map(|id| {
            id.parse::<AxiomId>().map_err(|_| err::ParseError::Token {
                line: line_number,
                token: id.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_line_read() {
        let module = read_module("4 2 0\n1 3 0\n".as_bytes()).unwrap();
        assert_eq!(module, vec![AxiomId(1), AxiomId(3)]);

        let module = read_module("\n3 0\n\n4 0\n  \n".as_bytes()).unwrap();
        assert_eq!(module, vec![AxiomId(4)]);
    }

    #[test]
    fn earlier_lines_not_parsed() {
        let module = read_module("x y\n5 0\n".as_bytes()).unwrap();
        assert_eq!(module, vec![AxiomId(5)]);

        assert_eq!(
            read_module("5 0\n6 7\n".as_bytes()),
            Err(err::ErrorKind::Parse(err::ParseError::MissingTerminator(2)))
        );
    }

    #[test]
    fn leading_zero_identifier() {
        assert_eq!(
            read_module("07 0\n".as_bytes()),
            Err(err::ErrorKind::Parse(err::ParseError::Token {
                line: 1,
                token: "07".to_string()
            }))
        );
    }

    #[test]
    fn empty() {
        assert_eq!(read_module("".as_bytes()), Ok(vec![]));
        assert_eq!(read_module("0\n".as_bytes()), Ok(vec![]));
    }

    #[test]
    fn missing_terminator() {
        assert_eq!(
            read_module("3 4\n".as_bytes()),
            Err(err::ErrorKind::Parse(err::ParseError::MissingTerminator(1)))
        );
    }

    #[test]
    fn negative_identifier() {
        assert!(read_module("3 -4 0\n".as_bytes()).is_err());
    }
}

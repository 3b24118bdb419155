use std::io::BufRead;

use crate::{
    builder::{read_lines, LineControl},
    config::AssumptionMode,
    misc::log::targets::{self},
    structures::literal::{parse_token, Literal},
    types::err::{self},
};

/// Reads assumptions in the given mode, preserving the order (and any duplicates) of the input.
///
/// - [NoOpt](AssumptionMode::NoOpt): the first token of each non-blank line.
/// - [Coi](AssumptionMode::Coi): all tokens but the terminator of the first non-blank line.
///
/// An input without assumptions is read as an empty list, and it is left to the caller to decide whether that is acceptable.
///
/// ```rust
/// # use pinpoint::builder::assumptions::read_assumptions;
/// # use pinpoint::config::AssumptionMode;
/// let no_opt = read_assumptions("4 ignored\n-2\n4\n".as_bytes(), AssumptionMode::NoOpt);
/// assert_eq!(no_opt, Ok(vec![4, -2, 4]));
///
/// let coi = read_assumptions("4 -2 7 0\n9 0\n".as_bytes(), AssumptionMode::Coi);
/// assert_eq!(coi, Ok(vec![4, -2, 7]));
/// ```
pub fn read_assumptions(
    reader: impl BufRead,
    mode: AssumptionMode,
) -> Result<Vec<Literal>, err::ErrorKind> {
    let mut assumptions = Vec::default();

    read_lines(reader, |line, line_number| {
        let tokens = line.split_whitespace().collect::<Vec<_>>();

        match (mode, tokens.as_slice()) {
            (_, []) => Ok(LineControl::Continue),

            (AssumptionMode::NoOpt, [first, ..]) => {
                assumptions.push(assumption(first, line_number)?);
                Ok(LineControl::Continue)
            }

            (AssumptionMode::Coi, [literals @ .., terminator]) => {
                if parse_token(terminator, line_number)? != 0 {
                    return Err(err::ErrorKind::from(err::ParseError::MissingTerminator(
                        line_number,
                    )));
                }
                for token in literals {
                    assumptions.push(assumption(token, line_number)?);
                }
                Ok(LineControl::Break)
            }
        }
    })?;

    log::info!(target: targets::PARSE, "Read {} assumptions ({mode})", assumptions.len());
    Ok(assumptions)
}

fn assumption(token: &str, line_number: usize) -> Result<Literal, err::ParseError> {
    match parse_token(token, line_number)? {
        0 => Err(err::ParseError::MisplacedTerminator(line_number)),
        literal => Ok(literal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coi_only_first_line() {
        let assumptions = read_assumptions("\n3 3 0\n1 2 0\n".as_bytes(), AssumptionMode::Coi);
        assert_eq!(assumptions, Ok(vec![3, 3]));
    }

    #[test]
    fn coi_terminator_only() {
        let assumptions = read_assumptions("0\n".as_bytes(), AssumptionMode::Coi);
        assert_eq!(assumptions, Ok(vec![]));
    }

    #[test]
    fn coi_missing_terminator() {
        let assumptions = read_assumptions("3 4\n".as_bytes(), AssumptionMode::Coi);
        assert_eq!(
            assumptions,
            Err(err::ErrorKind::Parse(err::ParseError::MissingTerminator(1)))
        );
    }

    #[test]
    fn empty() {
        assert_eq!(
            read_assumptions("".as_bytes(), AssumptionMode::Coi),
            Ok(vec![])
        );
        assert_eq!(
            read_assumptions("\n\n".as_bytes(), AssumptionMode::NoOpt),
            Ok(vec![])
        );
    }

    #[test]
    fn no_opt_zero() {
        let assumptions = read_assumptions("2\n0\n".as_bytes(), AssumptionMode::NoOpt);
        assert_eq!(
            assumptions,
            Err(err::ErrorKind::Parse(err::ParseError::MisplacedTerminator(2)))
        );
    }
}

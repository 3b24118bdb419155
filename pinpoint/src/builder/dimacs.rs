use std::io::BufRead;

use crate::{
    builder::{read_lines, LineControl},
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        cnf::Cnf,
        literal::parse_token,
        wcnf::{Wcnf, Weight},
    },
    types::err::{self},
};

/// Reads a clause source, one clause per line.
///
/// - Blank lines are skipped, as are comment (`c`) and problem (`p`) lines.
/// - A line starting with `%` ends the formula, as in the SATLIB benchmarks.
/// - Each clause line must end with the terminator `0`, and contain no other `0`.
///
/// ```rust
/// # use pinpoint::builder::dimacs::read_cnf;
/// let cnf = read_cnf("c a comment\n 1  2 0\n-1  3 0\n".as_bytes()).unwrap();
/// assert_eq!(cnf.clauses, vec![vec![1, 2], vec![-1, 3]]);
/// assert_eq!(cnf.top_var, 3);
/// ```
pub fn read_cnf(reader: impl BufRead) -> Result<Cnf, err::ErrorKind> {
    let mut cnf = Cnf::default();

    read_lines(reader, |line, line_number| {
        match line.trim_start().chars().next() {
            None => {}
            Some('%') => return Ok(LineControl::Break),
            Some('c') | Some('p') => {
                log::trace!(target: targets::PARSE, "Skipped line {line_number}");
            }
            Some(_) => cnf.push(read_clause(line, line_number)?),
        }
        Ok(LineControl::Continue)
    })?;

    if cnf.clause_count() == 0 {
        return Err(err::ErrorKind::from(err::ParseError::NoClauses));
    }

    log::info!(target: targets::PARSE, "Read {} clauses with top variable {}", cnf.clause_count(), cnf.top_var);
    Ok(cnf)
}

/// Reads the literals of a single terminated clause line.
pub fn read_clause(line: &str, line_number: usize) -> Result<Clause, err::ParseError> {
    let mut clause = Clause::default();
    let mut terminated = false;

    for token in line.split_whitespace() {
        if terminated {
            return Err(err::ParseError::MisplacedTerminator(line_number));
        }
        match parse_token(token, line_number)? {
            0 => terminated = true,
            literal => clause.push(literal),
        }
    }

    match terminated {
        true => Ok(clause),
        false => Err(err::ParseError::MissingTerminator(line_number)),
    }
}

impl Wcnf {
    /// Reads a weighted formula, as written by the encoder.
    ///
    /// The problem line must come before any clause, and the count of clauses must match the problem line.
    pub fn read(reader: impl BufRead) -> Result<Wcnf, err::ErrorKind> {
        let mut wcnf: Option<Wcnf> = None;
        let mut expected_clauses = 0;

        read_lines(reader, |line, line_number| {
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                None | Some("c") => {}

                Some("p") => {
                    if wcnf.is_some() {
                        return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
                    }
                    let details = tokens.collect::<Vec<_>>();
                    let [format, top_var, clause_count, hard_weight] = details.as_slice() else {
                        return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
                    };
                    let (Ok(top_var), Ok(clause_count), Ok(hard_weight)) = (
                        top_var.parse::<usize>(),
                        clause_count.parse::<usize>(),
                        hard_weight.parse::<Weight>(),
                    ) else {
                        return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
                    };
                    if *format != "wcnf" {
                        return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
                    }
                    expected_clauses = clause_count;
                    wcnf = Some(Wcnf::new(top_var, hard_weight));
                }

                Some(weight) => {
                    let Some(the_wcnf) = wcnf.as_mut() else {
                        return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
                    };
                    let weight = weight.parse::<Weight>().map_err(|_| err::ParseError::Token {
                        line: line_number,
                        token: weight.to_string(),
                    })?;
                    let rest = line.trim_start().split_once(char::is_whitespace);
                    let clause = read_clause(rest.map_or("", |(_, r)| r), line_number)?;
                    the_wcnf.push_soft(clause, weight);
                }
            }
            Ok(LineControl::Continue)
        })?;

        match wcnf {
            Some(the_wcnf) if the_wcnf.clause_count() == expected_clauses => Ok(the_wcnf),
            _ => Err(err::ErrorKind::from(err::ParseError::ProblemSpecification)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        let cnf = read_cnf("1 2 0\n-1 -2 0\n".as_bytes()).unwrap();
        assert_eq!(cnf.clause_count(), 2);
        assert_eq!(cnf.clauses[1], vec![-1, -2]);
        assert_eq!(cnf.top_var, 2);
    }

    #[test]
    fn header_and_blank_lines() {
        let cnf = read_cnf("c whatever\np cnf 4 2\n\n  4 -2 0\n\n1 0\n%\n0\n".as_bytes()).unwrap();
        assert_eq!(cnf.clauses, vec![vec![4, -2], vec![1]]);
        assert_eq!(cnf.top_var, 4);
    }

    #[test]
    fn empty_source() {
        assert_eq!(
            read_cnf("c nothing here\n".as_bytes()),
            Err(err::ErrorKind::Parse(err::ParseError::NoClauses))
        );
    }

    #[test]
    fn missing_terminator() {
        assert_eq!(
            read_cnf("1 2 0\n-1 3\n".as_bytes()),
            Err(err::ErrorKind::Parse(err::ParseError::MissingTerminator(2)))
        );
    }

    #[test]
    fn misplaced_terminator() {
        assert_eq!(
            read_cnf("1 0 2 0\n".as_bytes()),
            Err(err::ErrorKind::Parse(err::ParseError::MisplacedTerminator(1)))
        );
    }

    #[test]
    fn unparsable_token() {
        assert_eq!(
            read_cnf("1 x 0\n".as_bytes()),
            Err(err::ErrorKind::Parse(err::ParseError::Token {
                line: 1,
                token: "x".to_string()
            }))
        );
    }

    #[test]
    fn weighted() {
        let wcnf = Wcnf::read("p wcnf 2 3 3\n3 1 -2 0\n3 -1 0\n1 2 0\n".as_bytes()).unwrap();
        assert_eq!(wcnf.hard_weight, 3);
        assert_eq!(wcnf.hard_clauses().count(), 2);
        assert_eq!(wcnf.soft_weight(), 1);
    }

    #[test]
    fn weighted_count_mismatch() {
        assert!(Wcnf::read("p wcnf 2 3 3\n3 1 -2 0\n".as_bytes()).is_err());
        assert!(Wcnf::read("3 1 -2 0\n".as_bytes()).is_err());
    }
}

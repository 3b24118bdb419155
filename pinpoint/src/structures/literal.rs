/*!
Literals, as read from and written to DIMACS style inputs.

A literal is a non-zero signed integer, where the absolute value of the integer is the variable of the literal and the sign its polarity.
The integer `0` is reserved as the terminator of a clause.

```rust
# use pinpoint::structures::literal::{negate, variable};
assert_eq!(variable(-7), 7);
assert_eq!(negate(-7), Ok(7));
assert!(negate(0).is_err());
```
*/

use crate::types::err::{self};

/// A literal.
pub type Literal = isize;

/// The variable of a literal.
pub fn variable(literal: Literal) -> usize {
    literal.unsigned_abs()
}

/// The negation of a literal.
///
/// Errors if the literal is `0`, or has no negation of the same type.
pub fn negate(literal: Literal) -> Result<Literal, err::ParseError> {
    match literal {
        0 => Err(err::ParseError::ZeroLiteral),
        _ => literal
            .checked_neg()
            .ok_or(err::ParseError::Unnegatable(literal)),
    }
}

/// Parses a token at the given line to a literal, or the terminator `0`.
pub fn parse_token(token: &str, line: usize) -> Result<Literal, err::ParseError> {
    token.parse::<Literal>().map_err(|_| err::ParseError::Token {
        line,
        token: token.to_string(),
    })
}

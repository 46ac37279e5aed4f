//! Instruction scanner: a bounded state machine over token-delimited text.

use crate::TokenError;

/// Maximum digits per operand. Operands are capped at 0..=999; a 4th digit
/// is left unconsumed and fails the following `,`/`)` check.
const MAX_OPERAND_DIGITS: usize = 3;

/// Maximum instruction body length after the start token:
/// 3 digits + `,` + 3 digits + `)`.
const MAX_BODY_LEN: usize = 2 * MAX_OPERAND_DIGITS + 2;

/// States of the instruction parser. `Error` and `Complete` are terminal
/// per attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    None,
    LeftDigits,
    Comma,
    RightDigits,
    CloseParen,
    Complete,
    Error,
}

/// Outcome of a single parse attempt: how many bytes the attempt consumed
/// (successfully matched), and the operand product if the grammar completed.
struct Attempt {
    consumed: usize,
    product: Option<u64>,
}

/// Scan `text` for instructions of the form `start_token a , b )` where `a`
/// and `b` are 1-3 decimal digits, and return the sum of `a * b` over every
/// valid occurrence.
///
/// Malformed candidates contribute nothing; scanning resumes at the next
/// `start_token` occurrence after the point where the failed attempt stopped,
/// so candidates overlapping a failed attempt are still found. The input is
/// never mutated.
///
/// # Errors
///
/// Returns [`TokenError::Empty`] if `start_token` is empty.
pub fn scan(text: &str, start_token: &str) -> Result<u64, TokenError> {
    if start_token.is_empty() {
        return Err(TokenError::Empty("start"));
    }

    let mut total = 0u64;
    let mut rest = text;
    while let Some(found) = rest.find(start_token) {
        let body = &rest[found + start_token.len()..];
        let attempt = parse_body(body);
        if let Some(product) = attempt.product {
            total += product;
        }
        rest = &body[attempt.consumed..];
    }
    Ok(total)
}

/// Run the state machine over the text immediately following a start token.
///
/// Each state consumes only the characters it matches, so on failure
/// `consumed` marks exactly where the outer search should resume. The
/// `MAX_BODY_LEN` bound guarantees termination on pathological input.
fn parse_body(body: &str) -> Attempt {
    let bytes = body.as_bytes();
    let mut state = ParseState::None;
    let mut consumed = 0usize;
    let mut left = 0u64;
    let mut right = 0u64;
    let mut product = None;

    while consumed <= MAX_BODY_LEN {
        state = match state {
            ParseState::None => match scan_operand(&bytes[consumed..]) {
                Some((len, value)) => {
                    left = value;
                    consumed += len;
                    ParseState::LeftDigits
                }
                None => ParseState::Error,
            },
            ParseState::LeftDigits => {
                if bytes.get(consumed) == Some(&b',') {
                    consumed += 1;
                    ParseState::Comma
                } else {
                    ParseState::Error
                }
            }
            ParseState::Comma => match scan_operand(&bytes[consumed..]) {
                Some((len, value)) => {
                    right = value;
                    consumed += len;
                    ParseState::RightDigits
                }
                None => ParseState::Error,
            },
            ParseState::RightDigits => {
                if bytes.get(consumed) == Some(&b')') {
                    consumed += 1;
                    ParseState::CloseParen
                } else {
                    ParseState::Error
                }
            }
            ParseState::CloseParen => {
                product = Some(left * right);
                ParseState::Complete
            }
            ParseState::Complete | ParseState::Error => break,
        };
    }

    Attempt { consumed, product }
}

/// Consume up to [`MAX_OPERAND_DIGITS`] ASCII digits, accumulating their
/// decimal value. Returns `None` if the first byte is not a digit.
fn scan_operand(bytes: &[u8]) -> Option<(usize, u64)> {
    let mut len = 0usize;
    let mut value = 0u64;
    while len < MAX_OPERAND_DIGITS
        && let Some(&b) = bytes.get(len)
        && b.is_ascii_digit()
    {
        value = value * 10 + u64::from(b - b'0');
        len += 1;
    }
    if len > 0 { Some((len, value)) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_zero() {
        assert_eq!(scan("", "mul(").unwrap(), 0);
    }

    #[test]
    fn text_without_token_is_zero() {
        assert_eq!(scan("nothing to see here 3,4)", "mul(").unwrap(), 0);
    }

    #[test]
    fn single_instruction() {
        assert_eq!(scan("mul(2,4)", "mul(").unwrap(), 8);
    }

    #[test]
    fn operand_bounds() {
        assert_eq!(scan("mul(0,0)", "mul(").unwrap(), 0);
        assert_eq!(scan("mul(999,999)", "mul(").unwrap(), 999 * 999);
    }

    #[test]
    fn leading_zeros_parse_by_value() {
        assert_eq!(scan("mul(007,02)", "mul(").unwrap(), 14);
    }

    #[test]
    fn four_digit_operand_rejected() {
        assert_eq!(scan("mul(1234,5)", "mul(").unwrap(), 0);
        assert_eq!(scan("mul(5,1234)", "mul(").unwrap(), 0);
    }

    #[test]
    fn malformed_bodies_rejected() {
        assert_eq!(scan("mul(4*", "mul(").unwrap(), 0);
        assert_eq!(scan("mul(6,9!", "mul(").unwrap(), 0);
        assert_eq!(scan("?(12,34)", "mul(").unwrap(), 0);
        assert_eq!(scan("mul ( 2 , 4 )", "mul(").unwrap(), 0);
        assert_eq!(scan("mul(1,2", "mul(").unwrap(), 0);
        assert_eq!(scan("mul(,2)", "mul(").unwrap(), 0);
    }

    #[test]
    fn adjacent_instructions() {
        assert_eq!(scan("mul(2,3)mul(4,5)", "mul(").unwrap(), 26);
    }

    #[test]
    fn token_inside_failed_attempt_is_found() {
        // The outer "mul(" fails at 'm', leaving the inner occurrence intact.
        assert_eq!(scan("mul(mul(3,5)", "mul(").unwrap(), 15);
    }

    #[test]
    fn noise_between_instructions() {
        let text = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        assert_eq!(scan(text, "mul(").unwrap(), 161);
    }

    #[test]
    fn empty_token_is_an_error() {
        assert_eq!(scan("mul(2,4)", ""), Err(TokenError::Empty("start")));
    }

    #[test]
    fn custom_start_token() {
        assert_eq!(scan("add(2,4)mul(3,3)", "add(").unwrap(), 8);
    }
}

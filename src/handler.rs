//! The addition request handler.
//!
//! # Responsibilities
//! - Parse the `num1` and `num2` form fields as signed 64-bit integers
//! - Compute their sum, refusing to overflow
//! - Render the HTML fragment for the success and failure outcomes
//!
//! # Design Decisions
//! - Pure and stateless: same input always yields the same output
//! - Failures are typed (`HandlerError`), not a catch-all; the `ok` boolean
//!   the caller consumes is derived from the typed result at the module edge
//! - Overflow is a failure, reported like a parse failure (a wrapped sum would
//!   misreport the arithmetic)

use crate::error::{HandlerError, HandlerResult};
use crate::params::FormParams;

/// Form field holding the first operand.
pub const FIELD_NUM1: &str = "num1";
/// Form field holding the second operand.
pub const FIELD_NUM2: &str = "num2";

const HEADING: &str = "<h1>Addition Results</h1>";
const APOLOGY: &str = "Sorry, we cannot turn your inputs into integers.";

/// A successfully computed addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addition {
    pub lhs: i64,
    pub rhs: i64,
    pub sum: i64,
}

/// Rendered handler output: the HTML body plus the success signal the
/// embedding environment maps to a process exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub body: String,
    pub ok: bool,
}

/// Handles one addition request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditionHandler {
    /// Include the failure detail in the error paragraph.
    debug: bool,
}

impl AdditionHandler {
    /// Create a handler with the given verbose-error setting.
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Process one set of form parameters into an HTML body and status.
    pub fn handle(&self, params: &FormParams) -> HandlerResponse {
        match compute(params) {
            Ok(addition) => {
                tracing::debug!(
                    lhs = addition.lhs,
                    rhs = addition.rhs,
                    sum = addition.sum,
                    "Addition computed"
                );
                HandlerResponse {
                    body: render_success(&addition),
                    ok: true,
                }
            }
            Err(error) => {
                tracing::warn!(error = %error, "Input rejected");
                HandlerResponse {
                    body: render_failure(&error, self.debug),
                    ok: false,
                }
            }
        }
    }
}

/// Parse both operands and add them, with overflow treated as failure.
pub fn compute(params: &FormParams) -> HandlerResult<Addition> {
    let lhs = parse_field(params, FIELD_NUM1)?;
    let rhs = parse_field(params, FIELD_NUM2)?;

    let sum = lhs
        .checked_add(rhs)
        .ok_or(HandlerError::Overflow { lhs, rhs })?;

    Ok(Addition { lhs, rhs, sum })
}

fn parse_field(params: &FormParams, name: &'static str) -> HandlerResult<i64> {
    let raw = params
        .get(name)
        .ok_or(HandlerError::MissingField { name })?;

    raw.trim()
        .parse::<i64>()
        .map_err(|_| HandlerError::InvalidInteger {
            name,
            value: raw.to_string(),
        })
}

fn render_success(addition: &Addition) -> String {
    format!(
        "{HEADING}\r\n<p>{} + {} = {}</p>\r\n",
        addition.lhs, addition.rhs, addition.sum
    )
}

fn render_failure(error: &HandlerError, debug: bool) -> String {
    if debug {
        format!("{HEADING}\r\n<p>{APOLOGY} ({error})</p>\r\n")
    } else {
        format!("{HEADING}\r\n<p>{APOLOGY}</p>\r\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> FormParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_adds_two_integers() {
        let handler = AdditionHandler::default();
        let response = handler.handle(&params(&[("num1", "2"), ("num2", "3")]));
        assert!(response.ok);
        assert!(response.body.contains("<h1>Addition Results</h1>"));
        assert!(response.body.contains("<p>2 + 3 = 5</p>"));
    }

    #[test]
    fn test_negative_operand_cancels() {
        let handler = AdditionHandler::default();
        let response = handler.handle(&params(&[("num1", "-5"), ("num2", "5")]));
        assert!(response.ok);
        assert!(response.body.contains("-5 + 5 = 0"));
    }

    #[test]
    fn test_missing_both_fields() {
        let handler = AdditionHandler::default();
        let response = handler.handle(&FormParams::new());
        assert!(!response.ok);
        assert!(response.body.contains("Sorry, we cannot turn your inputs into integers."));
        // The heading is emitted before the parse attempt, so it appears in
        // failure bodies too.
        assert!(response.body.contains("<h1>Addition Results</h1>"));
    }

    #[test]
    fn test_non_numeric_operand() {
        let handler = AdditionHandler::default();
        let response = handler.handle(&params(&[("num1", "abc"), ("num2", "3")]));
        assert!(!response.ok);
        assert!(response.body.contains("Sorry"));
    }

    #[test]
    fn test_empty_operand() {
        let handler = AdditionHandler::default();
        let response = handler.handle(&params(&[("num1", "2"), ("num2", "")]));
        assert!(!response.ok);
    }

    #[test]
    fn test_overflow_is_failure() {
        let result = compute(&params(&[
            ("num1", &i64::MAX.to_string()),
            ("num2", "1"),
        ]));
        assert_eq!(
            result,
            Err(HandlerError::Overflow {
                lhs: i64::MAX,
                rhs: 1
            })
        );

        let handler = AdditionHandler::default();
        let response = handler.handle(&params(&[
            ("num1", &i64::MAX.to_string()),
            ("num2", "1"),
        ]));
        assert!(!response.ok);
    }

    #[test]
    fn test_extreme_sum_within_range() {
        let handler = AdditionHandler::default();
        let response = handler.handle(&params(&[
            ("num1", &i64::MAX.to_string()),
            ("num2", "-1"),
        ]));
        assert!(response.ok);
        assert!(response
            .body
            .contains(&format!("{} + -1 = {}", i64::MAX, i64::MAX - 1)));
    }

    #[test]
    fn test_idempotent() {
        let handler = AdditionHandler::default();
        let input = params(&[("num1", "7"), ("num2", "35")]);
        assert_eq!(handler.handle(&input), handler.handle(&input));
    }

    #[test]
    fn test_debug_mode_names_offending_field() {
        let handler = AdditionHandler::new(true);
        let response = handler.handle(&params(&[("num1", "abc"), ("num2", "3")]));
        assert!(!response.ok);
        assert!(response.body.contains("Sorry, we cannot turn your inputs into integers."));
        assert!(response.body.contains("num1"));
    }

    #[test]
    fn test_typed_error_for_missing_field() {
        let result = compute(&params(&[("num2", "3")]));
        assert_eq!(result, Err(HandlerError::MissingField { name: "num1" }));
    }

    #[test]
    fn test_surrounding_whitespace_accepted() {
        let handler = AdditionHandler::default();
        let response = handler.handle(&params(&[("num1", " 2 "), ("num2", "3")]));
        assert!(response.ok);
        assert!(response.body.contains("2 + 3 = 5"));
    }
}

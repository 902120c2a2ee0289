//! Sum-of-products to product-of-sums text transform

use super::error::FormatError;
use super::parser::parse_sop;
use super::{Product, COMPLEMENT};

/// POS text for the constant renderings `0` and `1`: one empty sum
const EMPTY_SUM: &str = "()";

/// Convert a rendered sum-of-products string into product-of-sums notation
///
/// Every product term becomes one parenthesised sum in which each literal is
/// complemented: a letter followed by `'` is emitted bare, any other letter
/// gets a `'` appended. Sums are joined with `" . "`.
///
/// The constants `0` and `1` have no literals to complement and both become
/// a single empty sum, `()`.
///
/// This is a literal-by-literal rewrite of the text, not a Boolean dual of
/// the function. In general the result does not describe the same function
/// as the input.
///
/// # Errors
///
/// Returns [`FormatError`] if `sop` is not a sum-of-products expression. In
/// particular, product-of-sums output is rejected.
///
/// # Examples
///
/// ```
/// use qmc_logic::to_pos;
///
/// assert_eq!(to_pos("AB' + C").unwrap(), "(A' + B) . (C')");
/// assert_eq!(to_pos("1").unwrap(), "()");
/// assert!(to_pos("(A' + B) . (C')").is_err());
/// ```
pub fn sop_to_pos(sop: &str) -> Result<String, FormatError> {
    let expression = parse_sop(sop)?;
    if expression.products().iter().all(Product::is_empty) {
        return Ok(EMPTY_SUM.to_string());
    }

    let sums: Vec<String> = sop
        .split(" + ")
        .map(|term| {
            let chars: Vec<char> = term.chars().collect();
            let literals: Vec<String> = chars
                .iter()
                .enumerate()
                .filter(|(_, c)| c.is_alphabetic())
                .map(|(i, &c)| {
                    if chars.get(i + 1) == Some(&COMPLEMENT) {
                        c.to_string()
                    } else {
                        format!("{}{}", c, COMPLEMENT)
                    }
                })
                .collect();
            format!("({})", literals.join(" + "))
        })
        .collect();

    Ok(sums.join(" . "))
}

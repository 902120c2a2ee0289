//! Sum-of-products expressions
//!
//! This module renders chosen implicants as literal expressions and converts
//! rendered sum-of-products text into the product-of-sums form.
//!
//! # Notation
//!
//! Variables are single letters assigned by bit position: position 0 is `A`,
//! position 25 is `Z`, positions 26 to 51 continue with `a` to `z`. A
//! complemented variable carries a trailing `'`. Literals of a product are
//! written without separator and products are joined with `" + "`:
//!
//! ```
//! use qmc_logic::{SopExpression, Term};
//!
//! let terms: Vec<Term> = ["1-0", "01-"].iter().map(|t| t.parse().unwrap()).collect();
//! let sop = SopExpression::from_terms(&terms);
//!
//! assert_eq!(sop.to_string(), "AC' + A'B");
//! ```

mod display;
mod error;
mod parser;
mod pos;

pub use error::FormatError;
pub use pos::sop_to_pos;

use std::sync::Arc;

use crate::term::{Bit, Term, MAX_VARIABLES};

/// Suffix marking a complemented variable
pub const COMPLEMENT: char = '\'';

const VARIABLES: &[u8; MAX_VARIABLES] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Variable letter for bit `position`, if one exists
pub fn variable_name(position: usize) -> Option<char> {
    VARIABLES.get(position).map(|&b| b as char)
}

/// Bit position of a variable letter, if it is one
pub fn variable_position(name: char) -> Option<usize> {
    VARIABLES.iter().position(|&b| b as char == name)
}

/// A possibly complemented variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    variable: char,
    complemented: bool,
}

impl Literal {
    /// Create a literal for `variable`
    pub fn new(variable: char, complemented: bool) -> Self {
        Literal {
            variable,
            complemented,
        }
    }

    /// The variable letter
    pub fn variable(&self) -> char {
        self.variable
    }

    /// Whether the variable appears complemented
    pub fn is_complemented(&self) -> bool {
        self.complemented
    }
}

/// A conjunction of literals
///
/// A product without literals is the constant 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    literals: Arc<[Literal]>,
}

impl Product {
    /// Build a product from literals in the given order
    pub fn from_literals(literals: Vec<Literal>) -> Self {
        Product {
            literals: literals.into(),
        }
    }

    /// Render an implicant: `1` gives the plain variable, `0` the complemented
    /// variable and `-` nothing
    pub fn from_term(term: &Term) -> Self {
        let literals = term
            .bits()
            .iter()
            .enumerate()
            .filter_map(|(position, bit)| {
                let variable = variable_name(position)?;
                match bit {
                    Bit::One => Some(Literal::new(variable, false)),
                    Bit::Zero => Some(Literal::new(variable, true)),
                    Bit::DontCare => None,
                }
            })
            .collect();
        Product { literals }
    }

    /// The literals of this product
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Number of literals
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether this product is the constant 1
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

/// A disjunction of products
///
/// An expression without products is the constant 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SopExpression {
    products: Vec<Product>,
}

impl SopExpression {
    /// Build an expression from products in the given order
    pub fn from_products(products: Vec<Product>) -> Self {
        SopExpression { products }
    }

    /// Render every implicant as one product term
    pub fn from_terms<'a, I>(terms: I) -> Self
    where
        I: IntoIterator<Item = &'a Term>,
    {
        SopExpression {
            products: terms.into_iter().map(Product::from_term).collect(),
        }
    }

    /// Parse a rendered sum-of-products string
    ///
    /// ```
    /// use qmc_logic::SopExpression;
    ///
    /// let sop = SopExpression::parse("AB' + C").unwrap();
    /// assert_eq!(sop.num_products(), 2);
    /// assert!(SopExpression::parse("(A + B)").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        parser::parse_sop(input)
    }

    /// The products of this expression
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of product terms
    pub fn num_products(&self) -> usize {
        self.products.len()
    }

    /// Whether this expression is the constant 0
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

//! Display formatting for rendered expressions

use super::{Literal, Product, SopExpression, COMPLEMENT};
use std::fmt;

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.complemented {
            write!(f, "{}{}", self.variable, COMPLEMENT)
        } else {
            write!(f, "{}", self.variable)
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "1");
        }
        for literal in self.literals.iter() {
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

impl fmt::Display for SopExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.products.is_empty() {
            return write!(f, "0");
        }
        for (i, product) in self.products.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", product)?;
        }
        Ok(())
    }
}

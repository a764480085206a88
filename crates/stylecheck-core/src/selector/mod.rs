//! Structural selector model.

mod specificity;
mod types;

pub use specificity::{Specificity, SpecificityWithOrder};
pub use types::{Combinator, PseudoClass, Selector, SelectorPart, TypeSelector};

//! CSS specificity calculation.

use super::{PseudoClass, Selector, SelectorPart, TypeSelector};

/// CSS specificity as (a, b, c) tuple.
///
/// - a: ID selectors
/// - b: Class selectors, attributes, pseudo-classes
/// - c: Type selectors, pseudo-elements
///
/// Compared lexicographically: (1,0,0) > (0,99,99)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Zero specificity (universal selector).
    pub const ZERO: Self = Self(0, 0, 0);

    /// Calculate specificity of a selector.
    pub fn of_selector(selector: &Selector) -> Self {
        let mut a = 0u32;
        let mut b = 0u32;
        let mut c = 0u32;

        for part in &selector.parts {
            Self::add_part(part, &mut a, &mut b, &mut c);
        }

        Self(a, b, c)
    }

    /// Calculate specificity of a selector part.
    pub fn of_part(part: &SelectorPart) -> Self {
        let mut a = 0u32;
        let mut b = 0u32;
        let mut c = 0u32;
        Self::add_part(part, &mut a, &mut b, &mut c);
        Self(a, b, c)
    }

    fn add_part(part: &SelectorPart, a: &mut u32, b: &mut u32, c: &mut u32) {
        if part.id.is_some() {
            *a += 1;
        }

        *b += part.classes.len() as u32;
        *b += part.attributes.len() as u32;

        for pseudo in &part.pseudo_classes {
            match pseudo {
                PseudoClass::Not(inner) => {
                    // :not() specificity is that of its argument
                    Self::add_part(inner, a, b, c);
                }
                _ => {
                    *b += 1;
                }
            }
        }

        if let Some(type_sel) = &part.type_selector {
            match type_sel {
                TypeSelector::Universal => {} // * has no specificity
                TypeSelector::Element(_) => *c += 1,
            }
        }
    }

    /// Get the ID selector count.
    pub fn ids(&self) -> u32 {
        self.0
    }

    /// Get the class/pseudo-class count.
    pub fn classes(&self) -> u32 {
        self.1
    }

    /// Get the type selector count.
    pub fn types(&self) -> u32 {
        self.2
    }

    /// True if any component exceeds the corresponding component of `ceiling`.
    pub fn exceeds(&self, ceiling: &Specificity) -> bool {
        self.0 > ceiling.0 || self.1 > ceiling.1 || self.2 > ceiling.2
    }

    /// Combine with source order for complete ordering.
    pub fn with_order(self, order: u32) -> SpecificityWithOrder {
        SpecificityWithOrder {
            specificity: self,
            order,
        }
    }
}

impl std::fmt::Display for Specificity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

/// Specificity combined with source order for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpecificityWithOrder {
    /// The CSS specificity value.
    pub specificity: Specificity,
    /// Source order for tie-breaking (higher = later in stylesheet).
    pub order: u32,
}

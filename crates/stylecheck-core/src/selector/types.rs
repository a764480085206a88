//! Selector type definitions.

use std::fmt;

/// A complete CSS selector (e.g., ".search-form > .title:hover").
///
/// A selector consists of one or more selector parts connected by combinators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Chain of selector parts with their connecting combinators.
    pub parts: Vec<SelectorPart>,
    /// Combinators between parts (length = parts.len() - 1).
    pub combinators: Vec<Combinator>,
}

impl Selector {
    /// Create a simple element type selector.
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            parts: vec![SelectorPart::element_only(name)],
            combinators: vec![],
        }
    }

    /// Create a class selector.
    pub fn class(class_name: impl Into<String>) -> Self {
        Self {
            parts: vec![SelectorPart::class_only(class_name)],
            combinators: vec![],
        }
    }

    /// Create an ID selector.
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            parts: vec![SelectorPart::id_only(id)],
            combinators: vec![],
        }
    }

    /// Add a descendant selector part.
    pub fn descendant(mut self, part: SelectorPart) -> Self {
        if !self.parts.is_empty() {
            self.combinators.push(Combinator::Descendant);
        }
        self.parts.push(part);
        self
    }

    /// Add a child selector part.
    pub fn child(mut self, part: SelectorPart) -> Self {
        if !self.parts.is_empty() {
            self.combinators.push(Combinator::Child);
        }
        self.parts.push(part);
        self
    }

    /// Get the rightmost (subject) selector part.
    pub fn subject(&self) -> Option<&SelectorPart> {
        self.parts.last()
    }

    /// Get the ancestor parts (everything left of the subject).
    pub fn ancestors(&self) -> &[SelectorPart] {
        if self.parts.is_empty() {
            &[]
        } else {
            &self.parts[..self.parts.len() - 1]
        }
    }

    /// Number of combinators in the selector.
    pub fn depth(&self) -> usize {
        self.combinators.len()
    }

    /// Iterate over every class name mentioned anywhere in the selector,
    /// including inside `:not()` arguments.
    pub fn all_classes(&self) -> Vec<&str> {
        let mut out = vec![];
        for part in &self.parts {
            collect_classes(part, &mut out);
        }
        out
    }
}

fn collect_classes<'a>(part: &'a SelectorPart, out: &mut Vec<&'a str>) {
    for class in &part.classes {
        out.push(class.as_str());
    }
    for pseudo in &part.pseudo_classes {
        if let PseudoClass::Not(inner) = pseudo {
            collect_classes(inner, out);
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                match &self.combinators[i - 1] {
                    Combinator::Descendant => write!(f, " ")?,
                    Combinator::Child => write!(f, " > ")?,
                    Combinator::AdjacentSibling => write!(f, " + ")?,
                    Combinator::GeneralSibling => write!(f, " ~ ")?,
                }
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// A single selector segment (e.g., ".search-form.is-open:hover").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectorPart {
    /// Type selector (element name or universal).
    pub type_selector: Option<TypeSelector>,
    /// ID selector (#id).
    pub id: Option<String>,
    /// Class selectors (.class).
    pub classes: Vec<String>,
    /// Attribute selectors, kept as raw text (e.g., `type="text"` for
    /// `[type="text"]`). Opaque to the naming checks but they count toward
    /// specificity.
    pub attributes: Vec<String>,
    /// Pseudo-class selectors (:hover, :first-child, etc.).
    pub pseudo_classes: Vec<PseudoClass>,
}

impl SelectorPart {
    /// Create a new empty selector part.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element-only selector.
    pub fn element_only(name: impl Into<String>) -> Self {
        Self {
            type_selector: Some(TypeSelector::Element(name.into())),
            ..Default::default()
        }
    }

    /// Create a universal selector part.
    pub fn universal() -> Self {
        Self {
            type_selector: Some(TypeSelector::Universal),
            ..Default::default()
        }
    }

    /// Create a class-only selector.
    pub fn class_only(class_name: impl Into<String>) -> Self {
        Self {
            classes: vec![class_name.into()],
            ..Default::default()
        }
    }

    /// Create an ID-only selector.
    pub fn id_only(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Add an element type selector.
    pub fn with_element(mut self, name: impl Into<String>) -> Self {
        self.type_selector = Some(TypeSelector::Element(name.into()));
        self
    }

    /// Add a class selector.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add an attribute selector.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Add a pseudo-class selector.
    pub fn with_pseudo(mut self, pseudo: PseudoClass) -> Self {
        self.pseudo_classes.push(pseudo);
        self
    }

    /// Check if this part has no constraints at all.
    pub fn is_empty(&self) -> bool {
        self.type_selector.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
            && self.pseudo_classes.is_empty()
    }

    /// Check if this part is a bare element selector (no id, classes,
    /// attributes, or pseudo-classes).
    pub fn is_bare_element(&self) -> bool {
        matches!(self.type_selector, Some(TypeSelector::Element(_)))
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
            && self.pseudo_classes.is_empty()
    }

    /// The element name, if this part carries one.
    pub fn element_name(&self) -> Option<&str> {
        match &self.type_selector {
            Some(TypeSelector::Element(name)) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_selector {
            Some(TypeSelector::Universal) => write!(f, "*")?,
            Some(TypeSelector::Element(t)) => write!(f, "{}", t)?,
            None => {}
        }

        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }

        for class in &self.classes {
            write!(f, ".{}", class)?;
        }

        for attribute in &self.attributes {
            write!(f, "[{}]", attribute)?;
        }

        for pseudo in &self.pseudo_classes {
            write!(f, ":{}", pseudo)?;
        }

        Ok(())
    }
}

/// Type selector - matches an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSelector {
    /// Universal selector (*) - matches any element.
    Universal,
    /// Named element (e.g., "div", "a").
    Element(String),
}

/// Combinator between selector parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Descendant combinator (space): matches any descendant.
    Descendant,
    /// Child combinator (>): matches direct child only.
    Child,
    /// Adjacent sibling (+): matches immediately following sibling.
    AdjacentSibling,
    /// General sibling (~): matches any following sibling.
    GeneralSibling,
}

/// Pseudo-class selectors.
///
/// The linter keeps unrecognized pseudo-classes as [`PseudoClass::Other`]
/// rather than rejecting them; naming conventions do not restrict which
/// pseudo-classes a stylesheet may use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    /// :hover
    Hover,
    /// :focus
    Focus,
    /// :active
    Active,
    /// :visited
    Visited,
    /// :disabled
    Disabled,
    /// :checked
    Checked,
    /// :first-child
    FirstChild,
    /// :last-child
    LastChild,
    /// :not(selector) - negation.
    Not(Box<SelectorPart>),
    /// Any pseudo-class the linter does not model structurally.
    Other(String),
}

impl PseudoClass {
    /// Parse a pseudo-class from its CSS name (without arguments).
    pub fn from_css(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hover" => Self::Hover,
            "focus" => Self::Focus,
            "active" => Self::Active,
            "visited" => Self::Visited,
            "disabled" => Self::Disabled,
            "checked" => Self::Checked,
            "first-child" => Self::FirstChild,
            "last-child" => Self::LastChild,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PseudoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PseudoClass::Hover => write!(f, "hover"),
            PseudoClass::Focus => write!(f, "focus"),
            PseudoClass::Active => write!(f, "active"),
            PseudoClass::Visited => write!(f, "visited"),
            PseudoClass::Disabled => write!(f, "disabled"),
            PseudoClass::Checked => write!(f, "checked"),
            PseudoClass::FirstChild => write!(f, "first-child"),
            PseudoClass::LastChild => write!(f, "last-child"),
            PseudoClass::Not(inner) => write!(f, "not({})", inner),
            PseudoClass::Other(name) => write!(f, "{}", name),
        }
    }
}

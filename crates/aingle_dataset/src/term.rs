//! RDF terms and triples.
//!
//! A [`Term`] is an IRI, a blank node or a [`Literal`]. Equality is purely
//! structural: two terms are equal when all of their fields are equal.

use crate::vocab::XSD_STRING;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value: a lexical form with an optional datatype and language tag.
///
/// # Examples
///
/// ```
/// use aingle_dataset::Literal;
///
/// let plain = Literal::plain("café");
/// assert!(plain.is_string());
///
/// let typed = Literal::typed("42", "http://www.w3.org/2001/XMLSchema#integer");
/// assert!(!typed.is_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    lexical: String,
    datatype: Option<String>,
    language: Option<String>,
}

impl Literal {
    /// Creates a literal without datatype or language tag.
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    /// Creates a literal with an explicit datatype IRI.
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
            language: None,
        }
    }

    /// Creates a language-tagged literal.
    pub fn lang(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }

    /// Creates an `xsd:string` literal.
    pub fn string(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, XSD_STRING)
    }

    /// The lexical form.
    pub fn lexical_form(&self) -> &str {
        &self.lexical
    }

    /// The datatype IRI, if one was given.
    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    /// The language tag, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns `true` if the literal has no datatype or is an `xsd:string`.
    pub fn is_string(&self) -> bool {
        match self.datatype() {
            None => true,
            Some(dt) => dt == XSD_STRING,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.lexical)?;
        if let Some(lang) = &self.language {
            write!(f, "@{}", lang)
        } else if let Some(dt) = &self.datatype {
            write!(f, "^^<{}>", dt)
        } else {
            Ok(())
        }
    }
}

/// An RDF term that can appear in a triple.
///
/// # Examples
///
/// ```
/// use aingle_dataset::Term;
///
/// let alice = Term::iri("http://example.org/alice");
/// assert!(alice.is_iri());
/// assert_eq!(alice.as_iri(), Some("http://example.org/alice"));
///
/// let name = Term::literal("Alice");
/// assert!(name.is_literal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    /// An IRI.
    Iri(String),
    /// A blank node, identified by a label local to its graph.
    Blank(String),
    /// A literal.
    Literal(Literal),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    /// Creates a blank node term.
    pub fn blank(id: impl Into<String>) -> Self {
        Self::Blank(id.into())
    }

    /// Creates a plain literal term.
    pub fn literal(lexical: impl Into<String>) -> Self {
        Self::Literal(Literal::plain(lexical))
    }

    /// Creates a typed literal term.
    pub fn typed_literal(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Literal(Literal::typed(lexical, datatype))
    }

    /// Creates a language-tagged literal term.
    pub fn lang_literal(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self::Literal(Literal::lang(lexical, language))
    }

    /// Returns `true` if this is an IRI.
    pub fn is_iri(&self) -> bool {
        matches!(self, Self::Iri(_))
    }

    /// Returns `true` if this is a blank node.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank(_))
    }

    /// Returns `true` if this is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    fn relabel_blank(self, relabel: &mut impl FnMut(&str) -> String) -> Self {
        match self {
            Self::Blank(id) => Self::Blank(relabel(&id)),
            other => other,
        }
    }

    /// Returns the IRI if this is an IRI term.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this is a literal term.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{}>", iri),
            Self::Blank(id) => write!(f, "_:{}", id),
            Self::Literal(lit) => lit.fmt(f),
        }
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

/// A `(subject, predicate, object)` statement.
///
/// The subject must be an IRI or a blank node and the predicate an IRI;
/// [`Triple::new`] rejects anything else.
///
/// # Examples
///
/// ```
/// use aingle_dataset::{Term, Triple};
///
/// let t = Triple::new(
///     Term::iri("http://example.org/alice"),
///     Term::iri("http://xmlns.com/foaf/0.1/name"),
///     Term::literal("Alice"),
/// )?;
/// assert_eq!(t.subject(), &Term::iri("http://example.org/alice"));
///
/// // Literals cannot be subjects.
/// assert!(Triple::new(Term::literal("x"), Term::iri("urn:p"), Term::literal("y")).is_err());
/// # Ok::<(), aingle_dataset::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    subject: Term,
    predicate: Term,
    object: Term,
}

impl Triple {
    /// Creates a triple, checking the position restrictions.
    pub fn new(subject: Term, predicate: Term, object: Term) -> Result<Self> {
        if subject.is_literal() {
            return Err(Error::InvalidTriple(format!(
                "subject must be IRI or blank node, got {}",
                subject
            )));
        }
        if !predicate.is_iri() {
            return Err(Error::InvalidTriple(format!(
                "predicate must be IRI, got {}",
                predicate
            )));
        }
        Ok(Self {
            subject,
            predicate,
            object,
        })
    }

    /// The subject.
    pub fn subject(&self) -> &Term {
        &self.subject
    }

    /// The predicate.
    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    /// The object.
    pub fn object(&self) -> &Term {
        &self.object
    }

    /// Returns `true` if the subject or the object is a blank node.
    pub fn has_blank_node(&self) -> bool {
        self.subject.is_blank() || self.object.is_blank()
    }

    pub(crate) fn relabel_blank_nodes(self, relabel: &mut impl FnMut(&str) -> String) -> Self {
        Self {
            subject: self.subject.relabel_blank(relabel),
            predicate: self.predicate,
            object: self.object.relabel_blank(relabel),
        }
    }

    /// Returns `true` if every bound position of the pattern matches.
    pub fn matches(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>) -> bool {
        s.is_none_or(|s| *s == self.subject)
            && p.is_none_or(|p| *p == self.predicate)
            && o.is_none_or(|o| *o == self.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

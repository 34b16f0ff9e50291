//! File loader
//!
//! Reads Turtle and N-Triples documents behind `file:` IRIs. Retrieval over
//! other schemes is left to other loaders.

use super::{GraphLoader, LoaderError};
use crate::{Graph, Literal, SourceRef, Term, Triple};
use rio_api::model::{Literal as RioLiteral, Subject, Term as RioTerm, Triple as RioTriple};
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesParser, TurtleError, TurtleParser};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Serialization formats understood by [`FileLoader`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Terse RDF Triple Language (.ttl)
    Turtle,
    /// Line-based triples (.nt)
    NTriples,
}

impl RdfFormat {
    /// Guess the format from a file extension, defaulting to Turtle
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("nt") => Self::NTriples,
            _ => Self::Turtle,
        }
    }
}

/// Loader for local RDF files
#[derive(Debug, Clone, Default)]
pub struct FileLoader {
    format: Option<RdfFormat>,
}

impl FileLoader {
    /// Create a loader that picks the format from the file extension
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader that always parses as `format`
    pub fn with_format(format: RdfFormat) -> Self {
        Self {
            format: Some(format),
        }
    }

    /// Parse a document from `reader`, resolving relative IRIs against `base`
    pub fn parse<R: BufRead>(
        reader: R,
        format: RdfFormat,
        base: &str,
    ) -> Result<Graph, LoaderError> {
        let parse_error = |message: String| LoaderError::Parse {
            iri: base.to_string(),
            message,
        };

        let mut graph = Graph::new();
        let mut on_triple = |t: RioTriple<'_>| -> Result<(), ParseFailure> {
            graph.insert(convert_triple(t)?);
            Ok(())
        };

        let outcome = match format {
            RdfFormat::Turtle => {
                let base_iri = oxiri::Iri::parse(base.to_string())
                    .map_err(|e| parse_error(format!("bad base IRI: {}", e)))?;
                TurtleParser::new(reader, Some(base_iri)).parse_all(&mut on_triple)
            }
            RdfFormat::NTriples => NTriplesParser::new(reader).parse_all(&mut on_triple),
        };

        match outcome {
            Ok(()) => Ok(graph),
            Err(ParseFailure::Syntax(e)) => Err(parse_error(e.to_string())),
            Err(ParseFailure::Term(msg)) => Err(parse_error(msg)),
        }
    }
}

impl GraphLoader for FileLoader {
    type Error = LoaderError;

    fn load(&self, source: &SourceRef) -> Result<Graph, LoaderError> {
        let path = source
            .file_path()
            .ok_or_else(|| LoaderError::UnsupportedScheme {
                scheme: source.scheme().to_string(),
                iri: source.iri().to_string(),
            })?;

        let file = File::open(&path).map_err(|e| LoaderError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let format = self.format.unwrap_or_else(|| RdfFormat::from_path(&path));
        log::debug!("Parsing {} as {:?}", path.display(), format);
        Self::parse(BufReader::new(file), format, source.iri())
    }
}

enum ParseFailure {
    Syntax(TurtleError),
    Term(String),
}

impl From<TurtleError> for ParseFailure {
    fn from(e: TurtleError) -> Self {
        Self::Syntax(e)
    }
}

fn convert_triple(t: RioTriple<'_>) -> Result<Triple, ParseFailure> {
    let subject = match t.subject {
        Subject::NamedNode(n) => Term::iri(n.iri),
        Subject::BlankNode(b) => Term::blank(b.id),
        #[allow(unreachable_patterns)]
        other => return Err(ParseFailure::Term(format!("unsupported subject {}", other))),
    };
    let predicate = Term::iri(t.predicate.iri);
    let object = match t.object {
        RioTerm::NamedNode(n) => Term::iri(n.iri),
        RioTerm::BlankNode(b) => Term::blank(b.id),
        RioTerm::Literal(RioLiteral::Simple { value }) => Term::literal(value),
        RioTerm::Literal(RioLiteral::LanguageTaggedString { value, language }) => {
            Term::Literal(Literal::lang(value, language))
        }
        RioTerm::Literal(RioLiteral::Typed { value, datatype }) => {
            Term::Literal(Literal::typed(value, datatype.iri))
        }
        #[allow(unreachable_patterns)]
        other => return Err(ParseFailure::Term(format!("unsupported object {}", other))),
    };
    Triple::new(subject, predicate, object).map_err(|e| ParseFailure::Term(e.to_string()))
}

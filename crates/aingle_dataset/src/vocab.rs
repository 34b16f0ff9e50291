//! Well-known IRIs used when composing and assembling datasets.

/// Standard RDF namespace
pub const PREFIX_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// XML Schema datatypes namespace
pub const PREFIX_XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// Assembler vocabulary namespace
pub const PREFIX_JA: &str = "http://jena.hpl.hp.com/2005/11/Assembler#";

/// `rdf:type`
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// `xsd:string`, the datatype of plain string literals.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Assembler vocabulary for dataset descriptions.
pub mod ja {
    /// Class of resources describing an in-memory RDF dataset.
    pub const RDF_DATASET: &str = "http://jena.hpl.hp.com/2005/11/Assembler#RDFDataset";
    /// Links a dataset description to a graph merged into its default graph.
    pub const DEFAULT_GRAPH: &str = "http://jena.hpl.hp.com/2005/11/Assembler#defaultGraph";
    /// Links a dataset description to a named-graph description.
    pub const NAMED_GRAPH: &str = "http://jena.hpl.hp.com/2005/11/Assembler#namedGraph";
    /// The name of a named-graph description.
    pub const GRAPH_NAME: &str = "http://jena.hpl.hp.com/2005/11/Assembler#graphName";
    /// The graph of a named-graph description.
    pub const GRAPH: &str = "http://jena.hpl.hp.com/2005/11/Assembler#graph";
    /// Links a graph (or content) description to a source locator.
    pub const EXTERNAL_CONTENT: &str = "http://jena.hpl.hp.com/2005/11/Assembler#externalContent";
    /// Links a graph description to a content description.
    pub const CONTENT: &str = "http://jena.hpl.hp.com/2005/11/Assembler#content";
}

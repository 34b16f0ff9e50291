//! Source locators and their resolution to IRIs.
//!
//! A locator is whatever the caller wrote: an absolute IRI, an IRI relative
//! to a base, or a filesystem path. Resolution rules:
//!
//! 1. a locator with a scheme is an absolute IRI and is kept as written;
//! 2. with a base IRI, a relative locator is resolved against it (RFC 3987);
//! 3. without a base, the locator is a path, made absolute against the
//!    current directory and turned into a `file:` IRI.
//!
//! A one-letter scheme is a drive letter (`C:\data\g.ttl`), so such
//! locators are paths.

use crate::{Error, Result};
use oxiri::Iri;
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// A source locator together with the IRI it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceRef {
    locator: String,
    iri: String,
}

impl SourceRef {
    /// Resolves `locator`, optionally against `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use aingle_dataset::SourceRef;
    ///
    /// let src = SourceRef::resolve("data/g1.ttl", Some("http://example.org/base/"))?;
    /// assert_eq!(src.iri(), "http://example.org/base/data/g1.ttl");
    /// assert_eq!(src.locator(), "data/g1.ttl");
    ///
    /// let abs = SourceRef::resolve("http://example.org/café", None)?;
    /// assert_eq!(abs.iri(), "http://example.org/café");
    /// # Ok::<(), aingle_dataset::Error>(())
    /// ```
    pub fn resolve(locator: &str, base: Option<&str>) -> Result<Self> {
        let iri = resolve_iri(locator, base).map_err(|e| Error::load(locator, e))?;
        Ok(Self {
            locator: locator.to_string(),
            iri,
        })
    }

    /// The locator as written by the caller.
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// The resolved IRI.
    pub fn iri(&self) -> &str {
        &self.iri
    }

    /// The scheme of the resolved IRI, e.g. `http` or `file`.
    pub fn scheme(&self) -> &str {
        scheme_of(&self.iri).unwrap_or_default()
    }

    /// Returns the filesystem path for `file:` IRIs.
    pub fn file_path(&self) -> Option<PathBuf> {
        if !self.scheme().eq_ignore_ascii_case("file") {
            return None;
        }
        Url::parse(&self.iri).ok()?.to_file_path().ok()
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

fn resolve_iri(locator: &str, base: Option<&str>) -> std::result::Result<String, String> {
    match scheme_of(locator) {
        Some(scheme) if scheme.len() == 1 => file_iri(locator),
        Some(_) => Iri::parse(locator)
            .map(|_| locator.to_string())
            .map_err(|e| format!("bad IRI: {}", e)),
        None => match base {
            Some(base) => {
                let base = Iri::parse(base).map_err(|e| format!("bad base IRI <{}>: {}", base, e))?;
                base.resolve(locator)
                    .map(|iri| iri.as_str().to_string())
                    .map_err(|e| format!("cannot resolve against <{}>: {}", base.as_str(), e))
            }
            None => file_iri(locator),
        },
    }
}

/// The RFC 3986 scheme of `s`, if it starts with one.
fn scheme_of(s: &str) -> Option<&str> {
    let (scheme, _) = s.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

fn file_iri(path: &str) -> std::result::Result<String, String> {
    let path = Path::new(path);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| format!("no current directory: {}", e))?
            .join(path)
    };
    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|_| format!("not a usable path: {}", absolute.display()))
}

//! The route table: an ordered, validated sequence of descriptors.

use thiserror::Error;

use crate::descriptor::RouteDescriptor;
use crate::Routable;

/// Rejected table shapes, reported at construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("duplicate route path `{0}`")]
    DuplicatePath(&'static str),
    #[error("duplicate route name `{0}`")]
    DuplicateName(&'static str),
    #[error("route pattern `{0}` must begin with `/`")]
    InvalidPattern(&'static str),
}

/// Lookup failures against a valid table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("no route matches path `{0}`")]
    NoMatch(String),
    #[error("no route named `{0}`")]
    UnknownName(String),
}

/// An ordered sequence of [`RouteDescriptor`] entries.
///
/// Built once at startup and immutable afterwards. Paths and names are
/// unique; matching is first-match-wins in declaration order.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Validates and assembles a table from descriptors in order.
    pub fn new(entries: impl IntoIterator<Item = RouteDescriptor>) -> Result<Self, TableError> {
        let entries: Vec<RouteDescriptor> = entries.into_iter().collect();
        for (i, entry) in entries.iter().enumerate() {
            if !entry.path().starts_with('/') {
                return Err(TableError::InvalidPattern(entry.path()));
            }
            for earlier in &entries[..i] {
                if earlier.path() == entry.path() {
                    return Err(TableError::DuplicatePath(entry.path()));
                }
                if earlier.name() == entry.name() {
                    return Err(TableError::DuplicateName(entry.name()));
                }
            }
        }
        log::debug!("route table ready with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// The table declared by a route enum.
    pub fn of<R: Routable>() -> Result<Self, TableError> {
        Self::new(R::ROUTES.iter().copied())
    }

    /// First entry whose pattern matches `path`. Query and fragment parts
    /// of `path` are ignored.
    pub fn recognize(&self, path: &str) -> Option<&RouteDescriptor> {
        let bare = match path.find(|c| c == '?' || c == '#') {
            Some(idx) => &path[..idx],
            None => path,
        };
        self.entries.iter().find(|entry| entry.matches(bare))
    }

    /// The pattern registered under a symbolic name.
    pub fn path_for(&self, name: &str) -> Result<&'static str, MatchError> {
        self.entries
            .iter()
            .find(|entry| entry.name() == name)
            .map(RouteDescriptor::path)
            .ok_or_else(|| MatchError::UnknownName(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

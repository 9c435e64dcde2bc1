//! The relation-metadata seam between the encoder and its host.
//!
//! The replication engine that drives the encoder owns the catalog; the
//! encoder only queries it. [`FixedCatalog`] is an in-memory implementation
//! for embedding hosts and tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::{Error, Result};

/// A resolved publication: its stable identifier and whether it covers
/// every relation or only an explicit membership list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Publication {
    pub id: u32,
    pub all_tables: bool,
}

/// Catalog lookups the encoder performs while framing a change.
///
/// Implementations may answer differently between calls (publications can
/// gain and lose members mid-session); the encoder never caches membership
/// answers, only the publication resolution itself.
pub trait Catalog {
    /// Resolves a publication name to its identifier and all-tables flag.
    fn resolve_publication(&self, name: &str) -> Result<Publication>;

    /// Whether the relation is an explicit member of the publication.
    fn is_member(&self, relation_id: u32, publication_id: u32) -> Result<bool>;

    /// The schema name the relation lives in.
    fn namespace_of(&self, relation_id: u32) -> Result<String>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn resolve_publication(&self, name: &str) -> Result<Publication> {
        (**self).resolve_publication(name)
    }

    fn is_member(&self, relation_id: u32, publication_id: u32) -> Result<bool> {
        (**self).is_member(relation_id, publication_id)
    }

    fn namespace_of(&self, relation_id: u32) -> Result<String> {
        (**self).namespace_of(relation_id)
    }
}

/// An in-memory catalog.
///
/// Membership uses interior mutability so a host holding the catalog by
/// shared reference can add and remove members while an encoding session
/// borrows it; the encoder itself is single-threaded, so no locking is
/// involved.
#[derive(Debug, Default)]
pub struct FixedCatalog {
    publications: HashMap<String, Publication>,
    members: RefCell<HashSet<(u32, u32)>>,
    namespaces: HashMap<u32, String>,
}

impl FixedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_publication(&mut self, name: &str, id: u32, all_tables: bool) {
        self.publications
            .insert(name.to_string(), Publication { id, all_tables });
    }

    pub fn add_namespace(&mut self, relation_id: u32, namespace: &str) {
        self.namespaces.insert(relation_id, namespace.to_string());
    }

    pub fn add_member(&self, relation_id: u32, publication_id: u32) {
        self.members.borrow_mut().insert((relation_id, publication_id));
    }

    pub fn remove_member(&self, relation_id: u32, publication_id: u32) {
        self.members.borrow_mut().remove(&(relation_id, publication_id));
    }
}

impl Catalog for FixedCatalog {
    fn resolve_publication(&self, name: &str) -> Result<Publication> {
        self.publications
            .get(name)
            .copied()
            .ok_or_else(|| Error::Catalog(format!("publication \"{}\" does not exist", name)))
    }

    fn is_member(&self, relation_id: u32, publication_id: u32) -> Result<bool> {
        Ok(self
            .members
            .borrow()
            .contains(&(relation_id, publication_id)))
    }

    fn namespace_of(&self, relation_id: u32) -> Result<String> {
        self.namespaces
            .get(&relation_id)
            .cloned()
            .ok_or_else(|| Error::Catalog(format!("no namespace for relation {}", relation_id)))
    }
}

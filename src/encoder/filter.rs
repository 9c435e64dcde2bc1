use tracing::debug;

use crate::catalog::{Catalog, Publication};
use crate::{Error, Result};

/// Gates row changes on publication visibility.
///
/// The publication is resolved on first use and memoized for the session.
/// Membership is looked up fresh on every call; it can change while the
/// session is running.
#[derive(Debug)]
pub(crate) struct PublicationFilter {
    publication: Option<String>,
    scope: Option<Publication>,
}

impl PublicationFilter {
    pub fn new(publication: Option<String>) -> Self {
        Self {
            publication,
            scope: None,
        }
    }

    pub fn is_visible(&mut self, catalog: &impl Catalog, relation_id: u32) -> Result<bool> {
        let scope = self.resolve(catalog)?;
        if scope.all_tables {
            return Ok(true);
        }
        catalog.is_member(relation_id, scope.id)
    }

    fn resolve(&mut self, catalog: &impl Catalog) -> Result<Publication> {
        if let Some(scope) = self.scope {
            return Ok(scope);
        }
        let name = self
            .publication
            .as_deref()
            .ok_or_else(|| Error::Config("publication parameter missing".to_string()))?;
        let scope = catalog.resolve_publication(name)?;
        debug!(
            publication = name,
            id = scope.id,
            all_tables = scope.all_tables,
            "resolved publication"
        );
        self.scope = Some(scope);
        Ok(scope)
    }
}

//! Generic CRUD over the in-memory store. Store misses become typed `NotFound` errors here.

use crate::error::AppError;
use crate::resource::ResourceKind;
use crate::store::{Fields, Record, ResourceStore};

pub struct CrudService;

impl CrudService {
    /// Every record of `kind`, in creation order.
    pub fn list(store: &ResourceStore, kind: ResourceKind) -> Result<Vec<Record>, AppError> {
        let rows = store.list(kind)?;
        tracing::debug!(%kind, count = rows.len(), "list");
        Ok(rows)
    }

    pub fn read(store: &ResourceStore, kind: ResourceKind, id: u64) -> Result<Record, AppError> {
        let row = store.get(kind, id)?.ok_or_else(|| AppError::not_found(kind))?;
        tracing::debug!(%kind, id, "read");
        Ok(row)
    }

    /// Insert one record. Any `id` in `fields` is ignored; the store assigns it.
    pub fn create(store: &ResourceStore, kind: ResourceKind, fields: Fields) -> Result<Record, AppError> {
        let row = store.create(kind, fields)?;
        tracing::info!(%kind, id = row.id, "created");
        Ok(row)
    }

    /// Shallow-merge `fields` into the record with `id`. Returns the merged record.
    pub fn update(
        store: &ResourceStore,
        kind: ResourceKind,
        id: u64,
        fields: Fields,
    ) -> Result<Record, AppError> {
        let keys: Vec<String> = fields.keys().cloned().collect();
        let row = store
            .update(kind, id, fields)?
            .ok_or_else(|| AppError::not_found(kind))?;
        tracing::info!(%kind, id, ?keys, "updated");
        Ok(row)
    }

    /// Remove the record with `id`. Returns the removed record.
    pub fn delete(store: &ResourceStore, kind: ResourceKind, id: u64) -> Result<Record, AppError> {
        let row = store.delete(kind, id)?.ok_or_else(|| AppError::not_found(kind))?;
        tracing::info!(%kind, id, "deleted");
        Ok(row)
    }

    pub fn seed(store: &ResourceStore, kind: ResourceKind, items: Vec<Fields>) -> Result<usize, AppError> {
        let count = store.seed(kind, items)?;
        tracing::info!(%kind, count, "seeded");
        Ok(count)
    }
}

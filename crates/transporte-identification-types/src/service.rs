//! Identification-type service implementation.

use std::sync::Arc;

use tracing::info;

use crate::errors::{IdentificationTypeError, Result};
use crate::store::IdentificationTypeStore;
use crate::types::IdentificationType;

/// Request-scoped access to the identification-type table.
///
/// Holds no state between requests; every operation re-reads from the
/// store. Operations may run concurrently against the same table.
pub struct IdentificationTypeService<S: IdentificationTypeStore> {
    store: Arc<S>,
}

impl<S: IdentificationTypeStore> IdentificationTypeService<S> {
    /// Create a new service over the given store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List every identification type currently in the store.
    ///
    /// Order is whatever the store returns; callers must not rely on it.
    pub async fn list_all(&self) -> Result<Vec<IdentificationType>> {
        Ok(self.store.list().await?)
    }

    /// Fetch one identification type by id
    pub async fn get_by_id(&self, id: i64) -> Result<IdentificationType> {
        self.store
            .find(id)
            .await?
            .ok_or(IdentificationTypeError::NotFound(id))
    }

    /// Rename an identification type.
    ///
    /// The new name must be non-empty after trimming; a failed check
    /// leaves the store untouched. A write landing on a row deleted
    /// since the existence check reports `NotFound`; a write that
    /// misses while the row still exists reports `Conflict` and is
    /// never silently swallowed.
    pub async fn update_name(&self, id: i64, new_name: &str) -> Result<IdentificationType> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(IdentificationTypeError::Validation {
                field: "name",
                message: "name is required".to_string(),
            });
        }

        self.get_by_id(id).await?;

        let affected = self.store.update_name(id, name).await?;
        if affected == 0 {
            if self.store.exists(id).await? {
                return Err(IdentificationTypeError::Conflict(id));
            }
            return Err(IdentificationTypeError::NotFound(id));
        }

        info!("Identification type {} renamed to {:?}", id, name);
        Ok(IdentificationType {
            id,
            name: name.to_string(),
        })
    }

    /// Delete an identification type permanently.
    ///
    /// Deleting twice yields success then `NotFound`; the second call
    /// is not an error state, just a missing row.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.get_by_id(id).await?;

        let affected = self.store.delete(id).await?;
        if affected == 0 {
            return Err(IdentificationTypeError::NotFound(id));
        }

        info!("Identification type {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use crate::store::mocks::MemoryStore;
    use std::collections::BTreeSet;
    use std::sync::atomic::Ordering;

    fn service_with(
        rows: &[(i64, &str)],
    ) -> (IdentificationTypeService<MemoryStore>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::with_rows(rows));
        (IdentificationTypeService::new(store.clone()), store)
    }

    fn as_set(rows: Vec<IdentificationType>) -> BTreeSet<(i64, String)> {
        rows.into_iter().map(|t| (t.id, t.name)).collect()
    }

    #[tokio::test]
    async fn missing_ids_report_not_found() {
        let (service, _) = service_with(&[(1, "Cédula")]);

        for missing in [0, 2, 99, -5] {
            assert!(matches!(
                service.get_by_id(missing).await,
                Err(IdentificationTypeError::NotFound(id)) if id == missing
            ));
            assert!(matches!(
                service.update_name(missing, "X").await,
                Err(IdentificationTypeError::NotFound(id)) if id == missing
            ));
            assert!(matches!(
                service.delete(missing).await,
                Err(IdentificationTypeError::NotFound(id)) if id == missing
            ));
        }
    }

    #[tokio::test]
    async fn list_all_returns_exactly_the_stored_rows() {
        let (service, _) = service_with(&[(1, "Cédula"), (2, "Pasaporte"), (7, "NIT")]);

        let listed = as_set(service.list_all().await.unwrap());
        let expected: BTreeSet<_> = [
            (1, "Cédula".to_string()),
            (2, "Pasaporte".to_string()),
            (7, "NIT".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn empty_name_fails_validation_and_never_mutates() {
        let (service, store) = service_with(&[(1, "Cédula")]);
        let before = store.snapshot();

        for bad in ["", "   ", "\t\n"] {
            let err = service.update_name(1, bad).await.unwrap_err();
            match err {
                IdentificationTypeError::Validation { field, .. } => assert_eq!(field, "name"),
                other => panic!("expected validation failure, got {:?}", other),
            }
        }

        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn rename_round_trips_through_the_store() {
        let (service, _) = service_with(&[(1, "Cedula")]);

        let updated = service.update_name(1, "Cédula de Ciudadanía").await.unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Cédula de Ciudadanía");

        let fetched = service.get_by_id(1).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn delete_is_permanent_and_second_delete_reports_not_found() {
        let (service, _) = service_with(&[(1, "Cédula")]);

        service.delete(1).await.unwrap();
        assert!(matches!(
            service.get_by_id(1).await,
            Err(IdentificationTypeError::NotFound(1))
        ));
        assert!(matches!(
            service.delete(1).await,
            Err(IdentificationTypeError::NotFound(1))
        ));
    }

    #[tokio::test]
    async fn swallowed_write_on_surviving_row_reports_conflict() {
        let (service, store) = service_with(&[(1, "Cédula")]);
        store.swallow_writes.store(true, Ordering::SeqCst);

        assert!(matches!(
            service.update_name(1, "Pasaporte").await,
            Err(IdentificationTypeError::Conflict(1))
        ));
    }

    #[tokio::test]
    async fn write_racing_a_delete_downgrades_to_not_found() {
        let (service, store) = service_with(&[(1, "Cédula")]);
        store.vanish_before_write.store(true, Ordering::SeqCst);

        assert!(matches!(
            service.update_name(1, "Pasaporte").await,
            Err(IdentificationTypeError::NotFound(1))
        ));
    }

    #[tokio::test]
    async fn store_faults_propagate_as_store_errors() {
        let (service, store) = service_with(&[(1, "Cédula")]);
        store.unavailable.store(true, Ordering::SeqCst);

        assert!(matches!(
            service.list_all().await,
            Err(IdentificationTypeError::Store(StoreError::Unavailable(_)))
        ));
        assert!(matches!(
            service.get_by_id(1).await,
            Err(IdentificationTypeError::Store(StoreError::Unavailable(_)))
        ));
    }

    #[tokio::test]
    async fn reference_data_lifecycle_scenario() {
        let (service, _) = service_with(&[(1, "Cédula"), (2, "Pasaporte")]);

        let listed = as_set(service.list_all().await.unwrap());
        let expected: BTreeSet<_> = [(1, "Cédula".to_string()), (2, "Pasaporte".to_string())]
            .into_iter()
            .collect();
        assert_eq!(listed, expected);

        service.update_name(1, "Cedula").await.unwrap();
        assert_eq!(
            service.get_by_id(1).await.unwrap(),
            IdentificationType {
                id: 1,
                name: "Cedula".to_string()
            }
        );

        service.delete(2).await.unwrap();
        let listed = as_set(service.list_all().await.unwrap());
        let expected: BTreeSet<_> = [(1, "Cedula".to_string())].into_iter().collect();
        assert_eq!(listed, expected);

        assert!(matches!(
            service.get_by_id(2).await,
            Err(IdentificationTypeError::NotFound(2))
        ));
        assert!(matches!(
            service.update_name(99, "X").await,
            Err(IdentificationTypeError::NotFound(99))
        ));
    }
}

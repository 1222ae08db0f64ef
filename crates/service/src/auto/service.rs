use std::sync::Arc;

use models::auto;
use tracing::{debug, info, instrument};

use super::domain::{AutoConSede, AutoInput, SaveOutcome};
use super::repository::AutoRepository;
use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};

/// Trim a raw search term; `None` when nothing is left to search for.
pub fn normalize_search_term(raw: &str) -> Option<&str> {
    let term = raw.trim();
    (!term.is_empty()).then_some(term)
}

/// Orchestration over the Auto store, independent of the web framework.
pub struct AutoService<R: AutoRepository> {
    repo: Arc<R>,
}

impl<R: AutoRepository> AutoService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<auto::Model>, ServiceError> { self.repo.list_all().await }

    pub async fn list_paged(&self, req: PageRequest) -> Result<Page<auto::Model>, ServiceError> {
        self.repo.list_all_paged(req).await
    }

    pub async fn list_with_sede(&self) -> Result<Vec<AutoConSede>, ServiceError> {
        Ok(self.repo.list_with_sede().await?.into_iter().map(AutoConSede::from).collect())
    }

    pub async fn find(&self, id: i32) -> Result<Option<auto::Model>, ServiceError> { self.repo.find_by_id(id).await }

    /// Upsert; the reported outcome depends only on whether the input carries an id.
    ///
    /// # Examples
    /// ```
    /// use service::auto::{AutoService, domain::{AutoInput, SaveOutcome}, repository::mock::MockAutoRepository};
    /// use std::sync::Arc;
    /// let svc = AutoService::new(Arc::new(MockAutoRepository::default()));
    /// let input = AutoInput { id_auto: None, modelo: "Corolla".into(), color: "Rojo".into(), placa: "ABC-123".into(), sede_id: None };
    /// let (created, outcome) = tokio_test::block_on(svc.save(input)).unwrap();
    /// assert_eq!(outcome, SaveOutcome::Created);
    /// assert_eq!(created.id_auto, 1);
    /// ```
    #[instrument(skip(self, input), fields(id_auto = ?input.id_auto))]
    pub async fn save(&self, input: AutoInput) -> Result<(auto::Model, SaveOutcome), ServiceError> {
        let outcome = SaveOutcome::for_input(&input);
        let saved = self.repo.save(input).await?;
        info!(id_auto = saved.id_auto, ?outcome, "auto_saved");
        Ok((saved, outcome))
    }

    /// Delete by id; `false` when there was nothing to delete.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete_by_id(id).await?;
        if deleted {
            info!(id_auto = id, "auto_deleted");
        } else {
            debug!(id_auto = id, "delete of missing auto ignored");
        }
        Ok(deleted)
    }

    /// Search by term; a blank term yields `None` and never reaches the store.
    ///
    /// # Examples
    /// ```
    /// use service::auto::{AutoService, repository::mock::MockAutoRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAutoRepository::default());
    /// let svc = AutoService::new(repo.clone());
    /// assert!(tokio_test::block_on(svc.search("   ")).unwrap().is_none());
    /// assert_eq!(repo.calls(), 0);
    /// ```
    #[instrument(skip(self))]
    pub async fn search(&self, raw_term: &str) -> Result<Option<Vec<auto::Model>>, ServiceError> {
        let Some(term) = normalize_search_term(raw_term) else { return Ok(None) };
        let found = self.repo.search_multicriteria(term).await?;
        debug!(term, count = found.len(), "auto search");
        Ok(Some(found))
    }
}

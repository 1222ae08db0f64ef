use async_trait::async_trait;
use models::{auto, sede};

use super::domain::AutoInput;
use crate::{errors::ServiceError, pagination::{Page, PageRequest}};

/// Repository abstraction for the Auto store.
#[async_trait]
pub trait AutoRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<auto::Model>, ServiceError>;
    async fn list_all_paged(&self, req: PageRequest) -> Result<Page<auto::Model>, ServiceError>;
    async fn list_with_sede(&self) -> Result<Vec<(auto::Model, sede::Model)>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<auto::Model>, ServiceError>;
    async fn save(&self, input: AutoInput) -> Result<auto::Model, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    async fn search_multicriteria(&self, term: &str) -> Result<Vec<auto::Model>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAutoRepository {
        autos: Mutex<BTreeMap<i32, auto::Model>>,
        sedes: Mutex<BTreeMap<i32, sede::Model>>,
        last_id: Mutex<i32>,
        calls: AtomicUsize,
    }

    impl MockAutoRepository {
        pub fn with_sedes(sedes: impl IntoIterator<Item = sede::Model>) -> Self {
            let repo = Self::default();
            repo.sedes.lock().unwrap().extend(sedes.into_iter().map(|s| (s.id_sede, s)));
            repo
        }

        /// Number of repository calls made so far.
        pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

        fn hit(&self) { self.calls.fetch_add(1, Ordering::SeqCst); }
    }

    #[async_trait]
    impl AutoRepository for MockAutoRepository {
        async fn list_all(&self) -> Result<Vec<auto::Model>, ServiceError> {
            self.hit();
            Ok(self.autos.lock().unwrap().values().cloned().collect())
        }

        async fn list_all_paged(&self, req: PageRequest) -> Result<Page<auto::Model>, ServiceError> {
            self.hit();
            let (page, size) = req.normalize();
            let autos = self.autos.lock().unwrap();
            let skip = usize::try_from(page.saturating_mul(size)).unwrap_or(usize::MAX);
            let items = autos.values().skip(skip).take(size as usize).cloned().collect();
            Ok(Page::new(items, page, size, autos.len() as u64))
        }

        async fn list_with_sede(&self) -> Result<Vec<(auto::Model, sede::Model)>, ServiceError> {
            self.hit();
            let autos = self.autos.lock().unwrap();
            let sedes = self.sedes.lock().unwrap();
            Ok(autos
                .values()
                .filter_map(|a| a.sede_id.and_then(|id| sedes.get(&id)).map(|s| (a.clone(), s.clone())))
                .collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<auto::Model>, ServiceError> {
            self.hit();
            Ok(self.autos.lock().unwrap().get(&id).cloned())
        }

        async fn save(&self, input: AutoInput) -> Result<auto::Model, ServiceError> {
            self.hit();
            if let Some(sede_id) = input.sede_id {
                if !self.sedes.lock().unwrap().contains_key(&sede_id) {
                    return Err(ServiceError::Validation(format!("sede {} not found", sede_id)));
                }
            }
            let mut autos = self.autos.lock().unwrap();
            let id = match input.id_auto {
                Some(id) if autos.contains_key(&id) => id,
                // unknown ids are inserted under a fresh id, like the SeaORM store
                _ => {
                    let mut last = self.last_id.lock().unwrap();
                    *last += 1;
                    *last
                }
            };
            let model = auto::Model { id_auto: id, modelo: input.modelo, color: input.color, placa: input.placa, sede_id: input.sede_id };
            autos.insert(id, model.clone());
            Ok(model)
        }

        async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
            self.hit();
            Ok(self.autos.lock().unwrap().remove(&id).is_some())
        }

        async fn search_multicriteria(&self, term: &str) -> Result<Vec<auto::Model>, ServiceError> {
            self.hit();
            let needle = term.to_lowercase();
            let autos = self.autos.lock().unwrap();
            let sedes = self.sedes.lock().unwrap();
            Ok(autos
                .values()
                .filter(|a| {
                    let direccion = a.sede_id.and_then(|id| sedes.get(&id)).map(|s| s.direccion.to_lowercase());
                    a.modelo.to_lowercase().contains(&needle)
                        || a.color.to_lowercase().contains(&needle)
                        || direccion.is_some_and(|d| d.contains(&needle))
                })
                .cloned()
                .collect())
        }
    }
}

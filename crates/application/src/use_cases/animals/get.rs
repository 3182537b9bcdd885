use crate::repository::CachedRepository;
use corral_domain::{Animal, DomainError};
use std::sync::Arc;
use tracing::instrument;

pub struct GetAnimalUseCase {
    animals: Arc<CachedRepository<Animal>>,
}

impl GetAnimalUseCase {
    pub fn new(animals: Arc<CachedRepository<Animal>>) -> Self {
        Self { animals }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: &str) -> Result<Animal, DomainError> {
        self.animals.fetch(id).await
    }
}

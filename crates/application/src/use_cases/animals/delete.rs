use crate::repository::CachedRepository;
use corral_domain::{validate_if_match, Animal, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct DeleteAnimalUseCase {
    animals: Arc<CachedRepository<Animal>>,
}

impl DeleteAnimalUseCase {
    pub fn new(animals: Arc<CachedRepository<Animal>>) -> Self {
        Self { animals }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: &str, if_match: Option<&str>) -> Result<(), DomainError> {
        let existing = self.animals.fetch(id).await?;
        validate_if_match(existing.version, if_match)?;

        self.animals.delete(id).await?;
        info!(animal_id = %id, "Animal deleted");
        Ok(())
    }
}

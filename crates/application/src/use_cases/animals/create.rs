use crate::ports::IdempotencyStore;
use crate::repository::CachedRepository;
use crate::use_cases::idempotency::register_key;
use chrono::NaiveDate;
use corral_domain::{Animal, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct CreateAnimalUseCase {
    animals: Arc<CachedRepository<Animal>>,
    idempotency: Arc<dyn IdempotencyStore>,
}

impl CreateAnimalUseCase {
    pub fn new(
        animals: Arc<CachedRepository<Animal>>,
        idempotency: Arc<dyn IdempotencyStore>,
    ) -> Self {
        Self {
            animals,
            idempotency,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        title: String,
        located: Option<NaiveDate>,
        idempotency_key: &str,
    ) -> Result<Animal, DomainError> {
        Animal::validate_title(&title)?;
        register_key(self.idempotency.as_ref(), idempotency_key).await?;

        let animal = Animal::new(title, located);
        let saved = self.animals.save(&animal).await?;

        info!(animal_id = %saved.id, "Animal created");
        Ok(saved)
    }
}

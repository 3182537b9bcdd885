use crate::repository::CachedRepository;
use chrono::NaiveDate;
use corral_domain::{validate_if_match, Animal, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct UpdateAnimalUseCase {
    animals: Arc<CachedRepository<Animal>>,
}

impl UpdateAnimalUseCase {
    pub fn new(animals: Arc<CachedRepository<Animal>>) -> Self {
        Self { animals }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        id: &str,
        title: Option<String>,
        located: Option<NaiveDate>,
        if_match: Option<&str>,
    ) -> Result<Animal, DomainError> {
        let mut existing = self.animals.fetch(id).await?;
        validate_if_match(existing.version, if_match)?;

        if let Some(title) = title {
            Animal::validate_title(&title)?;
            existing.title = title;
        }
        if let Some(located) = located {
            existing.located = Some(located);
        }

        let saved = self.animals.save(&existing).await?;
        info!(animal_id = %saved.id, version = saved.version, "Animal updated");
        Ok(saved)
    }
}

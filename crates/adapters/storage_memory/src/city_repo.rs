//! City repository over the shared in-memory store.

use cityinfo_app::ports::CityRepository;
use cityinfo_domain::city::City;
use cityinfo_domain::error::CityInfoError;
use cityinfo_domain::id::CityId;

use crate::MemoryStore;

/// Read-only city access backed by [`MemoryStore`].
#[derive(Clone)]
pub struct MemoryCityRepository {
    store: MemoryStore,
}

impl MemoryCityRepository {
    /// Create a repository handle onto the given store.
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

impl CityRepository for MemoryCityRepository {
    async fn get_all(&self) -> Result<Vec<City>, CityInfoError> {
        Ok(self.store.read()?.clone())
    }

    async fn get_by_id(&self, id: CityId) -> Result<Option<City>, CityInfoError> {
        Ok(self.store.read()?.iter().find(|c| c.id == id).cloned())
    }

    async fn exists(&self, id: CityId) -> Result<bool, CityInfoError> {
        Ok(self.store.read()?.iter().any(|c| c.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_find_seeded_city_by_id() {
        let repo = MemoryStore::seeded().city_repository();

        let city = repo.get_by_id(CityId::new(2)).await.unwrap().unwrap();
        assert_eq!(city.name, "Antwerp");
        assert!(repo.exists(CityId::new(2)).await.unwrap());
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_city() {
        let repo = MemoryStore::seeded().city_repository();

        assert!(repo.get_by_id(CityId::new(99)).await.unwrap().is_none());
        assert!(!repo.exists(CityId::new(99)).await.unwrap());
    }

    #[tokio::test]
    async fn should_list_cities_in_stable_order() {
        let repo = MemoryStore::seeded().city_repository();

        let names: Vec<_> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["New York City", "Antwerp", "Paris"]);
    }
}

//! Point-of-interest repository over the shared in-memory store.

use cityinfo_app::ports::PointOfInterestRepository;
use cityinfo_domain::error::CityInfoError;
use cityinfo_domain::id::{CityId, PoiId};
use cityinfo_domain::point_of_interest::{PointOfInterest, PointOfInterestDraft};

use crate::MemoryStore;

/// Point-of-interest CRUD backed by [`MemoryStore`].
///
/// Every mutation takes the store's write lock once for the whole
/// lookup-and-mutate step, so id assignment and in-place edits are atomic
/// with respect to concurrent requests.
#[derive(Clone)]
pub struct MemoryPointOfInterestRepository {
    store: MemoryStore,
}

impl MemoryPointOfInterestRepository {
    /// Create a repository handle onto the given store.
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

impl PointOfInterestRepository for MemoryPointOfInterestRepository {
    async fn get_all(
        &self,
        city_id: CityId,
    ) -> Result<Option<Vec<PointOfInterest>>, CityInfoError> {
        Ok(self
            .store
            .read()?
            .iter()
            .find(|c| c.id == city_id)
            .map(|c| c.points_of_interest.clone()))
    }

    async fn get_by_id(
        &self,
        city_id: CityId,
        id: PoiId,
    ) -> Result<Option<PointOfInterest>, CityInfoError> {
        Ok(self
            .store
            .read()?
            .iter()
            .find(|c| c.id == city_id)
            .and_then(|c| c.point_of_interest(id).cloned()))
    }

    async fn create(
        &self,
        city_id: CityId,
        draft: PointOfInterestDraft,
    ) -> Result<Option<PointOfInterest>, CityInfoError> {
        let mut cities = self.store.write()?;

        // Ids come from a single global sequence across all cities.
        let next_id = cities
            .iter()
            .flat_map(|c| &c.points_of_interest)
            .map(|p| p.id)
            .max()
            .map_or(PoiId::new(1), PoiId::next);

        Ok(cities.iter_mut().find(|c| c.id == city_id).map(|city| {
            let poi = PointOfInterest {
                id: next_id,
                name: draft.name,
                description: draft.description,
            };
            city.points_of_interest.push(poi.clone());
            poi
        }))
    }

    async fn update(
        &self,
        city_id: CityId,
        id: PoiId,
        draft: PointOfInterestDraft,
    ) -> Result<Option<PointOfInterest>, CityInfoError> {
        Ok(self
            .store
            .write()?
            .iter_mut()
            .find(|c| c.id == city_id)
            .and_then(|c| c.point_of_interest_mut(id))
            .map(|poi| {
                poi.apply(draft);
                poi.clone()
            }))
    }

    async fn delete(
        &self,
        city_id: CityId,
        id: PoiId,
    ) -> Result<Option<PointOfInterest>, CityInfoError> {
        Ok(self
            .store
            .write()?
            .iter_mut()
            .find(|c| c.id == city_id)
            .and_then(|c| c.remove_point_of_interest(id)))
    }
}

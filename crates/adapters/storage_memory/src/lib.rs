//! # cityinfo-adapter-storage-memory
//!
//! In-memory storage adapter.
//!
//! A single [`MemoryStore`] holds every city behind one `RwLock` and is the
//! sole owner of synchronisation: each mutating repository method takes the
//! write lock once for the whole lookup-and-mutate step, including id
//! assignment during create. Concurrent creates therefore cannot observe
//! the same maximum id, and update/delete cannot interleave with each other.
//!
//! Both repository implementations are cheap handles onto the same shared
//! store.

mod city_repo;
mod poi_repo;

pub use city_repo::MemoryCityRepository;
pub use poi_repo::MemoryPointOfInterestRepository;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use cityinfo_domain::city::City;
use cityinfo_domain::error::{CityInfoError, StorageError};
use cityinfo_domain::id::{CityId, PoiId};
use cityinfo_domain::point_of_interest::PointOfInterest;

/// Shared, lock-guarded collection of cities.
#[derive(Clone)]
pub struct MemoryStore {
    cities: Arc<RwLock<Vec<City>>>,
}

impl MemoryStore {
    /// Create a store holding the given cities.
    #[must_use]
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities: Arc::new(RwLock::new(cities)),
        }
    }

    /// Create an empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Create a store pre-populated with the demo dataset.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_cities())
    }

    /// Repository handle for city reads.
    #[must_use]
    pub fn city_repository(&self) -> MemoryCityRepository {
        MemoryCityRepository::new(self.clone())
    }

    /// Repository handle for point-of-interest CRUD.
    #[must_use]
    pub fn point_of_interest_repository(&self) -> MemoryPointOfInterestRepository {
        MemoryPointOfInterestRepository::new(self.clone())
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Vec<City>>, CityInfoError> {
        self.cities
            .read()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()).into())
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<City>>, CityInfoError> {
        self.cities
            .write()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()).into())
    }
}

/// Demo dataset loaded at startup when seeding is enabled.
///
/// Point ids are unique across cities, matching the store's global id
/// sequence.
#[must_use]
pub fn seed_cities() -> Vec<City> {
    fn poi(id: i32, name: &str, description: &str) -> PointOfInterest {
        PointOfInterest {
            id: PoiId::new(id),
            name: name.to_string(),
            description: Some(description.to_string()),
        }
    }

    fn city(id: i32, name: &str, description: &str, points: Vec<PointOfInterest>) -> City {
        City {
            id: CityId::new(id),
            name: name.to_string(),
            description: Some(description.to_string()),
            points_of_interest: points,
        }
    }

    vec![
        city(
            1,
            "New York City",
            "The one with that big park.",
            vec![
                poi(1, "Central Park", "The most visited urban park in the United States."),
                poi(2, "Empire State Building", "A 102-story skyscraper."),
            ],
        ),
        city(
            2,
            "Antwerp",
            "The one with the cathedral that was never really finished.",
            vec![
                poi(3, "Cathedral of Our Lady", "A Gothic-style cathedral."),
                poi(4, "Antwerp Central Station", "The finest example of railway architecture in Belgium."),
            ],
        ),
        city(
            3,
            "Paris",
            "The one with that big tower.",
            vec![
                poi(5, "Eiffel Tower", "A wrought-iron lattice tower."),
                poi(6, "The Louvre", "The world's largest museum."),
            ],
        ),
    ]
}

//! In-memory planar implementation of the `HotelRepository` trait.
//!
//! The substitute backend for environments without PostGIS. A naive
//! in-memory store would compute planar distance on geodetic degrees,
//! which is not comparable to the meters the geographic engine returns,
//! so this adapter projects every stored location and every query point
//! into one configured planar reference system and indexes the projected
//! coordinates in an R-tree. Planar meters in a suitable projection agree
//! with the authoritative engine well inside the tolerances the search
//! contract needs.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use stayfinder_core::domain::{GeoPoint, Hotel, NewHotel};
use stayfinder_core::ports::{HotelRepository, RepositoryError};
use stayfinder_core::spatial::{self, project_to};

/// R-tree entry: a hotel ID at its projected planar position.
#[derive(Debug, Clone, PartialEq)]
struct HotelNode {
    id: i64,
    point: [f64; 2],
}

impl RTreeObject for HotelNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for HotelNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

struct MemoryState {
    hotels: BTreeMap<i64, Hotel>,
    tree: RTree<HotelNode>,
    next_id: i64,
}

/// In-memory planar implementation of the `HotelRepository` trait.
///
/// Construction pins the projected reference system the store indexes in;
/// it must be a registered, projected (meter-based) system covering the
/// data's region, e.g. 32633 (UTM 33N) for the Zagreb fixture.
pub struct MemoryHotelRepository {
    state: RwLock<MemoryState>,
    projection_srid: i32,
}

impl MemoryHotelRepository {
    pub fn new(projection_srid: i32) -> anyhow::Result<Self> {
        let crs = spatial::lookup(projection_srid)
            .ok_or_else(|| anyhow::anyhow!("unknown projection SRID {projection_srid}"))?;
        if crs.is_geographic() {
            anyhow::bail!(
                "SRID {projection_srid} is geodetic; the planar substitute needs a projected system"
            );
        }

        Ok(Self {
            state: RwLock::new(MemoryState {
                hotels: BTreeMap::new(),
                tree: RTree::new(),
                next_id: 1,
            }),
            projection_srid,
        })
    }

    fn project(&self, point: &GeoPoint) -> Result<[f64; 2], RepositoryError> {
        let projected = project_to(point, self.projection_srid)
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok([projected.x, projected.y])
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, MemoryState>, RepositoryError> {
        self.state
            .read()
            .map_err(|_| RepositoryError::Storage("hotel store lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, MemoryState>, RepositoryError> {
        self.state
            .write()
            .map_err(|_| RepositoryError::Storage("hotel store lock poisoned".into()))
    }
}

#[async_trait]
impl HotelRepository for MemoryHotelRepository {
    async fn list(&self) -> Result<Vec<Hotel>, RepositoryError> {
        Ok(self.read()?.hotels.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Hotel, RepositoryError> {
        self.read()?
            .hotels
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Hotel with ID {id}")))
    }

    async fn insert(&self, hotel: &NewHotel) -> Result<Hotel, RepositoryError> {
        let point = self.project(&hotel.location)?;

        let mut state = self.write()?;
        let id = state.next_id;
        state.next_id += 1;

        let persisted = Hotel {
            id,
            name: hotel.name.clone(),
            price: hotel.price,
            location: hotel.location,
        };
        state.tree.insert(HotelNode { id, point });
        state.hotels.insert(id, persisted.clone());

        Ok(persisted)
    }

    async fn update(&self, hotel: &Hotel) -> Result<(), RepositoryError> {
        let new_point = self.project(&hotel.location)?;

        let mut state = self.write()?;
        let previous = state
            .hotels
            .get(&hotel.id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Hotel with ID {}", hotel.id)))?;

        // Projection is deterministic, so the stored node can be
        // reconstructed from the previous snapshot for removal.
        let old_point = self.project(&previous.location)?;
        state.tree.remove(&HotelNode {
            id: hotel.id,
            point: old_point,
        });
        state.tree.insert(HotelNode {
            id: hotel.id,
            point: new_point,
        });
        state.hotels.insert(hotel.id, hotel.clone());

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.write()?;
        let removed = state
            .hotels
            .remove(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Hotel with ID {id}")))?;

        let point = self.project(&removed.location)?;
        state.tree.remove(&HotelNode { id, point });

        Ok(())
    }

    async fn search_within_distance(
        &self,
        origin: &GeoPoint,
        max_distance_m: f64,
        limit: i64,
    ) -> Result<Vec<Hotel>, RepositoryError> {
        let query_point = self.project(origin)?;

        tracing::debug!(
            projection_srid = self.projection_srid,
            max_distance_m,
            limit,
            "planar hotel radius query"
        );

        let state = self.read()?;

        // locate_within_distance takes the squared radius (it compares
        // against PointDistance::distance_2).
        let mut eligible: Vec<(f64, i64)> = state
            .tree
            .locate_within_distance(query_point, max_distance_m * max_distance_m)
            .map(|node| (node.distance_2(&query_point), node.id))
            .collect();

        // Nearest-first with ID tie-break: the same deterministic
        // truncation the authoritative backend applies under LIMIT.
        eligible.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
        });
        eligible.truncate(limit.max(0) as usize);

        Ok(eligible
            .into_iter()
            .filter_map(|(_, id)| state.hotels.get(&id).cloned())
            .collect())
    }
}

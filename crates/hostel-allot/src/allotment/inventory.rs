//! Capacity-guarded room inventory.

use std::collections::HashMap;

use rand::Rng;

use super::domain::{Room, RoomId};

/// Inventory failures. The lookup variants double as the engine's
/// "try the next room" control signals and are never fatal; the seed
/// variants are rejected at construction and never occur mid-run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("room '{0}' is not in the inventory")]
    RoomNotFound(RoomId),
    #[error("room '{0}' is already at capacity")]
    RoomFull(RoomId),
    #[error("duplicate room id '{0}' in inventory seed")]
    DuplicateRoom(RoomId),
    #[error("room '{id}' seeded with occupancy {occupied} above capacity {capacity}")]
    OccupancyAboveCapacity {
        id: RoomId,
        occupied: u8,
        capacity: u8,
    },
}

/// Ordered collection of rooms with an id index.
///
/// Enumeration order is the seed order and is part of the allocation
/// contract: the general fallback scan visits rooms in exactly this order.
#[derive(Debug, Clone, Default)]
pub struct RoomInventory {
    rooms: Vec<Room>,
    by_id: HashMap<RoomId, usize>,
}

impl RoomInventory {
    /// Builds an inventory from seed records, rejecting duplicate ids and
    /// rooms seeded beyond their capacity.
    pub fn new(rooms: Vec<Room>) -> Result<Self, InventoryError> {
        let mut by_id = HashMap::with_capacity(rooms.len());
        for (index, room) in rooms.iter().enumerate() {
            if room.occupied > room.capacity {
                return Err(InventoryError::OccupancyAboveCapacity {
                    id: room.id.clone(),
                    occupied: room.occupied,
                    capacity: room.capacity,
                });
            }
            if by_id.insert(room.id.clone(), index).is_some() {
                return Err(InventoryError::DuplicateRoom(room.id.clone()));
            }
        }
        Ok(Self { rooms, by_id })
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// All rooms in seed order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, id: &RoomId) -> Option<&Room> {
        self.by_id.get(id).map(|&index| &self.rooms[index])
    }

    /// The room, but only while it still has a free spot.
    pub fn find_available(&self, id: &RoomId) -> Option<&Room> {
        self.get(id).filter(|room| room.has_vacancy())
    }

    /// First room with a free spot in seed order.
    pub fn first_available(&self) -> Option<&Room> {
        self.rooms.iter().find(|room| room.has_vacancy())
    }

    /// Claims one spot in the room. The only occupancy mutator during an
    /// allocation run.
    pub fn occupy(&mut self, id: &RoomId) -> Result<(), InventoryError> {
        let index = *self
            .by_id
            .get(id)
            .ok_or_else(|| InventoryError::RoomNotFound(id.clone()))?;
        let room = &mut self.rooms[index];
        if !room.has_vacancy() {
            return Err(InventoryError::RoomFull(id.clone()));
        }
        room.occupied += 1;
        Ok(())
    }

    /// Bulk reset for a fresh admission cycle; not an undo of specific
    /// allocations. With `randomize` the occupancy of every room is drawn
    /// uniformly from `[0, capacity]` to simulate carried-over residents.
    /// Demo behavior, not suitable for reconciling real records.
    pub fn reset_occupancy(&mut self, randomize: bool) {
        let mut rng = rand::rng();
        for room in &mut self.rooms {
            room.occupied = if randomize {
                rng.random_range(0..=room.capacity)
            } else {
                0
            };
        }
    }

    pub fn total_capacity(&self) -> u32 {
        self.rooms.iter().map(|room| u32::from(room.capacity)).sum()
    }

    pub fn total_occupied(&self) -> u32 {
        self.rooms.iter().map(|room| u32::from(room.occupied)).sum()
    }
}

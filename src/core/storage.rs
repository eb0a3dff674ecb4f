use std::collections::{BTreeMap, HashMap};

use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// Position of an item in depth order: depth first, then insertion order
type OrderKey = (i32, u64);

struct Entry<T> {
    key: OrderKey,
    item: T,
}

/// Storage for bodies, addressed by handle and enumerated by depth.
///
/// Items with equal depth keep the order they were inserted in, so
/// enumeration is deterministic.
pub struct BodyStorage<T> {
    items: HashMap<BodyHandle, Entry<T>>,
    order: BTreeMap<OrderKey, BodyHandle>,
    next_id: u32,
    next_seq: u64,
}

impl<T> BodyStorage<T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            order: BTreeMap::new(),
            next_id: 1, // Start at 1, so 0 can represent invalid handle
            next_seq: 0,
        }
    }

    /// Adds an item at the given depth and returns its handle
    pub fn insert(&mut self, z: i32, item: T) -> BodyHandle {
        let handle = BodyHandle(self.next_id);
        self.next_id += 1;

        let key = self.next_key(z);
        self.order.insert(key, handle);
        self.items.insert(handle, Entry { key, item });
        handle
    }

    fn next_key(&mut self, z: i32) -> OrderKey {
        let key = (z, self.next_seq);
        self.next_seq += 1;
        key
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&T> {
        self.items.get(&handle).map(|entry| &entry.item)
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        self.items.get_mut(&handle).map(|entry| &mut entry.item)
    }

    /// Gets an item by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle).ok_or_else(|| not_found(handle))
    }

    /// Gets a mutable reference to an item by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle).ok_or_else(|| not_found(handle))
    }

    /// Depth of an item
    pub fn depth_of(&self, handle: BodyHandle) -> Option<i32> {
        self.items.get(&handle).map(|entry| entry.key.0)
    }

    /// Moves an item to another depth. It goes after every item already at
    /// that depth.
    pub fn set_depth(&mut self, handle: BodyHandle, z: i32) -> Result<()> {
        let old = self.items.get(&handle).map(|entry| entry.key).ok_or_else(|| not_found(handle))?;
        let key = self.next_key(z);

        self.order.remove(&old);
        self.order.insert(key, handle);
        if let Some(entry) = self.items.get_mut(&handle) {
            entry.key = key;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all items from the storage. Handles are never reused.
    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
    }

    /// Handles in depth order
    pub fn handles(&self) -> Vec<BodyHandle> {
        self.order.values().copied().collect()
    }

    /// Items in depth order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &T)> + '_ {
        self.order
            .values()
            .filter_map(move |handle| self.get(*handle).map(|item| (*handle, item)))
    }
}

impl<T> Default for BodyStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(handle: BodyHandle) -> PhysicsError {
    PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
}

//! Spatial index of blocks rendered inside a day column.
//!
//! Plan cards and event blocks handle their own pointer input. The column
//! asks this index whether a press landed on one of them before starting a
//! selection, instead of inspecting the markup of unrelated components.
//! Backed by an R-tree so point queries stay O(log n) on busy days.

use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// Kind of block that owns its own pointer handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    PlanCard,
    EventBlock,
}

/// A block's bounding box in column-local pixels.
#[derive(Debug, Clone, Copy)]
pub struct BlockEntry {
    pub block_id: u64,
    pub kind: BlockKind,
    /// Higher values are drawn on top
    pub z_index: i32,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BlockEntry {
    pub fn new(block_id: u64, kind: BlockKind, position: (f32, f32), size: (f32, f32), z_index: i32) -> Self {
        Self {
            block_id,
            kind,
            z_index,
            min_x: position.0,
            min_y: position.1,
            max_x: position.0 + size.0,
            max_y: position.1 + size.1,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for BlockEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for BlockEntry {
    fn eq(&self, other: &Self) -> bool {
        self.block_id == other.block_id
    }
}

/// The topmost block under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHit {
    pub block_id: u64,
    pub kind: BlockKind,
}

/// Z-ordered hit-test registry for one day column.
#[derive(Default)]
pub struct BlockIndex {
    tree: RTree<BlockEntry>,
    entries: HashMap<u64, BlockEntry>,
}

impl BlockIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from an iterator of block entries.
    pub fn from_blocks<I>(blocks: I) -> Self
    where
        I: IntoIterator<Item = BlockEntry>,
    {
        let mut index = Self::new();
        index.rebuild(blocks);
        index
    }

    pub fn insert(&mut self, entry: BlockEntry) {
        if let Some(old_entry) = self.entries.remove(&entry.block_id) {
            self.tree.remove(&old_entry);
        }
        self.tree.insert(entry);
        self.entries.insert(entry.block_id, entry);
    }

    pub fn remove(&mut self, block_id: u64) -> bool {
        if let Some(entry) = self.entries.remove(&block_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Topmost block containing the point, highest z-index first.
    /// Ties go to the higher block id.
    pub fn topmost_at(&self, x: f32, y: f32) -> Option<BlockHit> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .max_by_key(|entry| (entry.z_index, entry.block_id))
            .map(|entry| BlockHit {
                block_id: entry.block_id,
                kind: entry.kind,
            })
    }

    /// All blocks intersecting a rectangular region.
    pub fn query_rect(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Vec<u64> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.block_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, blocks: I)
    where
        I: IntoIterator<Item = BlockEntry>,
    {
        self.entries = blocks.into_iter().map(|e| (e.block_id, e)).collect();
        self.tree = RTree::bulk_load(self.entries.values().copied().collect());
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

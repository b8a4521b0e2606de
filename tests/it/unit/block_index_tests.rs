//! Unit tests for block hit testing.

use boxlog_calendar::spatial_index::{BlockEntry, BlockIndex, BlockKind};

fn card(id: u64, y: f32, height: f32, z: i32) -> BlockEntry {
    BlockEntry::new(id, BlockKind::PlanCard, (0.0, y), (100.0, height), z)
}

#[test]
fn test_empty_index() {
    let index = BlockIndex::new();
    assert!(index.is_empty());
    assert!(index.topmost_at(10.0, 10.0).is_none());
}

#[test]
fn test_hit_inside_block() {
    let index = BlockIndex::from_blocks([card(1, 120.0, 60.0, 0)]);
    let hit = index.topmost_at(50.0, 150.0).unwrap();
    assert_eq!(hit.block_id, 1);
    assert_eq!(hit.kind, BlockKind::PlanCard);
    assert!(index.topmost_at(50.0, 100.0).is_none());
}

#[test]
fn test_topmost_block_wins() {
    let mut index = BlockIndex::new();
    index.insert(card(1, 100.0, 100.0, 0));
    index.insert(BlockEntry::new(2, BlockKind::EventBlock, (10.0, 120.0), (50.0, 40.0), 5));

    let hit = index.topmost_at(20.0, 130.0).unwrap();
    assert_eq!(hit.block_id, 2);
    assert_eq!(hit.kind, BlockKind::EventBlock);
    assert_eq!(index.topmost_at(80.0, 130.0).unwrap().block_id, 1);
}

#[test]
fn test_remove_and_rebuild() {
    let mut index = BlockIndex::from_blocks([card(1, 0.0, 60.0, 0), card(2, 60.0, 60.0, 0)]);
    assert_eq!(index.len(), 2);

    assert!(index.remove(1));
    assert!(!index.remove(1));
    assert!(index.topmost_at(50.0, 30.0).is_none());

    index.rebuild([card(3, 0.0, 60.0, 0)]);
    assert_eq!(index.len(), 1);
    assert_eq!(index.topmost_at(50.0, 30.0).unwrap().block_id, 3);

    index.clear();
    assert!(index.is_empty());
}

#[test]
fn test_query_rect() {
    let index = BlockIndex::from_blocks([card(1, 0.0, 60.0, 0), card(2, 300.0, 60.0, 0)]);
    let mut ids = index.query_rect(0.0, 0.0, 100.0, 200.0);
    ids.sort_unstable();
    assert_eq!(ids, vec![1]);
}

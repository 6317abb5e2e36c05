use std::sync::Arc;

use linetrace_core::{project, Block, Change, EditScript};

fn lines(items: &[&str]) -> Arc<[String]> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

#[test]
fn identical_revisions_keep_the_block_in_place() {
    let block = Block::new("a\nb\nc\nd\ne", 1, 4);
    let previous = block.previous("a\nb\nc\nd\ne");

    assert_eq!(previous, Block::new("a\nb\nc\nd\ne", 1, 4));
    assert_eq!(previous.content(), "b\nc\nd");
}

#[test]
fn insertion_above_shifts_the_block_up() {
    // Two lines were inserted at the top; the block covered c, d, e after.
    let block = Block::new("a\nb\nc\nd\ne", 2, 5);
    let previous = block.previous("c\nd\ne");

    assert_eq!(previous.start(), 0);
    assert_eq!(previous.end(), 3);
    assert_eq!(previous.content(), "c\nd\ne");
}

#[test]
fn deletion_above_shifts_the_block_down() {
    // Two lines above the block were deleted between the revisions.
    let block = Block::new("a\nb\nc\nd\ne", 1, 4);
    let previous = block.previous("x\ny\na\nb\nc\nd\ne");

    assert_eq!(previous.start(), 3);
    assert_eq!(previous.end(), 6);
    assert_eq!(previous.content(), "b\nc\nd");
}

#[test]
fn replacement_inside_the_block_adjusts_only_the_end() {
    // One line inside the block became two; the block spans the whole file.
    let block = Block::new("a\nb\nc\nc2\nd\ne", 0, 6);
    let previous = block.previous("a\nb\nX\nd\ne");

    assert_eq!(previous.start(), 0);
    assert_eq!(previous.end(), 5);
    assert_eq!(previous.content(), "a\nb\nX\nd\ne");
}

#[test]
fn change_starting_at_the_block_end_is_ignored() {
    // A line was appended right where the block ends.
    let block = Block::new("a\nb\nc\nd\ne\nf", 2, 5);
    let previous = block.previous("a\nb\nc\nd\ne");

    assert_eq!(previous.start(), 2);
    assert_eq!(previous.end(), 5);
    assert_eq!(previous.content(), "c\nd\ne");
}

#[test]
fn empty_block_survives_identical_revisions() {
    let block = Block::new("a\nb\nc\nd\ne", 3, 3);
    let previous = block.previous("a\nb\nc\nd\ne");

    assert_eq!(previous.start(), 3);
    assert_eq!(previous.end(), 3);
    assert_eq!(previous.content(), "");
}

#[test]
fn empty_script_is_the_identity_on_valid_bounds() {
    let source = lines(&["a", "b", "c", "d"]);
    let block = Block::from_lines(Arc::clone(&source), 1, 3);

    let projected = project(&block, Arc::clone(&source), &EditScript::new());
    assert_eq!(projected, block);
}

#[test]
fn pure_insertion_before_the_block_shifts_both_bounds() {
    let previous = lines(&["p0", "p1", "p2", "p3", "p4", "p5", "p6", "p7"]);
    let current = lines(&["p0", "n0", "n1", "p1", "p2", "p3", "p4", "p5", "p6", "p7"]);
    let block = Block::from_lines(current, 5, 7);

    let script = EditScript::from(vec![Change::new(1, 1, 0, 2)]);
    let projected = project(&block, previous, &script);

    assert_eq!((projected.start(), projected.end()), (3, 5));
}

#[test]
fn pure_deletion_before_the_block_shifts_both_bounds() {
    let previous = lines(&["p0", "d0", "d1", "p1", "p2", "p3", "p4", "p5"]);
    let current = lines(&["p0", "p1", "p2", "p3", "p4", "p5"]);
    let block = Block::from_lines(current, 3, 5);

    let script = EditScript::from(vec![Change::new(1, 1, 2, 0)]);
    let projected = project(&block, previous, &script);

    assert_eq!((projected.start(), projected.end()), (5, 7));
}

#[test]
fn change_at_or_after_the_block_end_leaves_bounds_alone() {
    let previous = lines(&["a", "b", "c", "d", "e", "f", "g"]);
    let current = lines(&["a", "b", "c", "d", "e", "f2", "g"]);
    let block = Block::from_lines(current, 1, 4);

    let script = EditScript::from(vec![Change::new(5, 5, 1, 1)]);
    let projected = project(&block, previous, &script);

    assert_eq!((projected.start(), projected.end()), (1, 4));
}

#[test]
fn end_anchored_start_rule_wins_for_changes_before_the_block() {
    // Both start rules fire for a change wholly before the block; the
    // end-anchored shift is the one that sticks.
    let previous = lines(&["p0", "p1", "p2", "p3", "p4", "p5", "p6"]);
    let current = lines(&["p0", "n0", "n1", "n2", "p3", "p4", "p5", "p6"]);
    let block = Block::from_lines(current, 4, 6);

    // Three lines replaced two: start shift is 0, end shift is +1.
    let script = EditScript::from(vec![Change::new(1, 1, 2, 3)]);
    let projected = project(&block, previous, &script);

    assert_eq!((projected.start(), projected.end()), (3, 5));
}

#[test]
fn end_bound_past_the_previous_revision_is_clamped() {
    let previous = lines(&["a", "b", "c"]);
    let current = lines(&["a", "b", "c", "d", "e"]);
    let block = Block::from_lines(current, 1, 99);

    let projected = project(&block, Arc::clone(&previous), &EditScript::new());

    assert_eq!((projected.start(), projected.end()), (1, 3));
    assert!(projected.end() <= previous.len());
}

#[test]
fn inverted_bounds_collapse_to_an_empty_block() {
    let previous = lines(&["a", "b", "c", "d", "e"]);
    let current = lines(&["a", "b", "c", "d", "e"]);
    let block = Block::from_lines(current, 4, 2);

    let projected = project(&block, previous, &script_of(&[]));

    assert_eq!((projected.start(), projected.end()), (4, 4));
    assert_eq!(projected.content(), "");
}

#[test]
fn projection_is_deterministic() {
    let previous = lines(&["p0", "p1", "p2", "p3", "p4", "p5"]);
    let current = lines(&["p0", "n0", "p1", "p2", "p4", "p5"]);
    let block = Block::from_lines(current, 2, 5);

    let script = script_of(&[Change::new(1, 1, 0, 1), Change::new(3, 4, 1, 0)]);
    let first = project(&block, Arc::clone(&previous), &script);
    let second = project(&block, previous, &script);

    assert_eq!(first, second);
}

#[test]
fn projected_bounds_always_satisfy_the_block_invariant() {
    let previous = lines(&["a", "b", "c", "d"]);
    let current = lines(&["a", "x", "y", "d"]);

    for start in 0..=4 {
        for end in 0..=4 {
            let block = Block::from_lines(Arc::from(current.to_vec()), start, end);
            let projected = block.previous_from_lines(Arc::clone(&previous));

            assert!(projected.start() <= projected.end());
            assert!(projected.end() <= projected.source().len());
        }
    }
}

fn script_of(changes: &[Change]) -> EditScript {
    changes.iter().copied().collect()
}

use quick_kv::selection::SelectionCursor;

#[test]
fn moves_within_bounds_without_wrapping() {
    let mut cursor = SelectionCursor::new();
    assert_eq!(cursor.move_by(-1, 3), 0);
    assert_eq!(cursor.move_by(1, 3), 1);
    assert_eq!(cursor.move_by(1, 3), 2);
    assert_eq!(cursor.move_by(1, 3), 2);
    assert_eq!(cursor.move_by(-1, 3), 1);
}

#[test]
fn empty_list_pins_to_zero() {
    let mut cursor = SelectionCursor::new();
    assert_eq!(cursor.move_by(1, 0), 0);
    assert_eq!(cursor.clamp(0), 0);
}

#[test]
fn clamp_pulls_back_after_shrink() {
    let mut cursor = SelectionCursor::new();
    cursor.move_by(5, 10);
    assert_eq!(cursor.index(), 5);
    assert_eq!(cursor.clamp(3), 2);
    assert_eq!(cursor.clamp(10), 2);
}

#[test]
fn reset_returns_to_top() {
    let mut cursor = SelectionCursor::new();
    cursor.move_by(2, 4);
    assert_eq!(cursor.reset(), 0);
}

#[test]
fn stays_in_range_over_mixed_sequence() {
    let mut cursor = SelectionCursor::new();
    let lens = [4usize, 4, 1, 0, 7, 7, 7, 2, 5];
    let deltas = [1isize, 1, -1, 1, 1, 1, 1, -1, 1];
    for (len, delta) in lens.iter().zip(deltas) {
        cursor.clamp(*len);
        let idx = cursor.move_by(delta, *len);
        assert!(idx <= len.saturating_sub(1));
    }
}

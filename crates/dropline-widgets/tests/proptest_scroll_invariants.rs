//! Property tests: the viewport/cursor invariants hold after every
//! operation, for arbitrary item lists, heights, and navigation sequences.

use dropline_style::DefaultTheme;
use dropline_widgets::ListDropdown;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Up,
    Down,
    Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Up), Just(Op::Down), Just(Op::Reset)]
}

fn apply(dd: &mut ListDropdown<DefaultTheme>, op: Op) {
    match op {
        Op::Up => dd.scroll_up(),
        Op::Down => dd.scroll_down(),
        Op::Reset => dd.reset(),
    }
}

proptest! {
    #[test]
    fn invariants_hold_under_arbitrary_navigation(
        count in 1usize..24,
        max_height in 0usize..10,
        ops in proptest::collection::vec(op_strategy(), 0..64),
    ) {
        let items: Vec<String> = (0..count).map(|i| format!("item-{i}")).collect();
        let mut dd = ListDropdown::new(items, max_height, DefaultTheme).unwrap();
        let height = dd.viewport_height();
        prop_assert_eq!(height, count.min(max_height));

        for op in ops {
            apply(&mut dd, op);

            prop_assert!(dd.offset() <= count - height);
            prop_assert!(dd.position() < count);
            // The windowed cursor invariant only means anything once the
            // viewport has rows.
            if dd.has_focus() && height > 0 {
                prop_assert!(dd.offset() <= dd.position());
                prop_assert!(dd.position() <= dd.offset() + height - 1);
            }

            match dd.slider_row() {
                None => prop_assert!(height == 0 || count <= height),
                Some(row) => {
                    prop_assert!(count > height);
                    // A one-row viewport can snap the slider to row 1,
                    // which render never paints (as in the original).
                    if height >= 2 {
                        prop_assert!(row < height);
                    }
                    if height >= 3 {
                        if row == 0 {
                            prop_assert_eq!(dd.offset(), 0);
                        }
                        if row == height - 1 {
                            prop_assert_eq!(dd.offset(), count - height);
                        }
                    }
                }
            }

            let rendered = dd.render();
            prop_assert_eq!(rendered.text.matches("\x1b[1B").count(), height);
        }
    }

    #[test]
    fn reset_restores_initial_state_after_any_sequence(
        count in 1usize..24,
        max_height in 0usize..10,
        ops in proptest::collection::vec(op_strategy(), 0..64),
    ) {
        let items: Vec<String> = (0..count).map(|i| format!("item-{i}")).collect();
        let mut dd = ListDropdown::new(items, max_height, DefaultTheme).unwrap();

        for op in ops {
            apply(&mut dd, op);
        }
        dd.reset();

        prop_assert!(!dd.has_focus());
        prop_assert!(!dd.is_reversed());
        prop_assert_eq!(dd.position(), 0);
        prop_assert_eq!(dd.offset(), 0);
        prop_assert_eq!(dd.selected(), "item-0");
    }
}

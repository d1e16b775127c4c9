//! Property-based tests for page wiring

use super::*;
use crate::geometry::Rect;
use crate::position::DEFAULT_PADDING;
use crate::test_utils::test_helpers::{add_pair, single_pair_page};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Pointer {
    EnterTrigger,
    LeaveTrigger,
    EnterTooltip,
    LeaveTooltip,
    Wait(u64),
}

fn pointer_strategy() -> impl Strategy<Value = Pointer> {
    prop_oneof![
        Just(Pointer::EnterTrigger),
        Just(Pointer::LeaveTrigger),
        Just(Pointer::EnterTooltip),
        Just(Pointer::LeaveTooltip),
        (0u64..500).prop_map(Pointer::Wait),
    ]
}

// Any hover-opened tooltip ends up in the portal with a fixed position whose
// left edge respects the padding inset.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_hover_open_applies_padded_fixed_position(
        trigger_x in 0.0f64..1100.0,
        trigger_y in 0.0f64..850.0,
        width in 1.0f64..1200.0,
        height in 1.0f64..900.0,
    ) {
        let mut doc = Document::new(Viewport::new(1024.0, 800.0));
        let pair = add_pair(&mut doc, "tip", Rect::new(trigger_x, trigger_y, 40.0, 20.0), width, height);
        let mut page = TooltipPage::new(doc, TooltipConfig::default());

        page.pointer_enter(pair.trigger);
        page.advance(300);

        prop_assert!(page.portal().contains(page.document(), pair.tooltip));
        let style = page.document().style(pair.tooltip).unwrap();
        let (_, left) = style.fixed_offset().unwrap();
        prop_assert!(left >= DEFAULT_PADDING);
    }
}

// Whatever the pointer did, leaving both elements closes the tooltip once
// the hide delay has passed, and opens never outrun closes by more than one.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_leaving_everything_eventually_closes(
        steps in prop::collection::vec(pointer_strategy(), 0..30)
    ) {
        let (mut page, pair) = single_pair_page();

        for step in steps {
            match step {
                Pointer::EnterTrigger => page.pointer_enter(pair.trigger),
                Pointer::LeaveTrigger => page.pointer_leave(pair.trigger),
                Pointer::EnterTooltip => page.pointer_enter(pair.tooltip),
                Pointer::LeaveTooltip => page.pointer_leave(pair.tooltip),
                Pointer::Wait(ms) => page.advance(ms),
            }
        }
        page.pointer_leave(pair.trigger);
        page.pointer_leave(pair.tooltip);
        page.advance(100);

        prop_assert!(!page.document().is_popover_open(pair.tooltip));
        prop_assert_eq!(page.phase(pair.tooltip), HoverPhase::Idle);

        let opens = page.activity().iter().filter(|a| a.kind.is_open_request()).count();
        let closes = page.activity().iter().filter(|a| a.kind.is_close_request()).count();
        prop_assert!(opens <= closes + 1);
    }
}

//! Tests for the infinite carousel state machine.

use super::*;
use crate::carousel::types::ScrollBehavior;

const STRIDE: f64 = 300.0;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Options giving a 300 stride for a 276-wide item (24 gap), K = 3.
fn options() -> CarouselOptions {
    CarouselOptions::default()
}

fn ready(item_count: usize) -> InfiniteCarousel {
    match InfiniteCarousel::initialize(item_count, STRIDE - 24.0, options()) {
        InitOutcome::Ready { carousel, .. } => carousel,
        other => panic!("expected Ready, got {:?}", other),
    }
}

/// Advance past the settle timer so the next navigation scrolls immediately.
fn settle(carousel: &mut InfiniteCarousel, now: &mut Duration) -> Vec<ScrollCommand> {
    *now += options().settle;
    carousel.tick(*now)
}

mod initialize {
    use super::*;

    #[test]
    fn zero_items_is_empty() {
        let outcome = InfiniteCarousel::initialize(0, 100.0, options());
        assert!(matches!(outcome, InitOutcome::Empty));
    }

    #[test]
    fn zero_width_is_deferred() {
        assert!(matches!(
            InfiniteCarousel::initialize(5, 0.0, options()),
            InitOutcome::Deferred
        ));
        assert!(matches!(
            InfiniteCarousel::initialize(5, f64::NAN, options()),
            InitOutcome::Deferred
        ));
        assert!(matches!(
            InfiniteCarousel::initialize(5, -3.0, options()),
            InitOutcome::Deferred
        ));
    }

    #[test]
    fn viewport_starts_on_first_real_item() {
        match InfiniteCarousel::initialize(8, 276.0, options()) {
            InitOutcome::Ready { carousel, command } => {
                assert_eq!(command, ScrollCommand::instant(900.0));
                assert_eq!(carousel.viewport(), 900.0);
                assert_eq!(carousel.logical_index(), 0);
                assert_eq!(carousel.track().len(), 14);
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn no_timers_run_after_init() {
        let carousel = ready(4);
        let state = carousel.state();
        assert!(!state.is_animating);
        assert!(!state.auto_advance_enabled);
        assert_eq!(carousel.next_deadline(), None);
    }
}

mod navigation {
    use super::*;

    #[test]
    fn three_advances_scroll_one_stride_each() {
        let mut carousel = ready(8);
        let mut now = ms(0);
        let mut offsets = Vec::new();
        for _ in 0..3 {
            let command = carousel
                .advance(Direction::Forward, now)
                .expect("idle carousel scrolls immediately");
            assert_eq!(command.behavior, ScrollBehavior::Smooth);
            offsets.push(command.offset);
            settle(&mut carousel, &mut now);
        }
        assert_eq!(offsets, vec![1200.0, 1500.0, 1800.0]);
        assert_eq!(carousel.logical_index(), 3);
    }

    #[test]
    fn backward_from_zero_wraps_to_last() {
        let mut carousel = ready(8);
        carousel.advance(Direction::Backward, ms(0));
        assert_eq!(carousel.logical_index(), 7);
    }

    #[test]
    fn forward_wrap_targets_tail_clone_then_reanchors() {
        let mut carousel = ready(8);
        let mut now = ms(0);
        carousel.jump_to(7, now);
        settle(&mut carousel, &mut now);

        let command = carousel.advance(Direction::Forward, now).expect("scrolls");
        // Tail clone of item 0 sits at slot N + K = 11.
        assert_eq!(command.offset, 11.0 * STRIDE);
        assert_eq!(carousel.logical_index(), 0);

        let commands = settle(&mut carousel, &mut now);
        assert_eq!(commands, vec![ScrollCommand::instant(900.0)]);
        assert_eq!(carousel.viewport(), 900.0);
        assert_eq!(carousel.logical_index(), 0);
    }

    #[test]
    fn backward_wrap_targets_head_clone_then_reanchors() {
        let mut carousel = ready(8);
        let mut now = ms(0);
        let command = carousel.advance(Direction::Backward, now).expect("scrolls");
        // Head clone of item 7 sits at slot K - 1 = 2.
        assert_eq!(command.offset, 2.0 * STRIDE);

        let commands = settle(&mut carousel, &mut now);
        assert_eq!(commands, vec![ScrollCommand::instant(10.0 * STRIDE)]);
        assert_eq!(carousel.logical_index(), 7);
    }

    #[test]
    fn jump_to_out_of_range_wraps() {
        let mut carousel = ready(5);
        let command = carousel.jump_to(12, ms(0)).expect("scrolls");
        assert_eq!(carousel.logical_index(), 2);
        assert_eq!(command.offset, 5.0 * STRIDE);
    }

    #[test]
    fn navigation_while_animating_is_queued_last_wins() {
        let mut carousel = ready(8);
        let mut now = ms(0);
        assert!(carousel.advance(Direction::Forward, now).is_some());

        now += ms(100);
        assert_eq!(carousel.advance(Direction::Forward, now), None);
        assert_eq!(carousel.jump_to(5, now), None);
        assert_eq!(carousel.logical_index(), 5);

        now = ms(500);
        let commands = carousel.tick(now);
        assert_eq!(commands, vec![ScrollCommand::smooth(8.0 * STRIDE)]);
        assert!(carousel.is_animating());
    }

    #[test]
    fn single_item_wraps_through_clone() {
        let mut carousel = ready(1);
        let mut now = ms(0);
        let command = carousel.advance(Direction::Forward, now).expect("scrolls");
        assert_eq!(command.offset, 4.0 * STRIDE);
        assert_eq!(carousel.logical_index(), 0);
        let commands = settle(&mut carousel, &mut now);
        assert_eq!(commands, vec![ScrollCommand::instant(3.0 * STRIDE)]);
    }

    #[test]
    fn indicators_follow_logical_index() {
        let mut carousel = ready(4);
        carousel.jump_to(2, ms(0));
        let active: Vec<usize> = carousel
            .indicators()
            .filter(|dot| dot.active)
            .map(|dot| dot.index)
            .collect();
        assert_eq!(active, vec![2]);
        assert_eq!(carousel.indicators().count(), 4);
    }
}

mod auto_advance {
    use super::*;

    #[test]
    fn ticks_advance_on_cadence() {
        let mut carousel = ready(3);
        carousel.start_auto_advance(ms(0));
        assert!(carousel.tick(ms(2999)).is_empty());

        let commands = carousel.tick(ms(3000));
        assert_eq!(commands, vec![ScrollCommand::smooth(4.0 * STRIDE)]);
        assert_eq!(carousel.logical_index(), 1);
    }

    #[test]
    fn stop_twice_same_as_once() {
        let mut carousel = ready(3);
        carousel.start_auto_advance(ms(0));
        carousel.stop_auto_advance();
        let once = carousel.state();
        carousel.stop_auto_advance();
        assert_eq!(carousel.state(), once);
        assert!(carousel.tick(ms(10_000)).is_empty());
    }

    #[test]
    fn start_twice_keeps_phase() {
        let mut carousel = ready(3);
        carousel.start_auto_advance(ms(0));
        carousel.start_auto_advance(ms(2000));
        assert_eq!(carousel.next_deadline(), Some(ms(3000)));
    }

    #[test]
    fn user_navigation_suspends_and_resumes() {
        let mut carousel = ready(8);
        carousel.start_auto_advance(ms(0));
        carousel.advance(Direction::Forward, ms(1000));
        assert!(!carousel.state().auto_advance_enabled);
        assert!(carousel.resume_pending());

        // Settles at 1500; auto tick that would have fired at 3000 must not.
        let commands = carousel.tick(ms(3000));
        assert!(commands.is_empty());

        carousel.tick(ms(6000));
        assert!(carousel.state().auto_advance_enabled);
        let commands = carousel.tick(ms(9000));
        assert_eq!(commands, vec![ScrollCommand::smooth(5.0 * STRIDE)]);
        assert_eq!(carousel.logical_index(), 2);
    }

    #[test]
    fn repeated_interaction_replaces_resume_timer() {
        let mut carousel = ready(8);
        carousel.advance(Direction::Forward, ms(0));
        carousel.advance(Direction::Forward, ms(4000));
        carousel.tick(ms(5000));
        assert!(!carousel.state().auto_advance_enabled);
        carousel.tick(ms(9000));
        assert!(carousel.state().auto_advance_enabled);
    }

    #[test]
    fn auto_tick_while_animating_is_ignored() {
        let options = CarouselOptions {
            cadence: ms(100),
            settle: ms(500),
            ..CarouselOptions::default()
        };
        let mut carousel = match InfiniteCarousel::initialize(4, 276.0, options) {
            InitOutcome::Ready { carousel, .. } => carousel,
            other => panic!("expected Ready, got {:?}", other),
        };
        carousel.start_auto_advance(ms(0));
        assert_eq!(carousel.tick(ms(100)).len(), 1);
        assert!(carousel.tick(ms(200)).is_empty());
        assert!(carousel.tick(ms(300)).is_empty());
        assert_eq!(carousel.logical_index(), 1);
    }

    #[test]
    fn autoplay_off_cancels_resume() {
        let mut carousel = ready(4);
        carousel.advance(Direction::Forward, ms(0));
        carousel.set_autoplay(false, ms(10));
        assert!(!carousel.resume_pending());
        carousel.tick(ms(60_000));
        assert!(!carousel.state().auto_advance_enabled);

        carousel.set_autoplay(true, ms(60_000));
        assert!(carousel.state().auto_advance_enabled);
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let mut carousel = ready(4);
        carousel.start_auto_advance(ms(0));
        carousel.pointer_enter(ms(10));
        assert!(!carousel.state().auto_advance_enabled);
        assert!(carousel.tick(ms(5000)).is_empty());

        carousel.pointer_leave(ms(5000));
        assert!(carousel.state().auto_advance_enabled);
        assert_eq!(carousel.tick(ms(8000)).len(), 1);
    }

    #[test]
    fn resume_waits_while_hovered() {
        let mut carousel = ready(4);
        carousel.pointer_enter(ms(0));
        carousel.advance(Direction::Forward, ms(0));
        carousel.tick(ms(5000));
        assert!(!carousel.state().auto_advance_enabled);
    }
}

mod drag {
    use super::*;

    #[test]
    fn drag_tracks_pointer_instantly() {
        let mut carousel = ready(8);
        carousel.begin_drag(1000.0, ms(0));
        let command = carousel.update_drag(900.0, ms(16)).expect("dragging");
        assert_eq!(command, ScrollCommand::instant(1100.0));
        assert!(carousel.is_dragging());
    }

    #[test]
    fn update_without_drag_is_noop() {
        let mut carousel = ready(8);
        assert_eq!(carousel.update_drag(10.0, ms(0)), None);
        assert_eq!(carousel.end_drag(ms(0)), None);
    }

    #[test]
    fn release_does_not_snap_on_real_items() {
        let mut carousel = ready(8);
        carousel.begin_drag(500.0, ms(0));
        carousel.update_drag(440.0, ms(10));
        assert_eq!(carousel.end_drag(ms(20)), None);
        assert_eq!(carousel.viewport(), 1020.0);
        assert_eq!(carousel.logical_index(), 0);
    }

    #[test]
    fn release_on_clone_reanchors_preserving_offset() {
        let mut carousel = ready(8);
        carousel.begin_drag(0.0, ms(0));
        // 900 - 400*2 = 100 -> nearest slot 0, head clone of item 5.
        carousel.update_drag(400.0, ms(10));
        let command = carousel.end_drag(ms(20)).expect("re-anchors");
        assert_eq!(command, ScrollCommand::instant(100.0 + 8.0 * STRIDE));
        assert_eq!(carousel.logical_index(), 5);
    }

    #[test]
    fn drag_is_clamped_to_track() {
        let mut carousel = ready(8);
        carousel.begin_drag(0.0, ms(0));
        let command = carousel.update_drag(10_000.0, ms(10)).expect("dragging");
        assert_eq!(command.offset, 0.0);
    }

    #[test]
    fn drag_cancels_inflight_scroll_and_queue() {
        let mut carousel = ready(8);
        carousel.advance(Direction::Forward, ms(0));
        carousel.advance(Direction::Forward, ms(10));
        carousel.begin_drag(0.0, ms(20));
        assert!(!carousel.is_animating());
        carousel.end_drag(ms(30));
        assert!(carousel.tick(ms(600)).is_empty());
    }

    #[test]
    fn drag_then_quiet_period_resumes_from_drag_index() {
        let mut carousel = ready(8);
        carousel.start_auto_advance(ms(0));

        carousel.begin_drag(1000.0, ms(1000));
        assert!(!carousel.state().auto_advance_enabled);
        carousel.update_drag(700.0, ms(1100));
        carousel.end_drag(ms(1200));
        assert_eq!(carousel.logical_index(), 2);

        assert!(carousel.tick(ms(6199)).is_empty());
        carousel.tick(ms(6200));
        assert!(carousel.state().auto_advance_enabled);

        let commands = carousel.tick(ms(9200));
        assert_eq!(commands, vec![ScrollCommand::smooth(6.0 * STRIDE)]);
        assert_eq!(carousel.logical_index(), 3);
    }

    #[test]
    fn drag_grabbed_mid_scroll_starts_from_displayed_offset() {
        let mut carousel = ready(8);
        carousel.advance(Direction::Forward, ms(0));
        assert_eq!(carousel.viewport(), 1200.0);

        carousel.begin_drag_from(500.0, 1050.0, ms(250));
        assert_eq!(carousel.viewport(), 1050.0);
        assert!(!carousel.is_animating());

        let command = carousel.update_drag(490.0, ms(260)).expect("dragging");
        assert_eq!(command, ScrollCommand::instant(1070.0));
    }

    #[test]
    fn non_finite_displayed_offset_keeps_viewport() {
        let mut carousel = ready(8);
        carousel.begin_drag_from(0.0, f64::NAN, ms(0));
        assert_eq!(carousel.viewport(), 900.0);
        assert!(carousel.is_dragging());
    }

    #[test]
    fn resume_deferred_while_still_dragging() {
        let mut carousel = ready(8);
        carousel.begin_drag(0.0, ms(0));
        carousel.tick(ms(5000));
        assert!(!carousel.state().auto_advance_enabled);
        assert!(carousel.resume_pending());
    }
}

mod settled {
    use super::*;

    #[test]
    fn observation_during_animation_is_deferred() {
        let mut carousel = ready(8);
        carousel.advance(Direction::Forward, ms(0));
        assert_eq!(carousel.on_scroll_settled(50.0, ms(100)), None);
        assert_eq!(carousel.viewport(), 1200.0);
    }

    #[test]
    fn observation_normalizes_index() {
        let mut carousel = ready(8);
        assert_eq!(carousel.on_scroll_settled(1790.0, ms(0)), None);
        assert_eq!(carousel.logical_index(), 3);
    }

    #[test]
    fn observation_in_tail_padding_reanchors() {
        let mut carousel = ready(8);
        let command = carousel
            .on_scroll_settled(12.0 * STRIDE, ms(0))
            .expect("re-anchors");
        assert_eq!(command, ScrollCommand::instant(4.0 * STRIDE));
        assert_eq!(carousel.logical_index(), 1);
    }

    #[test]
    fn relayout_reanchors_on_current_item() {
        let mut carousel = ready(8);
        carousel.jump_to(2, ms(0));
        let command = carousel.relayout(76.0, ms(10)).expect("valid width");
        assert_eq!(command, ScrollCommand::instant(5.0 * 100.0));
        assert!(!carousel.is_animating());
        assert_eq!(carousel.relayout(0.0, ms(20)), None);
    }

    #[test]
    fn wider_padding_reanchors_on_current_item() {
        let mut carousel = ready(8);
        carousel.jump_to(2, ms(0));
        carousel.tick(ms(500));

        let command = carousel.set_clone_count(5, ms(600)).expect("padding changed");
        assert_eq!(command, ScrollCommand::instant(7.0 * STRIDE));
        assert_eq!(carousel.track().len(), 18);
        assert_eq!(carousel.track().clone_count(), 5);
        assert_eq!(carousel.logical_index(), 2);
        assert_eq!(carousel.set_clone_count(5, ms(700)), None);
    }

    #[test]
    fn wrap_after_wider_padding_targets_new_tail_clone() {
        let mut carousel = ready(8);
        carousel.set_clone_count(5, ms(0));

        assert_eq!(
            carousel.jump_to(7, ms(10)),
            Some(ScrollCommand::smooth(12.0 * STRIDE))
        );
        carousel.tick(ms(510));

        assert_eq!(
            carousel.advance(Direction::Forward, ms(600)),
            Some(ScrollCommand::smooth(13.0 * STRIDE))
        );
        assert_eq!(carousel.tick(ms(1100)), vec![ScrollCommand::instant(5.0 * STRIDE)]);
        assert_eq!(carousel.logical_index(), 0);
    }
}

use reticle::prelude::*;

/// A page with one standalone target plus a card holding a nested button.
fn page() -> (SceneGraph, ElementId, ElementId, ElementId) {
    let mut scene = SceneGraph::new();
    let target = scene.insert(
        None,
        Rect::new(100.0, 100.0, 100.0, 40.0),
        ElementFlags::TARGETABLE,
    );
    let card = scene.insert(
        None,
        Rect::new(600.0, 300.0, 300.0, 200.0),
        ElementFlags::TARGETABLE,
    );
    let button = scene.insert(
        Some(card),
        Rect::new(650.0, 400.0, 120.0, 50.0),
        ElementFlags::TARGETABLE,
    );
    (scene, target, card, button)
}

fn installed(scheduler: &mut Scheduler) -> TargetCursor {
    TargetCursor::install(CursorConfig::new(), &Platform::default(), scheduler)
        .expect("desktop platform installs")
}

fn corner_world(cursor: &TargetCursor, scheduler: &Scheduler, index: usize) -> Point {
    let visual = cursor.visual();
    Point::new(
        scheduler.get(visual.wrapper, Channel::X) + scheduler.get(visual.corners[index], Channel::X),
        scheduler.get(visual.wrapper, Channel::Y) + scheduler.get(visual.corners[index], Channel::Y),
    )
}

fn rotation(cursor: &TargetCursor, scheduler: &Scheduler) -> f32 {
    scheduler.get(cursor.visual().wrapper, Channel::Rotation)
}

fn strength(cursor: &TargetCursor, scheduler: &Scheduler) -> f32 {
    scheduler.get(cursor.visual().strength, Channel::Value)
}

#[test]
fn test_corners_frame_target_when_locked() {
    let mut scheduler = Scheduler::new();
    let (scene, target, _, _) = page();
    let mut cursor = installed(&mut scheduler);

    cursor.handle_event(&mut scheduler, &scene, &Event::MouseOver { element: target });
    cursor.advance(&mut scheduler, 1.0);

    assert_eq!(cursor.phase(&scheduler), CursorPhase::Locked);
    // Rect (100, 100) 100x40, border 3, corner size 12
    assert_eq!(corner_world(&cursor, &scheduler, 0), Point::new(97.0, 97.0));
    assert_eq!(corner_world(&cursor, &scheduler, 1), Point::new(191.0, 97.0));
    assert_eq!(corner_world(&cursor, &scheduler, 2), Point::new(191.0, 131.0));
    assert_eq!(corner_world(&cursor, &scheduler, 3), Point::new(97.0, 131.0));
}

#[test]
fn test_enter_leave_cycles_return_to_idle() {
    let mut scheduler = Scheduler::new();
    let (scene, target, _, _) = page();
    let mut cursor = installed(&mut scheduler);

    for _ in 0..3 {
        cursor.handle_event(&mut scheduler, &scene, &Event::MouseOver { element: target });
        cursor.advance(&mut scheduler, 1.0);
        assert_eq!(cursor.phase(&scheduler), CursorPhase::Locked);
        assert_eq!(cursor.active_target(), Some(target));

        cursor.handle_event(&mut scheduler, &scene, &Event::MouseLeave { element: target });
        cursor.advance(&mut scheduler, 1.0);
        assert_eq!(cursor.phase(&scheduler), CursorPhase::Idle);
        assert_eq!(cursor.active_target(), None);
        assert_eq!(strength(&cursor, &scheduler), 0.0);
    }
}

#[test]
fn test_corners_return_to_rest_after_leave() {
    let mut scheduler = Scheduler::new();
    let (scene, target, _, _) = page();
    let mut cursor = installed(&mut scheduler);

    cursor.handle_event(&mut scheduler, &scene, &Event::MouseOver { element: target });
    cursor.advance(&mut scheduler, 1.0);
    cursor.handle_event(&mut scheduler, &scene, &Event::MouseLeave { element: target });
    cursor.advance(&mut scheduler, 0.5);

    // Rest offsets for corner size 12: near edge 6, far edge -18
    let visual = cursor.visual();
    let rest = [
        Point::new(-18.0, -18.0),
        Point::new(6.0, -18.0),
        Point::new(6.0, 6.0),
        Point::new(-18.0, 6.0),
    ];
    for (node, expected) in visual.corners.iter().zip(rest) {
        assert_eq!(scheduler.get(*node, Channel::X), expected.x);
        assert_eq!(scheduler.get(*node, Channel::Y), expected.y);
    }
}

#[test]
fn test_strength_ramps_monotonically() {
    let mut scheduler = Scheduler::new();
    let (scene, target, _, _) = page();
    let mut cursor = installed(&mut scheduler);

    cursor.handle_event(&mut scheduler, &scene, &Event::MouseOver { element: target });
    let mut previous = strength(&cursor, &scheduler);
    assert_eq!(previous, 0.0);
    for _ in 0..20 {
        cursor.advance(&mut scheduler, 0.05);
        let current = strength(&cursor, &scheduler);
        assert!(current >= previous);
        assert!((0.0..=1.0).contains(&current));
        previous = current;
    }
    assert_eq!(previous, 1.0);
}

#[test]
fn test_switching_targets_keeps_one_blend_ticker() {
    let mut scheduler = Scheduler::new();
    let (scene, target, _, button) = page();
    let mut cursor = installed(&mut scheduler);

    cursor.handle_event(&mut scheduler, &scene, &Event::MouseOver { element: target });
    cursor.advance(&mut scheduler, 0.3);
    cursor.handle_event(&mut scheduler, &scene, &Event::MouseOver { element: button });
    cursor.advance(&mut scheduler, 0.3);

    assert_eq!(cursor.active_target(), Some(button));
    assert_eq!(scheduler.ticker_count(), 1);
    // Strength restarted from zero for the new target
    assert!(strength(&cursor, &scheduler) < 1.0);
}

#[test]
fn test_nested_button_wins_over_card() {
    let mut scheduler = Scheduler::new();
    let (scene, _, card, button) = page();
    let mut cursor = installed(&mut scheduler);

    cursor.handle_event(&mut scheduler, &scene, &Event::MouseOver { element: button });
    assert_eq!(cursor.active_target(), Some(button));

    // Sliding off the button onto the card body switches the lock upward
    cursor.handle_event(&mut scheduler, &scene, &Event::MouseOver { element: card });
    assert_eq!(cursor.active_target(), Some(card));
}

#[test]
fn test_spin_resumes_on_whole_turn() {
    let mut scheduler = Scheduler::new();
    let (scene, target, _, _) = page();
    let mut cursor = installed(&mut scheduler);

    cursor.handle_event(&mut scheduler, &scene, &Event::MouseOver { element: target });
    cursor.advance(&mut scheduler, 0.5);
    assert_eq!(rotation(&cursor, &scheduler), 0.0);

    cursor.handle_event(&mut scheduler, &scene, &Event::MouseLeave { element: target });
    // Past the settle delay the cursor aligns to the next whole turn, then
    // the idle spin takes over.
    cursor.advance(&mut scheduler, 0.1);
    cursor.advance(&mut scheduler, 1.0);
    assert_eq!(rotation(&cursor, &scheduler), 360.0);

    cursor.advance(&mut scheduler, 0.25);
    assert_eq!(rotation(&cursor, &scheduler), 450.0);
}

#[test]
fn test_reentry_during_settle_keeps_spin_paused() {
    let mut scheduler = Scheduler::new();
    let (scene, target, _, _) = page();
    let mut cursor = installed(&mut scheduler);

    cursor.handle_event(&mut scheduler, &scene, &Event::MouseOver { element: target });
    cursor.advance(&mut scheduler, 0.5);
    cursor.handle_event(&mut scheduler, &scene, &Event::MouseLeave { element: target });
    // Back on the target before the settle delay elapses
    cursor.handle_event(&mut scheduler, &scene, &Event::MouseOver { element: target });
    cursor.advance(&mut scheduler, 1.0);

    assert_eq!(cursor.phase(&scheduler), CursorPhase::Locked);
    assert_eq!(rotation(&cursor, &scheduler), 0.0);
}

#[test]
fn test_scroll_drops_dislodged_target() {
    let mut scheduler = Scheduler::new();
    let (mut scene, target, _, _) = page();
    let mut cursor = installed(&mut scheduler);

    // Park the pointer over the target, then lock on
    cursor.handle_event(
        &mut scheduler,
        &scene,
        &Event::MouseMove { x: 150.0, y: 120.0 },
    );
    cursor.advance(&mut scheduler, 0.2);
    cursor.handle_event(&mut scheduler, &scene, &Event::MouseOver { element: target });
    cursor.advance(&mut scheduler, 1.0);
    assert_eq!(cursor.phase(&scheduler), CursorPhase::Locked);

    // A gentle scroll that keeps the target under the pointer changes nothing
    scene.scroll_by(0.0, 10.0);
    let response = cursor.handle_event(
        &mut scheduler,
        &scene,
        &Event::Scroll {
            delta_x: 0.0,
            delta_y: 10.0,
        },
    );
    assert_eq!(response, EventResponse::Ignored);
    assert_eq!(cursor.active_target(), Some(target));

    // Scrolling the target away releases the lock in the same event
    scene.scroll_by(0.0, 300.0);
    let response = cursor.handle_event(
        &mut scheduler,
        &scene,
        &Event::Scroll {
            delta_x: 0.0,
            delta_y: 300.0,
        },
    );
    assert_eq!(response, EventResponse::Handled);
    assert_eq!(cursor.active_target(), None);
    assert_eq!(cursor.phase(&scheduler), CursorPhase::Idle);
}

use reticle::prelude::*;

/// One 60 fps frame in seconds
const FRAME: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let platform = Platform::default();
    let mut scheduler = Scheduler::new();

    // A small page: a hero card with a nested call-to-action button, plus a
    // magnetic nav link near the top-left corner.
    let mut scene = SceneGraph::new();
    let card = scene.insert(
        None,
        Rect::new(760.0, 420.0, 400.0, 240.0),
        ElementFlags::TARGETABLE,
    );
    let button = scene.insert(
        Some(card),
        Rect::new(800.0, 560.0, 160.0, 56.0),
        ElementFlags::TARGETABLE,
    );
    let link = scene.insert(
        None,
        Rect::new(120.0, 80.0, 220.0, 40.0),
        ElementFlags::TARGETABLE | ElementFlags::MAGNETIC,
    );

    let Some(mut cursor) = TargetCursor::install(CursorConfig::new(), &platform, &mut scheduler)
    else {
        println!("target cursor disabled on this platform");
        return;
    };
    let mut magnet = Magnet::new(&mut scheduler, link, MagnetOptions::new());
    println!(
        "cursor installed, native cursor hidden: {}",
        cursor.hides_native_cursor()
    );

    // Glide toward the nav link; the magnet starts pulling inside its padding
    glide(
        &mut cursor,
        &mut magnet,
        &mut scheduler,
        &scene,
        Point::new(230.0, 100.0),
        30,
    );
    println!("magnet pull at link: {:?}", magnet.offset(&scheduler));

    // Hover the link: the spin stops and the corners fly out to frame it
    cursor.handle_event(&mut scheduler, &scene, &Event::MouseOver { element: link });
    settle(&mut cursor, &mut scheduler, 60);
    println!("phase over link: {:?}", cursor.phase(&scheduler));
    if let Some(frame) = cursor.frame() {
        println!("frame corners: {frame:?}");
    }

    // Click it
    cursor.handle_event(
        &mut scheduler,
        &scene,
        &Event::MouseDown {
            button: MouseButton::Left,
        },
    );
    settle(&mut cursor, &mut scheduler, 12);
    cursor.handle_event(
        &mut scheduler,
        &scene,
        &Event::MouseUp {
            button: MouseButton::Left,
        },
    );
    settle(&mut cursor, &mut scheduler, 12);

    // Leave: corners drift home and the idle spin resumes on a whole turn
    cursor.handle_event(&mut scheduler, &scene, &Event::MouseLeave { element: link });
    settle(&mut cursor, &mut scheduler, 30);
    println!("phase after leave: {:?}", cursor.phase(&scheduler));

    // The nested button wins over its card: resolution is innermost-first
    glide(
        &mut cursor,
        &mut magnet,
        &mut scheduler,
        &scene,
        Point::new(880.0, 590.0),
        40,
    );
    cursor.handle_event(
        &mut scheduler,
        &scene,
        &Event::MouseOver { element: button },
    );
    settle(&mut cursor, &mut scheduler, 60);
    println!(
        "active target: {:?} (the button, not the card)",
        cursor.active_target()
    );

    // Scrolling slides the page out from under the pointer; the lock drops
    scene.scroll_by(0.0, 300.0);
    let response = cursor.handle_event(
        &mut scheduler,
        &scene,
        &Event::Scroll {
            delta_x: 0.0,
            delta_y: 300.0,
        },
    );
    settle(&mut cursor, &mut scheduler, 30);
    println!(
        "scroll response: {response:?}, phase now: {:?}",
        cursor.phase(&scheduler)
    );
}

/// Feed a straight-line pointer glide, one event per frame.
fn glide(
    cursor: &mut TargetCursor,
    magnet: &mut Magnet,
    scheduler: &mut Scheduler,
    scene: &SceneGraph,
    to: Point,
    frames: u32,
) {
    let from = cursor.pointer().position();
    for i in 1..=frames {
        let t = i as f32 / frames as f32;
        let x = from.x + (to.x - from.x) * t;
        let y = from.y + (to.y - from.y) * t;
        cursor.handle_event(scheduler, scene, &Event::MouseMove { x, y });
        magnet.pointer_move(scheduler, scene, x, y);
        cursor.advance(scheduler, FRAME);
    }
}

/// Let the animations play out for a number of frames.
fn settle(cursor: &mut TargetCursor, scheduler: &mut Scheduler, frames: u32) {
    for _ in 0..frames {
        cursor.advance(scheduler, FRAME);
    }
}

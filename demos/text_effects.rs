use rand::rngs::StdRng;
use rand::SeedableRng;
use reticle::prelude::*;

/// One 60 fps frame in seconds
const FRAME: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    decrypt_headline();
    blur_reveal_on_scroll();
}

/// Sequential scramble, uncovering characters from the center outward.
fn decrypt_headline() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut scramble = ScrambleText::new(
        "TARGET ACQUIRED",
        ScrambleOptions::new()
            .sequential(true)
            .reveal_from(RevealFrom::Center),
    );

    scramble.start();
    println!("{}", scramble.display());
    while scramble.is_running() {
        if scramble.advance(FRAME, &mut rng) {
            println!("{}", scramble.display());
        }
    }
}

/// Word-by-word blur reveal, triggered when the headline scrolls into view.
fn blur_reveal_on_scroll() {
    let mut scheduler = Scheduler::new();
    let mut scene = SceneGraph::new();
    let headline = scene.insert(
        None,
        Rect::new(80.0, 900.0, 600.0, 80.0),
        ElementFlags::empty(),
    );
    let viewport = Rect::new(0.0, 0.0, 1280.0, 720.0);
    let mut reveal = BlurReveal::new(
        &mut scheduler,
        headline,
        "animations that feel intentional",
        BlurRevealOptions::new().slide_from(SlideFrom::Bottom),
    );

    reveal.update(&mut scheduler, &scene, viewport);
    println!("\nbefore scroll, triggered: {}", reveal.is_triggered());

    scene.scroll_by(0.0, 500.0);
    reveal.update(&mut scheduler, &scene, viewport);
    println!("after scroll, triggered: {}", reveal.is_triggered());

    for _ in 0..9 {
        scheduler.advance(0.2);
        let line: Vec<String> = (0..reveal.words().len())
            .map(|w| {
                let style = reveal.style(&scheduler, w);
                format!(
                    "{} (blur {:.1}, opacity {:.2}, y {:+.1})",
                    reveal.words()[w],
                    style.blur,
                    style.opacity,
                    style.shift_y
                )
            })
            .collect();
        println!("t={:.1}s  {}", scheduler.now(), line.join("  "));
    }
}

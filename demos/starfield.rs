use rand::rngs::StdRng;
use rand::SeedableRng;
use reticle::prelude::*;

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 240.0;
const COLUMNS: usize = 80;
const ROWS: usize = 24;

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(2024);
    let mut field = Starfield::new(
        WIDTH,
        HEIGHT,
        StarfieldConfig::new().particle_count(250),
        &mut rng,
    );

    // Sweep the pointer across the middle band, printing every 30th frame
    for frame in 0..90 {
        let t = frame as f32 / 90.0;
        field.pointer_move(WIDTH * (0.25 + 0.5 * t), HEIGHT / 2.0);
        field.step(&mut rng);
        if frame % 30 == 29 {
            draw(&field);
        }
    }

    // Let the camera drift back to center
    field.pointer_left();
    for _ in 0..60 {
        field.step(&mut rng);
    }
    draw(&field);
}

/// Plot the projected sprites on a character grid.
fn draw(field: &Starfield) {
    let mut grid = vec![vec![' '; COLUMNS]; ROWS];
    let mut visible = 0;
    for sprite in field.project() {
        let col = (sprite.x / (WIDTH / COLUMNS as f32)).floor() as isize;
        let row = (sprite.y / (HEIGHT / ROWS as f32)).floor() as isize;
        if (0..COLUMNS as isize).contains(&col) && (0..ROWS as isize).contains(&row) {
            visible += 1;
            let glyph = if sprite.trail.is_some() {
                '-'
            } else if sprite.alpha > 0.6 {
                if sprite.bright {
                    '*'
                } else {
                    '+'
                }
            } else {
                '.'
            };
            grid[row as usize][col as usize] = glyph;
        }
    }

    let pointer = field.pointer();
    println!(
        "pointer ({:.0}, {:.0}), {} of {} stars in view",
        pointer.x,
        pointer.y,
        visible,
        field.particle_count()
    );
    for row in grid {
        let line: String = row.into_iter().collect();
        println!("{line}");
    }
    println!();
}

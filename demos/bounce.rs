//! Minimal use of the sprite core without scene files: two sprites built
//! from static art, bounced by hand, animated in the terminal.
//!
//! Run with: cargo run --example bounce

use sprite_engine::core::{Canvas, Engine, FrameLimiter, MonoCanvas, Sprite};
use sprite_engine::demo::{BALL, INVADER};
use sprite_engine::display;
use sprite_engine::math::Point;
use sprite_engine::Drawable;

fn main() {
    env_logger::init();

    let mut engine = Engine::new(MonoCanvas::new(96, 48));
    let mut limiter = FrameLimiter::new(30.0);

    let mut ball: Sprite = Sprite::new(Point::new(2, 2), Point::new(8, 8), BALL.bits);
    let mut ball_vel = Point::new(2, 1);

    let mut invader: Sprite = Sprite::new(Point::new(60, 30), Point::new(8, 8), INVADER.bits);
    let mut invader_vel = Point::new(-1, -2);

    print!("{}", display::CLEAR_SCREEN);

    for _ in 0..600 {
        let (width, height) = engine.canvas().dimensions();

        bounce(&mut ball, &mut ball_vel, width, height);
        bounce(&mut invader, &mut invader_vel, width, height);

        engine.frame(|canvas| {
            ball.draw(canvas);
            invader.draw(canvas);
        });

        print!(
            "{}{}",
            display::CURSOR_HOME,
            display::half_blocks(engine.canvas())
        );
        limiter.wait();
    }

    println!("{} frames", engine.frame_count());
}

/// Reflect the velocity at the canvas edges, then advance one step.
fn bounce(sprite: &mut Sprite<'_>, velocity: &mut Point, width: u32, height: u32) {
    let next = sprite.bounds().translated(*velocity);

    if next.p1.x < 0 || next.p2.x >= width as i32 {
        velocity.x = -velocity.x;
    }
    if next.p1.y < 0 || next.p2.y >= height as i32 {
        velocity.y = -velocity.y;
    }

    sprite.move_by(*velocity);
}

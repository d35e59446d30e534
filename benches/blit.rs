use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sprite_engine::core::{Canvas, Engine, MonoCanvas, Sprite};
use sprite_engine::demo::{self, BALL};
use sprite_engine::math::Point;
use sprite_engine::Drawable;

fn bench_draw_bitmap1(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_bitmap1");

    for &size in &[8i32, 16, 32] {
        let stride = (size as usize + 7) / 8;
        let bitmap = vec![0xA5u8; stride * size as usize];

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut canvas = MonoCanvas::new(128, 64);
            b.iter(|| {
                canvas.draw_bitmap1(
                    black_box(17),
                    black_box(9),
                    size,
                    size,
                    black_box(&bitmap),
                );
            });
        });
    }

    group.finish();
}

fn bench_sprite_draw(c: &mut Criterion) {
    c.bench_function("sprite_draw_8x8", |b| {
        let sprite: Sprite = Sprite::new(Point::new(33, 21), Point::new(8, 8), BALL.bits);
        let mut canvas = MonoCanvas::new(128, 64);

        b.iter(|| sprite.draw(black_box(&mut canvas)));
    });
}

fn bench_full_frame(c: &mut Criterion) {
    c.bench_function("default_scene_frame", |b| {
        let scene = demo::default_scene();
        let mut engine = Engine::new(MonoCanvas::new(scene.width, scene.height));
        let mut sprites = demo::build_sprites(&scene);

        b.iter(|| {
            let (width, height) = engine.canvas().dimensions();
            engine.frame(|canvas| {
                for sprite in sprites.iter_mut() {
                    sprite.step(width, height);
                    sprite.draw(canvas);
                }
            });
        });
    });
}

criterion_group!(benches, bench_draw_bitmap1, bench_sprite_draw, bench_full_frame);
criterion_main!(benches);

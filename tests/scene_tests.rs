use sprite_engine::core::{Canvas, Engine, MonoCanvas};
use sprite_engine::demo;
use sprite_engine::loaders::{parse_scene, parse_xbm};
use sprite_engine::math::Point;

const SCENE: &str = r#####"{
    "width": 32,
    "height": 16,
    "bitmaps": {
        "block": ["####", "####", "####", "####"]
    },
    "sprites": [
        { "bitmap": "block", "pos": [0, 6], "velocity": [2, 0] },
        { "bitmap": "block", "pos": [20, 0], "mode": "masked" }
    ]
}"#####;

#[test]
fn test_scene_runs_deterministically() {
    let scene = parse_scene(SCENE).unwrap();
    let mut engine = Engine::new(MonoCanvas::new(scene.width, scene.height));
    let mut sprites = demo::build_sprites(&scene);

    for _ in 0..5 {
        let (width, height) = engine.canvas().dimensions();
        engine.frame(|canvas| {
            for sprite in sprites.iter_mut() {
                sprite.step(width, height);
                sprite.draw(canvas);
            }
        });
    }

    // Mover advanced 2 px/frame for 5 frames from x = 0
    assert_eq!(sprites[0].bounds().p1, Point::new(10, 6));
    assert!(engine.canvas().pixel(10, 6));
    assert!(!engine.canvas().pixel(0, 6));

    // The static sprite never moved
    assert_eq!(sprites[1].bounds().p1, Point::new(20, 0));
    assert!(engine.canvas().pixel(20, 0));
}

#[test]
fn test_scene_sprite_bounces_between_walls() {
    let source = r###"{
        "width": 10, "height": 4,
        "bitmaps": { "b": ["##", "##"] },
        "sprites": [ { "bitmap": "b", "pos": [6, 1], "velocity": [1, 0] } ]
    }"###;

    let scene = parse_scene(source).unwrap();
    let mut sprites = demo::build_sprites(&scene);

    let mut xs = Vec::new();
    for _ in 0..6 {
        sprites[0].step(scene.width, scene.height);
        xs.push(sprites[0].bounds().p1.x);
    }

    // Walks to the right wall (p1 = 8 puts p2 at 9), then reflects
    assert_eq!(xs, vec![7, 8, 7, 6, 5, 4]);
}

#[test]
fn test_default_scene_animates_within_bounds() {
    let scene = demo::default_scene();
    let mut engine = Engine::new(MonoCanvas::new(scene.width, scene.height));
    let mut sprites = demo::build_sprites(&scene);

    for _ in 0..500 {
        let (width, height) = engine.canvas().dimensions();
        engine.frame(|canvas| {
            for sprite in sprites.iter_mut() {
                sprite.step(width, height);
                sprite.draw(canvas);
            }
        });
    }

    // After many bounces every sprite is still fully on the canvas
    for sprite in &sprites {
        let bounds = sprite.bounds();
        assert!(bounds.p1.x >= 0 && bounds.p1.y >= 0);
        assert!(bounds.p2.x < scene.width as i32);
        assert!(bounds.p2.y < scene.height as i32);
    }
}

#[test]
fn test_xbm_bitmap_drives_a_sprite() {
    let xbm = "\
#define arrow_width 8
#define arrow_height 4
static unsigned char arrow_bits[] = {
   0x18, 0x3c, 0x7e, 0x18};
";

    let bitmap = parse_xbm(xbm).unwrap();
    assert_eq!(bitmap.size(), Point::new(8, 4));

    let mut canvas = MonoCanvas::new(8, 4);
    canvas.draw_bitmap1(0, 0, 8, 4, bitmap.bits());

    assert_eq!(canvas.rows()[0], "...##...");
    assert_eq!(canvas.rows()[2], ".######.");
}

use anyhow::Result;
use clap::Parser;

use sprite_engine::cli::{Cli, DisplayKind};
use sprite_engine::core::{Canvas, Engine, FrameLimiter, MonoCanvas};
use sprite_engine::demo::{self, SceneSprite};
use sprite_engine::display;
use sprite_engine::loaders::scene::{load_scene_file, SceneData};
use sprite_engine::sim::{self, SimOptions};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let scene = match &cli.scene {
        Some(path) => load_scene_file(path)?,
        None => demo::default_scene(),
    };

    println!(
        "sprite-engine: {}x{} canvas, {} sprites",
        scene.width,
        scene.height,
        scene.sprites.len()
    );

    match cli.display {
        DisplayKind::Headless => run_headless(&scene, &cli),
        DisplayKind::Terminal => run_terminal(&scene, &cli),
        DisplayKind::Window => run_window(scene, &cli),
    }
}

/// Advance every sprite and draw the frame.
fn step_and_draw(engine: &mut Engine<MonoCanvas>, sprites: &mut [SceneSprite<'_>]) {
    let (width, height) = engine.canvas().dimensions();

    engine.frame(|canvas| {
        for sprite in sprites.iter_mut() {
            sprite.step(width, height);
            sprite.draw(canvas);
        }
    });
}

fn run_headless(scene: &SceneData, cli: &Cli) -> Result<()> {
    let mut engine = Engine::new(MonoCanvas::new(scene.width, scene.height));
    let mut sprites = demo::build_sprites(scene);
    let frames = cli.frames.unwrap_or(300);

    for _ in 0..frames {
        step_and_draw(&mut engine, &mut sprites);
    }

    print!("{}", display::half_blocks(engine.canvas()));
    println!(
        "{} frames rendered  [{}]",
        engine.frame_count(),
        chrono::Local::now().format("%H:%M:%S")
    );
    Ok(())
}

fn run_terminal(scene: &SceneData, cli: &Cli) -> Result<()> {
    let mut engine = Engine::new(MonoCanvas::new(scene.width, scene.height));
    let mut sprites = demo::build_sprites(scene);
    let mut limiter = FrameLimiter::new(cli.fps);

    print!("{}", display::CLEAR_SCREEN);

    loop {
        step_and_draw(&mut engine, &mut sprites);
        print!(
            "{}{}",
            display::CURSOR_HOME,
            display::half_blocks(engine.canvas())
        );

        if let Some(frames) = cli.frames {
            if engine.frame_count() >= frames {
                break;
            }
        }

        limiter.wait();
    }

    Ok(())
}

fn run_window(scene: SceneData, cli: &Cli) -> Result<()> {
    let engine = Engine::new(MonoCanvas::new(scene.width, scene.height));
    let options = SimOptions {
        title: "sprite-engine".to_string(),
        scale: cli.scale,
        fps: cli.fps,
    };

    println!("Preview window - Escape to quit");

    let mut sprites = demo::build_sprites(&scene);
    sim::run(engine, options, move |engine| {
        step_and_draw(engine, &mut sprites);
    })
}

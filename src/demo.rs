use crate::core::canvas::{BlitMode, Canvas};
use crate::core::object::Drawable;
use crate::core::sprite::{MaskedBlit, OpaqueBlit, Sprite, XorBlit};
use crate::loaders::bitmap::BitmapData;
use crate::loaders::scene::{SceneData, SpriteSpec};
use crate::math::{Point, Rect};

/// Built-in 1-bpp art in the canvas blit packing
#[derive(Debug, Clone, Copy)]
pub struct SpriteArt {
    pub width: u32,
    pub height: u32,
    pub bits: &'static [u8],
}

impl SpriteArt {
    fn to_bitmap(&self) -> BitmapData {
        BitmapData::new(self.width, self.height, self.bits.to_vec())
            .expect("built-in art matches its declared extents")
    }
}

pub static BALL: SpriteArt = SpriteArt {
    width: 8,
    height: 8,
    bits: &[0x3C, 0x7E, 0xFF, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C],
};

pub static INVADER: SpriteArt = SpriteArt {
    width: 8,
    height: 8,
    bits: &[0x18, 0x3C, 0x7E, 0xDB, 0xFF, 0x24, 0x5A, 0xA5],
};

pub static HEART: SpriteArt = SpriteArt {
    width: 8,
    height: 8,
    bits: &[0x66, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C, 0x18, 0x00],
};

pub static FRAME_16X8: SpriteArt = SpriteArt {
    width: 16,
    height: 8,
    bits: &[
        0xFF, 0xFF, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0xFF,
        0xFF,
    ],
};

/// Builds ready-made scenes from built-in art.
pub struct DemoBuilder {
    width: u32,
    height: u32,
    bitmaps: Vec<BitmapData>,
    sprites: Vec<SpriteSpec>,
}

impl DemoBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bitmaps: Vec::new(),
            sprites: Vec::new(),
        }
    }

    /// Add one sprite placement. Velocity is pixels per frame for the
    /// bouncing runner.
    pub fn sprite(mut self, art: &SpriteArt, pos: Point, velocity: Point, mode: BlitMode) -> Self {
        let bitmap = self.bitmaps.len();
        self.bitmaps.push(art.to_bitmap());
        self.sprites.push(SpriteSpec {
            bitmap,
            pos,
            velocity,
            mode,
        });
        self
    }

    pub fn build(self) -> SceneData {
        SceneData {
            width: self.width,
            height: self.height,
            bitmaps: self.bitmaps,
            sprites: self.sprites,
        }
    }
}

/// The scene the binary runs when no scene file is given: a handful of
/// sprites bouncing around a 128x64 canvas, one per blit mode.
pub fn default_scene() -> SceneData {
    DemoBuilder::new(128, 64)
        .sprite(&BALL, Point::new(4, 4), Point::new(2, 1), BlitMode::Opaque)
        .sprite(
            &INVADER,
            Point::new(70, 30),
            Point::new(-1, 2),
            BlitMode::Masked,
        )
        .sprite(
            &HEART,
            Point::new(100, 10),
            Point::new(-2, -1),
            BlitMode::Masked,
        )
        .sprite(
            &FRAME_16X8,
            Point::new(40, 40),
            Point::new(1, -2),
            BlitMode::Xor,
        )
        .build()
}

/// A scene sprite with its blit mode bound once, at construction.
///
/// Sprite variants are distinct concrete types; a scene that mixes modes
/// needs a tagged wrapper to hold them in one list. Dispatch happens here
/// exactly once per frame, the blit underneath stays statically bound.
pub struct SceneSprite<'b> {
    kind: Kind<'b>,
    velocity: Point,
}

enum Kind<'b> {
    Opaque(Sprite<'b, OpaqueBlit>),
    Masked(Sprite<'b, MaskedBlit>),
    Xor(Sprite<'b, XorBlit>),
}

impl<'b> SceneSprite<'b> {
    /// Instantiate a placement against the scene's bitmap storage.
    pub fn from_spec(spec: &SpriteSpec, bitmaps: &'b [BitmapData]) -> Self {
        let art = &bitmaps[spec.bitmap];
        let kind = match spec.mode {
            BlitMode::Opaque => Kind::Opaque(Sprite::new(spec.pos, art.size(), art.bits())),
            BlitMode::Masked => Kind::Masked(Sprite::new(spec.pos, art.size(), art.bits())),
            BlitMode::Xor => Kind::Xor(Sprite::new(spec.pos, art.size(), art.bits())),
        };

        Self {
            kind,
            velocity: spec.velocity,
        }
    }

    pub fn bounds(&self) -> Rect {
        match &self.kind {
            Kind::Opaque(s) => s.bounds(),
            Kind::Masked(s) => s.bounds(),
            Kind::Xor(s) => s.bounds(),
        }
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        match &self.kind {
            Kind::Opaque(s) => s.draw(canvas),
            Kind::Masked(s) => s.draw(canvas),
            Kind::Xor(s) => s.draw(canvas),
        }
    }

    /// Advance one frame, reflecting the velocity off the canvas edges.
    pub fn step(&mut self, width: u32, height: u32) {
        let next = self.bounds().translated(self.velocity);

        if next.p1.x < 0 || next.p2.x >= width as i32 {
            self.velocity.x = -self.velocity.x;
        }
        if next.p1.y < 0 || next.p2.y >= height as i32 {
            self.velocity.y = -self.velocity.y;
        }

        let delta = self.velocity;
        match &mut self.kind {
            Kind::Opaque(s) => s.move_by(delta),
            Kind::Masked(s) => s.move_by(delta),
            Kind::Xor(s) => s.move_by(delta),
        }
    }
}

/// Instantiate every sprite of a scene, borrowing from its bitmap storage.
pub fn build_sprites(scene: &SceneData) -> Vec<SceneSprite<'_>> {
    scene
        .sprites
        .iter()
        .map(|spec| SceneSprite::from_spec(spec, &scene.bitmaps))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::canvas::MonoCanvas;

    #[test]
    fn builtin_art_is_well_formed() {
        for art in [&BALL, &INVADER, &HEART, &FRAME_16X8] {
            let expected = (art.width as usize + 7) / 8 * art.height as usize;
            assert_eq!(art.bits.len(), expected);
        }
    }

    #[test]
    fn default_scene_references_are_valid() {
        let scene = default_scene();

        assert!(!scene.sprites.is_empty());
        for spec in &scene.sprites {
            assert!(spec.bitmap < scene.bitmaps.len());

            let size = scene.bitmap(spec).size();
            assert!(spec.pos.x >= 0 && spec.pos.x + size.x <= scene.width as i32);
            assert!(spec.pos.y >= 0 && spec.pos.y + size.y <= scene.height as i32);
        }
    }

    #[test]
    fn scene_sprites_draw_at_their_positions() {
        let scene = DemoBuilder::new(32, 16)
            .sprite(&BALL, Point::new(2, 2), Point::ZERO, BlitMode::Opaque)
            .build();
        let sprites = build_sprites(&scene);

        let mut canvas = MonoCanvas::new(scene.width, scene.height);
        for sprite in &sprites {
            sprite.draw(&mut canvas);
        }

        // Center of the ball lands inside its bounds
        assert!(canvas.pixel(5, 5));
        assert!(!canvas.pixel(20, 5));
    }

    #[test]
    fn step_reflects_at_right_edge() {
        let scene = DemoBuilder::new(16, 16)
            .sprite(&BALL, Point::new(7, 4), Point::new(2, 0), BlitMode::Opaque)
            .build();
        let mut sprites = build_sprites(&scene);
        let sprite = &mut sprites[0];

        // Next step would cross x = 15, so the velocity flips instead
        sprite.step(16, 16);
        assert_eq!(sprite.velocity(), Point::new(-2, 0));
        assert_eq!(sprite.bounds().p1, Point::new(5, 4));
    }

    #[test]
    fn step_reflects_at_top_edge() {
        let scene = DemoBuilder::new(16, 16)
            .sprite(&BALL, Point::new(4, 1), Point::new(0, -2), BlitMode::Opaque)
            .build();
        let mut sprites = build_sprites(&scene);
        let sprite = &mut sprites[0];

        sprite.step(16, 16);
        assert_eq!(sprite.velocity(), Point::new(0, 2));
        assert_eq!(sprite.bounds().p1, Point::new(4, 3));
    }
}

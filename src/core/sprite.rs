use std::marker::PhantomData;

use super::canvas::Canvas;
use super::object::{Drawable, Object};
use crate::math::{Point, Rect};

/// Compile-time draw binding for sprites.
///
/// A strategy is a zero-sized marker type; `Sprite<D>` resolves its `draw`
/// to a direct call of `D::draw` with no vtable in between, so each sprite
/// variant is a distinct concrete type with its own non-virtual draw entry
/// point. The strategy receives the concrete `Sprite` it was bound to,
/// which is why no cast from a generic object is ever needed.
pub trait SpriteDraw: Sized {
    fn draw<C: Canvas>(sprite: &Sprite<'_, Self>, canvas: &mut C);
}

/// Default strategy: one opaque 1-bpp blit of the sprite's bitmap over its
/// bounds. Set bits light pixels, clear bits dark them.
#[derive(Debug, Clone, Copy)]
pub struct OpaqueBlit;

impl SpriteDraw for OpaqueBlit {
    fn draw<C: Canvas>(sprite: &Sprite<'_, Self>, canvas: &mut C) {
        let r = sprite.bounds();
        canvas.draw_bitmap1(r.p1.x, r.p1.y, r.width(), r.height(), sprite.bitmap());
    }
}

/// Transparent strategy: clear bits leave the canvas untouched.
#[derive(Debug, Clone, Copy)]
pub struct MaskedBlit;

impl SpriteDraw for MaskedBlit {
    fn draw<C: Canvas>(sprite: &Sprite<'_, Self>, canvas: &mut C) {
        let r = sprite.bounds();
        canvas.draw_bitmap1_masked(r.p1.x, r.p1.y, r.width(), r.height(), sprite.bitmap());
    }
}

/// Toggling strategy: set bits invert the canvas pixel underneath.
#[derive(Debug, Clone, Copy)]
pub struct XorBlit;

impl SpriteDraw for XorBlit {
    fn draw<C: Canvas>(sprite: &Sprite<'_, Self>, canvas: &mut C) {
        let r = sprite.bounds();
        canvas.draw_bitmap1_xor(r.p1.x, r.p1.y, r.width(), r.height(), sprite.bitmap());
    }
}

/// Renders nothing. A sprite bound to `NoDraw` keeps its geometry and
/// bitmap state but issues zero canvas calls.
#[derive(Debug, Clone, Copy)]
pub struct NoDraw;

impl SpriteDraw for NoDraw {
    fn draw<C: Canvas>(_sprite: &Sprite<'_, Self>, _canvas: &mut C) {}
}

/// Positioned object plus a replaceable, non-owning reference to packed
/// 1-bpp bitmap data.
///
/// The bitmap is owned by the caller (typically `static` art or a loaded
/// asset) and must use the canvas blit packing: row-major, MSB-first, rows
/// padded to byte boundaries. `set_bitmap` never validates that the data
/// matches the sprite's extents; a short bitmap is a caller contract
/// violation.
#[derive(Clone, Copy)]
pub struct Sprite<'b, D: SpriteDraw = OpaqueBlit> {
    object: Object,
    bitmap: &'b [u8],
    draw: PhantomData<D>,
}

/// Sprite whose size is fixed at construction.
///
/// Same contract as [`Sprite`]; the name documents the convention that the
/// caller will not resize it. Nothing is enforced.
pub type FixedSprite<'b, D = OpaqueBlit> = Sprite<'b, D>;

impl<'b, D: SpriteDraw> Sprite<'b, D> {
    /// Place a sprite with top-left `pos`, spanning `size` pixels, showing
    /// `bitmap`.
    pub fn new(pos: Point, size: Point, bitmap: &'b [u8]) -> Self {
        Self {
            object: Object::new(pos, size),
            bitmap,
            draw: PhantomData,
        }
    }

    /// Replace the bitmap reference. O(1), no copy, no size validation.
    pub fn set_bitmap(&mut self, bitmap: &'b [u8]) {
        self.bitmap = bitmap;
    }

    /// The bitmap currently shown (the reference itself, not a copy).
    pub fn bitmap(&self) -> &'b [u8] {
        self.bitmap
    }

    pub fn move_to(&mut self, pos: Point) {
        self.object.move_to(pos);
    }

    pub fn move_by(&mut self, delta: Point) {
        self.object.move_by(delta);
    }
}

impl<'b, D: SpriteDraw> Drawable for Sprite<'b, D> {
    fn bounds(&self) -> Rect {
        self.object.bounds()
    }

    fn draw<C: Canvas>(&self, canvas: &mut C) {
        D::draw(self, canvas);
    }
}

pub mod canvas;
pub mod engine;
pub mod object;
pub mod sprite;
pub mod timer;

pub use canvas::{BlitMode, Canvas, MonoCanvas};
pub use engine::{Engine, FrameInfo};
pub use object::{Drawable, Object};
pub use sprite::{FixedSprite, MaskedBlit, NoDraw, OpaqueBlit, Sprite, SpriteDraw, XorBlit};
pub use timer::FrameLimiter;

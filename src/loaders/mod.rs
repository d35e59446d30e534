pub mod bitmap;
pub mod scene;
pub mod xbm;

pub use bitmap::BitmapData;
pub use scene::{load_scene_file, parse_scene, SceneData, SpriteSpec};
pub use xbm::{load_xbm_file, parse_xbm};

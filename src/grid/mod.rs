pub mod f32;
pub mod mask;
pub mod traits;

pub use self::f32::GridF32;
pub use self::mask::Mask2D;
pub use self::traits::{GridView, GridViewMut};

pub mod animator;
pub mod axis;
pub mod cards;
pub mod carousel;
pub mod counter;
pub mod cursor;
pub mod host;
pub mod intro;
pub mod schedule;
pub mod scroll;
pub mod tilt;

pub use animator::*;
pub use axis::*;
pub use host::*;
pub use schedule::*;

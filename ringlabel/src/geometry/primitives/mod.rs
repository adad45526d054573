mod edge;
mod point;
mod rect;
mod ring;

#[doc(inline)]
pub use edge::Edge;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use ring::Ring;
#[doc(inline)]
pub use ring::RingDefect;

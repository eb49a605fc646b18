//! Platform-independent ink cursor trail.
//!
//! Nothing in this crate touches a DOM or a window system; the web and native
//! front-ends translate their events into [`TrailEvent`] and implement
//! [`InkSurface`] and [`FrameScheduler`].

pub mod blob;
pub mod constants;
pub mod driver;
pub mod events;
pub mod params;
pub mod pointer;
pub mod pool;
pub mod surface;
pub mod trail;

pub use blob::*;
pub use constants::*;
pub use driver::*;
pub use events::*;
pub use params::*;
pub use pointer::*;
pub use pool::*;
pub use surface::*;
pub use trail::*;

//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the routing core and an
//! external system (the calendar and the filesystem). Implementations live
//! in `src/adapters/`.

pub mod clock;
pub mod filesystem;

pub use clock::Clock;
pub use filesystem::FileSystem;

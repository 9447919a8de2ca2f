//! Interchangeable behaviors an [`Actor`](crate::Actor) delegates to.
//!
//! Each capability is a trait so any implementation can be plugged in, and
//! each comes with a closed set of stock implementations selectable through
//! its `*Kind` enumeration (parsable from kebab-case names).

pub mod fly;
pub mod quack;
pub mod weapon;

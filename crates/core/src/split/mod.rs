#![forbid(unsafe_code)]

mod easing;
mod even;
mod percent;

pub use easing::*;
pub use even::*;
pub use percent::*;

#[cfg(test)]
mod tests;

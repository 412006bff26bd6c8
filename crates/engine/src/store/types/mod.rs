#![forbid(unsafe_code)]

mod events;
mod nodes;
mod requests;
mod view;

pub use events::*;
pub use nodes::*;
pub use requests::*;
pub use view::*;

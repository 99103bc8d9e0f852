//! Text helpers shared by the post readers

mod html;

pub use html::*;

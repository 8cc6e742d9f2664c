pub mod button;
pub mod loading_screen;

pub use button::*;
pub use loading_screen::*;

mod answers;
mod header;
pub mod layout;
mod menu;
mod swatch;
mod theme;

pub use layout::draw;
pub use menu::ThemeMenu;
pub use theme::{Theme, ThemeKind};

// Components module - reusable UI building blocks
//
// State-owning components (nav menu, news board, carousel) and the shell
// renderers drawn on every frame (title bar, status bar).

mod carousel;
mod nav_menu;
mod news_board;
pub mod status_bar;
pub mod title_bar;

pub use carousel::Carousel;
pub use nav_menu::NavMenu;
pub use news_board::NewsBoard;

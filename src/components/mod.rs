//! Reusable UI components

pub mod banner;
pub mod carousel;
pub mod loading;
pub mod movie_card;
pub mod search_bar;
pub mod side_menu;
pub mod stacked_cards;
pub mod user_avatar;

pub use banner::Banner;
pub use carousel::Carousel;
pub use loading::{LoadingSpinner, Skeleton};
pub use movie_card::MovieCard;
pub use search_bar::SearchBar;
pub use side_menu::SideMenu;
pub use stacked_cards::StackedCards;
pub use user_avatar::UserAvatar;

// Components module

pub mod json_view;
pub mod message_area;
pub mod nav_bar;
pub mod request_view;

pub use json_view::{display_text, JsonView};
pub use message_area::MessageArea;
pub use nav_bar::NavBar;
pub use request_view::RequestView;

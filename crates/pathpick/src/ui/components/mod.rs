pub mod directory_listing;
pub mod footer_bar;
pub mod path_input;
pub mod status_bar;

pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_global_keydown, wire_page_teardown};
pub use pointer::wire_click_handlers;

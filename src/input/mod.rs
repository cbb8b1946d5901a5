pub mod controls;
pub mod handler;

pub use controls::ColorControls;
pub use handler::handle_input;

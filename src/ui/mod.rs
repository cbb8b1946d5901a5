pub mod feedback;
pub mod renderer;

pub use feedback::Cue;
pub use renderer::ui;

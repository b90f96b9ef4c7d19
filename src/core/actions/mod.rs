pub mod apply_command;
pub mod generate_fractal;
pub mod render_frame;

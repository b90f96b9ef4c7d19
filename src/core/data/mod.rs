pub mod cell_colour;
pub mod command;
pub mod complex;
pub mod frame;
pub mod grid_size;
pub mod step_vector;
pub mod viewport;

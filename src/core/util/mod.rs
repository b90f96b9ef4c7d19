pub mod calculate_workers_for_grid;
pub mod compute_steps;

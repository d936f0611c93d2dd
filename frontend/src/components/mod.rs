pub mod basic_info;
pub mod feature_grid;
pub mod header;
pub mod results;
pub mod step_indicator;
pub mod utils;

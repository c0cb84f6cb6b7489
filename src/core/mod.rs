pub mod render;
pub mod sampler;
pub mod timesheet;

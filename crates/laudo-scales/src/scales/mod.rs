pub mod birads;
pub mod pirads;

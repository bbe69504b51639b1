pub mod cycles;
pub mod products;

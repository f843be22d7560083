pub mod capacity;
pub mod demand;
pub mod value;

pub mod address;
pub mod order;

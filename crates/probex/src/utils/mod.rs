pub mod attach;
pub mod pool;

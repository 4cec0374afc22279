mod counter;
pub use counter::Counter;

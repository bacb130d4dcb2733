mod styles;

pub use styles::*;

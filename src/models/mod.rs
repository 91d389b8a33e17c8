mod theft;

pub use theft::*;

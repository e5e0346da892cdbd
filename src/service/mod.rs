mod activation;

pub use activation::*;

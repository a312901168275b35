pub mod host;
pub mod mask;
pub mod range;

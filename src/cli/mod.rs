pub mod all;
pub mod encode;
pub mod methods;

pub use all::*;
pub use encode::*;
pub use methods::*;

pub mod answer;
pub mod conversion;
pub mod definition;

pub use answer::*;
pub use conversion::*;
pub use definition::*;

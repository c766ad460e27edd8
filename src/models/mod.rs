pub mod area;
pub mod session;
pub mod speaker;

pub use area::*;
pub use session::*;
pub use speaker::*;

pub mod util;
pub mod fraction;
pub mod bench;

pub use fraction::Fraction;
pub use util::op_count::OpCounter;

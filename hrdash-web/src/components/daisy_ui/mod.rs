pub mod foundation;
pub mod molecules;

pub use molecules::*;

pub mod convert;
pub mod info;
pub mod print;
pub(crate) mod util;

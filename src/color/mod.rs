pub(crate) mod blend;
pub mod palette;

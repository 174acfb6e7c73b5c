pub(crate) mod builtin;
pub(crate) mod font;
pub(crate) mod shaper;

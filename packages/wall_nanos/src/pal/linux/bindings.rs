mod abstractions;
mod real;

pub(crate) use abstractions::*;
pub(crate) use real::*;

mod bindings;
mod time_source;

use bindings::*;
pub(crate) use time_source::*;

pub mod case;
pub mod names;
pub mod pad;
pub mod rename;
pub mod words;

pub type CmdResult<T> = tidyname::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

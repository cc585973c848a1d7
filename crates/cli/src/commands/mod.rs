pub(crate) mod log;
pub(crate) mod search;
pub(crate) mod serve;

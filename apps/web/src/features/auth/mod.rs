pub(crate) mod client;
pub(crate) mod navigation;
pub(crate) mod storage;

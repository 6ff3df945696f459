pub(crate) mod common;
pub(crate) mod median;
pub(crate) mod partial;
pub(crate) mod partition;
pub(crate) mod quicksort;
pub(crate) mod select;

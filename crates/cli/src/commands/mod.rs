pub(crate) mod export;
pub(crate) mod load;
#[cfg(all(feature = "sqlite", feature = "postgres"))]
pub(crate) mod migrate;
pub(crate) mod query;
pub(crate) mod render;

pub mod dedup;
pub mod normalize;

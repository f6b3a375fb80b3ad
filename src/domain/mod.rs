pub mod blocks;
pub mod keywords;
pub mod models;

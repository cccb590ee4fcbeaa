pub mod config;
pub mod core;
pub mod llm;
pub mod persistence;
pub mod review;

pub use crate::{
    config::AddonConfig,
    core::ReibunError,
    review::ReibunAddon,
};

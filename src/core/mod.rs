// License: MIT

pub mod action;
pub mod activity;
pub mod config;
pub mod error;
pub mod events;
pub mod info;
pub mod page;
pub mod sampler;
pub mod state;
pub mod tracker;
pub mod utils;

pub mod config;
pub mod input;
pub mod model;
pub mod mods;
pub mod play;
pub mod util;

#[cfg(test)]
mod test_utils;

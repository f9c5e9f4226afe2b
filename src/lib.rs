pub mod config;
pub mod game;
pub mod models;
pub mod utils;
pub mod wordlist;

pub mod settings;

pub use settings::{ApplicationSettings, DatabaseSettings, Settings};

//! Feature modules - logic kept out of the view code

pub mod settings;

pub use settings::Settings;

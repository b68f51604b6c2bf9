pub mod error;
pub mod model;
pub mod controller {
    pub mod corners;
    pub mod handicap;
    pub mod results;
    pub mod score;
    pub mod skins;
    pub mod standings;
    pub mod validation;
}
pub mod view {
    pub mod announce;
}

pub use controller::results::compute_results;
pub use error::EngineError;

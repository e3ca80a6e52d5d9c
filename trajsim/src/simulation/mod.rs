pub mod states;
pub mod params;
pub mod error;
pub mod grid;
pub mod engine;
pub mod trajectory;
pub mod atwood;
pub mod cylinder;
pub mod scenario;

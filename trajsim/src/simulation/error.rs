use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    #[error("invalid parameter `{name}` = {value}: must be strictly positive")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, TrajectoryError>;

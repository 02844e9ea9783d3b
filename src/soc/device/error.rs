use thiserror::Error;

pub type DeviceResult<T> = Result<T, DeviceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    #[error("negative memory address {address}")]
    NegativeAddress { address: i64 },
    #[error("memory address {address} exceeds configured limit of {limit} words")]
    CapacityExceeded { address: usize, limit: usize },
}

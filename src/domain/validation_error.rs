#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing customer: add a name")]
    MissingCustomer,
    #[error("missing flat rate: must be greater than 0")]
    NonPositiveFlatRate,
    #[error("{0} must not be negative")]
    NegativeAmount(&'static str),
    #[error("PIN must be 4 digits")]
    InvalidPin,
}

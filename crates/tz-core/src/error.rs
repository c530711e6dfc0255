use thiserror::Error;

pub type TzResult<T> = Result<T, TzError>;

#[derive(Error, Debug)]
pub enum TzError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

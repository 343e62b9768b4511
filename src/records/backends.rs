pub mod dynamodb;
pub mod filesystem;
mod register;

pub use register::RecordBackendConfig;

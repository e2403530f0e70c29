mod error;
pub use error::ExecError;

#[cfg(feature = "trainer")]
pub mod trainer;

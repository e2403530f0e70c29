mod train;
pub use train::TrainSpec;

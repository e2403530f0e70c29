mod marker;
mod runner;
mod task;

pub use runner::{TrainOutcome, TrainRunner};

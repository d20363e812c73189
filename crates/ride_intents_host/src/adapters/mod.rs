pub mod completion;
pub mod observer;

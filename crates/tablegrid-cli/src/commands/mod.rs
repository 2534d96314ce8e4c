pub mod next;
pub mod progress;
pub mod validate;

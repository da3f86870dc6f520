mod controller;
mod timer;

pub use controller::GameController;

pub use self::command::*;
pub use self::controller::*;
pub use self::request::*;

mod command;
mod controller;
mod request;

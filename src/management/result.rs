use crate::management::interface::{Command, CommandStatus};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {:?}.", source)]
    IO {
        #[source]
        source: ::std::io::Error,
    },
    #[error("Command {:?} returned {:?}.", opcode, status)]
    CommandError {
        opcode: Command,
        status: CommandStatus,
    },
    #[error("Unknown opcode: {:x}.", opcode)]
    UnknownOpcode { opcode: u16 },
    #[error("Unknown command status: {:x}.", status)]
    UnknownStatus { status: u8 },
    #[error("Timed out.")]
    TimedOut,
    #[error("No advertisement has been added yet, so there is nothing to repeat.")]
    NoPreviousAdvertisement,
    #[error(
        "The advertising data is too long ({} bytes); the maximum length is {} bytes.",
        len,
        max_len
    )]
    DataTooLong { len: usize, max_len: usize },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IO { source: err }
    }
}

use bytes::*;

use crate::management::interface::command::Command;
use crate::management::interface::controller::Controller;
use crate::management::{Error, Result};

/// Size of the opcode, controller index and parameter length fields.
pub const HEADER_SIZE: usize = 6;

/// Largest parameter the 16-bit length field can describe.
pub const MAX_PARAM_SIZE: usize = u16::MAX as usize;

/// A command that is ready to be sent to the management API.
///
/// The parameter length in the header is always derived from `param`; a
/// parameter longer than [`MAX_PARAM_SIZE`] cannot be serialized.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Request {
    pub opcode: Command,
    pub controller: Controller,
    pub param: Bytes,
}

impl Request {
    pub fn new(opcode: Command, controller: Controller, param: Bytes) -> Self {
        Request {
            opcode,
            controller,
            param,
        }
    }

    pub fn param_len(&self) -> Result<u16> {
        u16::try_from(self.param.len()).map_err(|_| Error::DataTooLong {
            len: self.param.len(),
            max_len: MAX_PARAM_SIZE,
        })
    }

    pub fn to_bytes(&self) -> Result<Bytes> {
        let param_len = self.param_len()?;
        let mut buf = BytesMut::with_capacity(HEADER_SIZE + self.param.len());

        buf.put_u16_le(self.opcode as u16);
        buf.put_u16_le(self.controller.into());
        buf.put_u16_le(param_len);
        buf.put_slice(&self.param[..]);

        Ok(buf.freeze())
    }
}

impl TryFrom<Request> for Bytes {
    type Error = Error;

    fn try_from(val: Request) -> Result<Self> {
        val.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout() {
        let request = Request::new(
            Command::SetPowered,
            Controller(1),
            Bytes::from_static(&[0x01]),
        );
        let buf = Bytes::try_from(request).unwrap();

        assert_eq!(&buf[..], &[0x05, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01]);
    }

    #[test]
    fn empty_param() {
        let request = Request::new(Command::ReadVersionInfo, Controller::none(), Bytes::new());
        assert_eq!(request.param_len().unwrap(), 0);
        assert_eq!(
            &request.to_bytes().unwrap()[..],
            &[0x01, 0x00, 0xFF, 0xFF, 0x00, 0x00]
        );
    }

    #[test]
    fn largest_param() {
        let request = Request::new(
            Command::AddAdvertising,
            Controller(0),
            Bytes::from(vec![0u8; MAX_PARAM_SIZE]),
        );
        let buf = request.to_bytes().unwrap();

        assert_eq!(&buf[4..6], &[0xFF, 0xFF]);
        assert_eq!(buf.len(), HEADER_SIZE + MAX_PARAM_SIZE);
    }

    #[test]
    fn oversized_param() {
        for len in [MAX_PARAM_SIZE + 1, MAX_PARAM_SIZE + 4] {
            let request = Request::new(
                Command::AddAdvertising,
                Controller(0),
                Bytes::from(vec![0u8; len]),
            );

            assert!(matches!(
                request.param_len(),
                Err(Error::DataTooLong { len: l, max_len: MAX_PARAM_SIZE }) if l == len
            ));
            assert!(matches!(
                request.to_bytes(),
                Err(Error::DataTooLong { .. })
            ));
        }
    }
}

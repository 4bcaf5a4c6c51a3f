use bytes::*;

use crate::management::{Error, Result};

/// Advertising and EIR data types used by this crate.
///
/// Bluetooth Specification Version 5.2, Vol 3, part C, 11 ADVERTISING AND
/// SCAN RESPONSE DATA FORMAT
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, FromPrimitive)]
pub enum EirDataType {
    Flags = 0x01,
    Uuid16Incomplete = 0x02,
    Uuid16Complete = 0x03,
    Uuid32Incomplete = 0x04,
    Uuid32Complete = 0x05,
    Uuid128Incomplete = 0x06,
    Uuid128Complete = 0x07,
    NameShort = 0x08,
    NameComplete = 0x09,
    TxPowerLevel = 0x0A,
    Uri = 0x24,
    ManufacturerSpecificData = 0xFF,
}

/// Builder for a block of advertising data.
///
/// ```text
///  -- 1 octet --  -- 1 octet --  -- Length - 1 octets --
/// [   Length    ,  EirDataType ,  Data                  ]
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AdvertisingData(BytesMut);

impl AdvertisingData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one structure. The length octet covers the type octet and
    /// `value`, so `value` can be at most 254 bytes.
    pub fn push(&mut self, data_type: EirDataType, value: &[u8]) -> Result<&mut Self> {
        if value.len() >= u8::MAX as usize {
            return Err(Error::DataTooLong {
                len: value.len(),
                max_len: u8::MAX as usize - 1,
            });
        }

        self.0.put_u8(value.len() as u8 + 1);
        self.0.put_u8(data_type as u8);
        self.0.put_slice(value);

        Ok(self)
    }

    pub fn push_uuid16_list(&mut self, uuids: &[u16]) -> Result<&mut Self> {
        let mut value = BytesMut::with_capacity(2 * uuids.len());
        for uuid in uuids {
            value.put_u16_le(*uuid);
        }

        self.push(EirDataType::Uuid16Complete, &value[..])
    }

    pub fn push_short_name(&mut self, name: &str) -> Result<&mut Self> {
        self.push(EirDataType::NameShort, name.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn freeze(self) -> Bytes {
        self.0.freeze()
    }
}

impl AsRef<[u8]> for AdvertisingData {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

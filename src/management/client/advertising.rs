use bytes::{BufMut, Bytes, BytesMut};
use enumflags2::{bitflags, BitFlags};
use log::{debug, warn};

use super::*;
use crate::eir::AdvertisingData;
use crate::management::Error;

/// Room reserved for the short name in [`ManagementClient::add_advertising`].
pub const ADVERTISING_SHORT_NAME_MAX_LENGTH: usize = 8;

const ADVERTISING_UUID_LENGTH: usize = 2;

/// Size of the advertising data built by [`ManagementClient::add_advertising`]
/// when the short name fills its room: a length and type octet for each of
/// the UUID list and the short name.
pub const ADVERTISING_MAX_DATA_LENGTH: usize =
    2 + ADVERTISING_SHORT_NAME_MAX_LENGTH + 2 + ADVERTISING_UUID_LENGTH;

/// Instance slot used by [`ManagementClient::add_advertising`].
pub const DEFAULT_ADVERTISING_INSTANCE: u8 = 1;

impl<T: Transport> ManagementClient<T> {
    /// Starts advertising a 16-bit service UUID and a short name.
    ///
    /// The short name is cut to [`ADVERTISING_SHORT_NAME_MAX_LENGTH`] bytes
    /// and the advertising data shrinks with it. The instance is added as
    /// connectable and discoverable, without duration or timeout.
    ///
    /// Passing `None` for `uuid` repeats the last advertisement that was
    /// added successfully and ignores `short_name`. If there is none, this
    /// fails with [`Error::NoPreviousAdvertisement`] before anything is sent.
    pub async fn add_advertising(&mut self, short_name: &str, uuid: Option<u16>) -> Result<()> {
        let advertisement = match uuid {
            Some(uuid) => ShortAdvertisement::new(short_name, uuid),
            None => self
                .last_advertisement
                .clone()
                .ok_or(Error::NoPreviousAdvertisement)?,
        };

        debug!(
            "{}: adding advertisement {:?} with UUID {:#06x}",
            self.controller, advertisement.short_name, advertisement.uuid
        );

        self.add_advertising_params(advertisement.to_params()?)
            .await
            .map_err(|err| {
                warn!(
                    "{}: failed to start advertising with UUID {:#06x}: {}",
                    self.controller, advertisement.uuid, err
                );
                err
            })?;

        self.last_advertisement = Some(advertisement);
        Ok(())
    }

    /// Configures an advertising instance.
    ///
    /// Instance identifiers run from 1 to the number of supported instances;
    /// 0 is reserved. Re-adding an existing instance updates it.
    ///
    /// Instances added here are not visible while advertising is enabled
    /// with [`set_advertising`](Self::set_advertising), which takes
    /// precedence. LE must already be enabled, otherwise the kernel answers
    /// Rejected.
    ///
    /// This command can be used when the controller is not powered and
    /// all settings will be programmed once powered.
    pub async fn add_advertising_params(&self, params: AdvertisingParams) -> Result<()> {
        let param = params.to_bytes()?;
        self.exec_command(Command::AddAdvertising, self.controller, Some(param))
            .await
    }

    /// Removes an advertising instance, or all of them when `instance` is 0.
    ///
    /// Removing an instance while it is being advertised cancels it
    /// immediately.
    pub async fn remove_advertising(&self, instance: u8) -> Result<()> {
        let mut param = BytesMut::with_capacity(1);
        param.put_u8(instance);

        self.exec_command(Command::RemoveAdvertising, self.controller, Some(param.freeze()))
            .await
            .map_err(|err| {
                warn!(
                    "{}: failed to remove advertising instance {}: {}",
                    self.controller, instance, err
                );
                err
            })
    }

    /// The advertisement that `add_advertising(_, None)` would repeat.
    pub fn last_advertisement(&self) -> Option<&ShortAdvertisement> {
        self.last_advertisement.as_ref()
    }
}

/// A short name and a 16-bit service UUID, as advertised by
/// [`ManagementClient::add_advertising`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShortAdvertisement {
    pub short_name: String,
    pub uuid: u16,
}

impl ShortAdvertisement {
    pub fn new(short_name: &str, uuid: u16) -> Self {
        ShortAdvertisement {
            short_name: name::truncate_to(short_name, ADVERTISING_SHORT_NAME_MAX_LENGTH)
                .to_owned(),
            uuid,
        }
    }

    /// `[3][0x03][uuid lo][uuid hi][1 + n][0x08][n name bytes]`
    pub fn advertising_data(&self) -> Result<AdvertisingData> {
        let mut data = AdvertisingData::new();
        data.push_uuid16_list(&[self.uuid])?
            .push_short_name(&self.short_name)?;
        Ok(data)
    }

    pub fn to_params(&self) -> Result<AdvertisingParams> {
        Ok(AdvertisingParams {
            instance: DEFAULT_ADVERTISING_INSTANCE,
            flags: AdvertisingFlags::EnterConnectable | AdvertisingFlags::AdvertiseDiscoverable,
            duration: 0,
            timeout: 0,
            adv_data: self.advertising_data()?.freeze(),
            scan_rsp: Bytes::new(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdvertisingParams {
    pub instance: u8,

    /// When the `EnterConnectable` flag is not set, then the controller will
    /// use advertising based on the connectable setting.
    pub flags: BitFlags<AdvertisingFlags>,

    /// Configures the length of an Instance in seconds. 0 selects the
    /// default of 2 seconds. Only matters when several instances rotate.
    pub duration: u16,

    /// Configures the life-time of an Instance in seconds. 0 means no
    /// expiration.
    pub timeout: u16,
    pub adv_data: Bytes,
    pub scan_rsp: Bytes,
}

impl AdvertisingParams {
    pub fn to_bytes(&self) -> Result<Bytes> {
        for data in [&self.adv_data, &self.scan_rsp] {
            if data.len() > u8::MAX as usize {
                return Err(Error::DataTooLong {
                    len: data.len(),
                    max_len: u8::MAX as usize,
                });
            }
        }

        let mut param = BytesMut::with_capacity(11 + self.adv_data.len() + self.scan_rsp.len());
        param.put_u8(self.instance);
        param.put_u32_le(self.flags.bits());
        param.put_u16_le(self.duration);
        param.put_u16_le(self.timeout);
        param.put_u8(self.adv_data.len() as u8);
        param.put_u8(self.scan_rsp.len() as u8);
        param.put_slice(&self.adv_data[..]);
        param.put_slice(&self.scan_rsp[..]);

        Ok(param.freeze())
    }
}

#[repr(u32)]
#[bitflags]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AdvertisingFlags {
    /// Use undirected connectable advertising regardless of the global
    /// connectable setting.
    EnterConnectable = 1 << 0,

    /// Advertise with general discoverable mode. The kernel manages the
    /// Flags field and prepends it to the advertising data.
    AdvertiseDiscoverable = 1 << 1,
    AdvertiseLimitedDiscoverable = 1 << 2,
    AutoUpdateFlags = 1 << 3,
    AutoUpdateTxPower = 1 << 4,
    AutoUpdateAppearance = 1 << 5,
    AutoUpdateLocalName = 1 << 6,
    SecondaryChannelLE1M = 1 << 7,
    SecondaryChannelLE2M = 1 << 8,
    SecondaryChannelLECoded = 1 << 9,
}

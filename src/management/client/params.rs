// the numeric values are the ones the kernel expects on the wire
// https://elixir.bootlin.com/linux/latest/source/include/net/bluetooth/mgmt.h

#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum DiscoverableMode {
    None = 0x00,
    #[default]
    General = 0x01,
    /// Requires a non-zero timeout.
    Limited = 0x02,
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SecureConnectionsMode {
    Disabled = 0,
    #[default]
    Enabled = 1,
    Only = 2,
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LeAdvertisingMode {
    Disabled = 0,
    #[default]
    WithConnectable = 1,
    Enabled = 2,
}

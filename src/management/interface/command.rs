use std::fmt::{Display, Formatter};

use num_traits::FromPrimitive;

use crate::management::{Error, Result};

/// Opcodes of the management API.
///
/// See https://elixir.bootlin.com/linux/latest/source/include/net/bluetooth/mgmt.h
#[repr(u16)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive, ToPrimitive)]
pub enum Command {
    ReadVersionInfo = 0x0001,
    ReadSupportedCommands,
    ReadControllerIndexList,
    ReadControllerInfo,
    SetPowered,
    SetDiscoverable,
    SetConnectable,
    SetFastConnectable,
    SetBondable,
    SetLinkSecurity,
    SetSecureSimplePairing,
    SetHighSpeed,
    SetLowEnergy,
    SetDeviceClass,
    SetLocalName,
    AddUUID,
    RemoveUUID,
    LoadLinkKeys,
    LoadLongTermKeys,
    Disconnect,
    GetConnections,
    PinCodeReply,
    PinCodeNegativeReply,
    SetIOCapability,
    PairDevice,
    CancelPairDevice,
    UnpairDevice,
    UserConfirmationReply,
    UserConfirmationNegativeReply,
    UserPasskeyReply,
    UserPasskeyNegativeReply,
    ReadLocalOutOfBand,
    AddRemoteOutOfBand,
    RemoveRemoteOutOfBand,
    StartDiscovery,
    StopDiscovery,
    ConfirmName,
    BlockDevice,
    UnblockDevice,
    SetDeviceID,
    SetAdvertising,
    SetBREDR,
    SetStaticAddress,
    SetScanParameters,
    SetSecureConnections,
    SetDebugKeys,
    SetPrivacy,
    LoadIdentityResolvingKeys,
    GetConnectionInfo,
    GetClockInfo,
    AddDevice,
    RemoveDevice,
    LoadConnectionParameters,
    ReadUnconfiguredControllerIndexList,
    ReadControllerConfigInfo,
    SetExternalConfig,
    SetPublicAddress,
    StartServiceDiscovery,
    ReadLocalOutOfBandExtended,
    ReadExtendedControllerIndexList,
    ReadAdvertisingFeatures,
    AddAdvertising,
    RemoveAdvertising,
    GetAdvertisingSizeInfo,
    StartLimitedDiscovery,
    ReadExtendedControllerInfo,
    SetAppearance,
}

impl Command {
    pub fn parse(opcode: u16) -> Result<Command> {
        FromPrimitive::from_u16(opcode).ok_or(Error::UnknownOpcode { opcode })
    }

    /// Human-readable name, used when reporting failed commands.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ReadVersionInfo => "Read Version Information",
            Command::ReadSupportedCommands => "Read Supported Commands",
            Command::ReadControllerIndexList => "Read Controller Index List",
            Command::ReadControllerInfo => "Read Controller Information",
            Command::SetPowered => "Set Powered",
            Command::SetDiscoverable => "Set Discoverable",
            Command::SetConnectable => "Set Connectable",
            Command::SetFastConnectable => "Set Fast Connectable",
            Command::SetBondable => "Set Bondable",
            Command::SetLinkSecurity => "Set Link Security",
            Command::SetSecureSimplePairing => "Set Secure Simple Pairing",
            Command::SetHighSpeed => "Set High Speed",
            Command::SetLowEnergy => "Set Low Energy",
            Command::SetDeviceClass => "Set Device Class",
            Command::SetLocalName => "Set Local Name",
            Command::AddUUID => "Add UUID",
            Command::RemoveUUID => "Remove UUID",
            Command::LoadLinkKeys => "Load Link Keys",
            Command::LoadLongTermKeys => "Load Long Term Keys",
            Command::Disconnect => "Disconnect",
            Command::GetConnections => "Get Connections",
            Command::PinCodeReply => "PIN Code Reply",
            Command::PinCodeNegativeReply => "PIN Code Negative Reply",
            Command::SetIOCapability => "Set IO Capability",
            Command::PairDevice => "Pair Device",
            Command::CancelPairDevice => "Cancel Pair Device",
            Command::UnpairDevice => "Unpair Device",
            Command::UserConfirmationReply => "User Confirmation Reply",
            Command::UserConfirmationNegativeReply => "User Confirmation Negative Reply",
            Command::UserPasskeyReply => "User Passkey Reply",
            Command::UserPasskeyNegativeReply => "User Passkey Negative Reply",
            Command::ReadLocalOutOfBand => "Read Local Out Of Band Data",
            Command::AddRemoteOutOfBand => "Add Remote Out Of Band Data",
            Command::RemoveRemoteOutOfBand => "Remove Remote Out Of Band Data",
            Command::StartDiscovery => "Start Discovery",
            Command::StopDiscovery => "Stop Discovery",
            Command::ConfirmName => "Confirm Name",
            Command::BlockDevice => "Block Device",
            Command::UnblockDevice => "Unblock Device",
            Command::SetDeviceID => "Set Device ID",
            Command::SetAdvertising => "Set Advertising",
            Command::SetBREDR => "Set BR/EDR",
            Command::SetStaticAddress => "Set Static Address",
            Command::SetScanParameters => "Set Scan Parameters",
            Command::SetSecureConnections => "Set Secure Connections",
            Command::SetDebugKeys => "Set Debug Keys",
            Command::SetPrivacy => "Set Privacy",
            Command::LoadIdentityResolvingKeys => "Load Identity Resolving Keys",
            Command::GetConnectionInfo => "Get Connection Information",
            Command::GetClockInfo => "Get Clock Information",
            Command::AddDevice => "Add Device",
            Command::RemoveDevice => "Remove Device",
            Command::LoadConnectionParameters => "Load Connection Parameters",
            Command::ReadUnconfiguredControllerIndexList => {
                "Read Unconfigured Controller Index List"
            }
            Command::ReadControllerConfigInfo => "Read Controller Configuration Information",
            Command::SetExternalConfig => "Set External Configuration",
            Command::SetPublicAddress => "Set Public Address",
            Command::StartServiceDiscovery => "Start Service Discovery",
            Command::ReadLocalOutOfBandExtended => "Read Local Out Of Band Extended Data",
            Command::ReadExtendedControllerIndexList => "Read Extended Controller Index List",
            Command::ReadAdvertisingFeatures => "Read Advertising Features",
            Command::AddAdvertising => "Add Advertising",
            Command::RemoveAdvertising => "Remove Advertising",
            Command::GetAdvertisingSizeInfo => "Get Advertising Size Information",
            Command::StartLimitedDiscovery => "Start Limited Discovery",
            Command::ReadExtendedControllerInfo => "Read Extended Controller Information",
            Command::SetAppearance => "Set Appearance",
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter) -> ::std::fmt::Result {
        f.write_str(self.name())
    }
}

impl ::std::fmt::LowerHex for Command {
    fn fmt(&self, f: &mut Formatter) -> ::std::fmt::Result {
        write!(f, "{:x}", *self as u16)
    }
}

/// Status codes carried by Command Complete and Command Status events.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, FromPrimitive, ToPrimitive)]
pub enum CommandStatus {
    Success = 0x00,
    UnknownCommand = 0x01,
    NotConnected = 0x02,
    Failed = 0x03,
    ConnectFailed = 0x04,
    AuthenticationFailed = 0x05,
    NotPaired = 0x06,
    NoResources = 0x07,
    Timeout = 0x08,
    AlreadyConnected = 0x09,
    Busy = 0x0A,
    Rejected = 0x0B,
    NotSupported = 0x0C,
    InvalidParams = 0x0D,
    Disconnected = 0x0E,
    NotPowered = 0x0F,
    Cancelled = 0x10,
    InvalidIndex = 0x11,
    RFKilled = 0x12,
    AlreadyPaired = 0x13,
    PermissionDenied = 0x14,
}

impl CommandStatus {
    pub fn parse(status: u8) -> Result<CommandStatus> {
        FromPrimitive::from_u8(status).ok_or(Error::UnknownStatus { status })
    }
}

impl ::std::fmt::LowerHex for CommandStatus {
    fn fmt(&self, f: &mut Formatter) -> ::std::fmt::Result {
        write!(f, "{:x}", *self as u8)
    }
}

use bytes::{BufMut, BytesMut};
use log::warn;

use super::*;

// sizes of the name fields, including the terminating NUL
const NAME_FIELD_SIZE: usize = MAX_NAME_LENGTH + 1;
const SHORT_NAME_FIELD_SIZE: usize = MAX_SHORT_NAME_LENGTH + 1;

impl<T: Transport> ManagementClient<T> {
    /// Sets the local name of the controller. The short name will be used
    /// in case the full name doesn't fit within EIR/AD data.
    ///
    /// Unlike the kernel, this does not reject names that are too long: the
    /// name is cut to [`MAX_NAME_LENGTH`] bytes and the short name to
    /// [`MAX_SHORT_NAME_LENGTH`] bytes before they are sent.
    ///
    /// This command can be used when the controller is not powered and
    /// all settings will be programmed once powered. The names are
    /// remembered across power cycles.
    pub async fn set_local_name(&self, name: &str, short_name: &str) -> Result<()> {
        let name = truncate_name(name);
        let short_name = truncate_short_name(short_name);

        // both fields stay NUL padded past the copied bytes
        let mut param = BytesMut::with_capacity(NAME_FIELD_SIZE + SHORT_NAME_FIELD_SIZE);
        param.resize(NAME_FIELD_SIZE + SHORT_NAME_FIELD_SIZE, 0);
        param[..name.len()].copy_from_slice(name.as_bytes());
        param[NAME_FIELD_SIZE..][..short_name.len()].copy_from_slice(short_name.as_bytes());

        self.exec_command(Command::SetLocalName, self.controller, Some(param.freeze()))
            .await
            .map_err(|err| {
                warn!("{}: failed to set name: {}", self.controller, err);
                err
            })
    }

    /// Sets the discoverable property of the controller.
    ///
    /// `timeout` is in seconds and is required for
    /// [`DiscoverableMode::Limited`]; it is passed through unchecked and the
    /// kernel answers Invalid Parameters if it is missing.
    ///
    /// Using a timeout while the controller is not powered returns Not
    /// Powered. Switching discoverable on while connectable is off
    /// returns Rejected.
    pub async fn set_discoverable(&self, mode: DiscoverableMode, timeout: u16) -> Result<()> {
        let mut param = BytesMut::with_capacity(3);
        param.put_u8(mode as u8);
        param.put_u16_le(timeout);

        self.exec_command(Command::SetDiscoverable, self.controller, Some(param.freeze()))
            .await
            .map_err(|err| {
                warn!(
                    "{}: failed to set discoverable to {:?} (timeout {}s): {}",
                    self.controller, mode, timeout, err
                );
                err
            })
    }

    /// Sends a command whose only parameter is a single state byte.
    ///
    /// Most of the settings toggles share this layout; the typed setters
    /// below are thin wrappers around it. Failures are logged with the
    /// command name and the attempted state, and are not retried.
    pub async fn set_state(&self, opcode: Command, controller: Controller, state: u8) -> Result<()> {
        let mut param = BytesMut::with_capacity(1);
        param.put_u8(state);

        self.exec_command(opcode, controller, Some(param.freeze()))
            .await
            .map_err(|err| {
                warn!(
                    "{}: {} failed to set state to {}: {}",
                    controller, opcode, state, err
                );
                err
            })
    }

    /// Powers the controller on or off.
    ///
    /// Switching the controller off expires a discoverable timeout and
    /// removes all advertising instances that have a timeout set.
    pub async fn set_powered(&self, powered: bool) -> Result<()> {
        self.set_state(Command::SetPowered, self.controller, powered as u8)
            .await
    }

    /// Enables or disables BR/EDR support on a dual-mode controller.
    ///
    /// Disabling BR/EDR requires the controller to be powered off.
    pub async fn set_bredr(&self, bredr: bool) -> Result<()> {
        self.set_state(Command::SetBREDR, self.controller, bredr as u8)
            .await
    }

    pub async fn set_secure_connections(&self, mode: SecureConnectionsMode) -> Result<()> {
        self.set_state(Command::SetSecureConnections, self.controller, mode as u8)
            .await
    }

    /// Sets the bondable (pairable) property. Turning bondable on does not
    /// make the controller connectable.
    pub async fn set_bondable(&self, bondable: bool) -> Result<()> {
        self.set_state(Command::SetBondable, self.controller, bondable as u8)
            .await
    }

    /// Sets the connectable property. Switching connectable off also
    /// switches discoverable off, and switching it back on does not
    /// restore it.
    pub async fn set_connectable(&self, connectable: bool) -> Result<()> {
        self.set_state(Command::SetConnectable, self.controller, connectable as u8)
            .await
    }

    /// Enables or disables Low Energy support. Disabling it removes all
    /// advertising instances.
    pub async fn set_le(&self, le: bool) -> Result<()> {
        self.set_state(Command::SetLowEnergy, self.controller, le as u8)
            .await
    }

    /// Enables LE advertising.
    ///
    /// [`LeAdvertisingMode::WithConnectable`] advertises according to the
    /// connectable setting, [`LeAdvertisingMode::Enabled`] always uses
    /// connectable advertising. While enabled this overrides instances
    /// added with [`add_advertising`](Self::add_advertising).
    pub async fn set_advertising(&self, mode: LeAdvertisingMode) -> Result<()> {
        self.set_state(Command::SetAdvertising, self.controller, mode as u8)
            .await
    }

    pub async fn set_fast_connectable(&self, fast_connectable: bool) -> Result<()> {
        self.set_state(
            Command::SetFastConnectable,
            self.controller,
            fast_connectable as u8,
        )
        .await
    }

    /// Enables or disables link level security (Security Mode 3).
    pub async fn set_link_security(&self, link_security: bool) -> Result<()> {
        self.set_state(Command::SetLinkSecurity, self.controller, link_security as u8)
            .await
    }

    pub async fn set_secure_simple_pairing(&self, ssp: bool) -> Result<()> {
        self.set_state(Command::SetSecureSimplePairing, self.controller, ssp as u8)
            .await
    }

    /// Enables or disables Bluetooth High Speed. Requires Secure Simple
    /// Pairing to be enabled first.
    pub async fn set_high_speed(&self, high_speed: bool) -> Result<()> {
        self.set_state(Command::SetHighSpeed, self.controller, high_speed as u8)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::management::testing::MockTransport;
    use crate::management::Error;

    #[tokio::test]
    async fn local_name_layout() {
        let transport = MockTransport::new();
        let client = ManagementClient::new(&transport, Controller(0)).await.unwrap();

        let name = "n".repeat(MAX_NAME_LENGTH);
        client.set_local_name(&name, "Short").await.unwrap();

        let request = transport.last();
        assert_eq!(request.opcode, Command::SetLocalName);
        assert_eq!(request.param_len().unwrap(), 260);
        assert_eq!(request.param.len(), 260);
        assert_eq!(&request.param[..248], name.as_bytes());
        assert_eq!(request.param[248], 0);
        assert_eq!(&request.param[249..254], b"Short");
        assert!(request.param[254..].iter().all(|b| *b == 0));

        let wire = request.to_bytes().unwrap();
        assert_eq!(&wire[..6], &[0x0F, 0x00, 0x00, 0x00, 0x04, 0x01]);
    }

    #[tokio::test]
    async fn local_name_truncates() {
        let transport = MockTransport::new();
        let client = ManagementClient::new(&transport, Controller(0)).await.unwrap();

        let name = "a".repeat(400);
        client
            .set_local_name(&name, "ThisShortNameIsTooLong")
            .await
            .unwrap();

        let param = transport.last().param;
        assert_eq!(param.len(), 260);
        assert_eq!(&param[..248], &name.as_bytes()[..248]);
        assert_eq!(param[248], 0);
        assert_eq!(&param[249..259], b"ThisShortN");
        assert_eq!(param[259], 0);
    }

    #[tokio::test]
    async fn discoverable_layout() {
        let transport = MockTransport::new();
        let client = ManagementClient::new(&transport, Controller(2)).await.unwrap();

        client
            .set_discoverable(DiscoverableMode::Limited, 0x0130)
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(request.opcode, Command::SetDiscoverable);
        assert_eq!(request.controller, Controller(2));
        assert_eq!(&request.param[..], &[0x02, 0x30, 0x01]);

        // the timeout is sent even when it is meaningless
        client.set_discoverable(DiscoverableMode::None, 0).await.unwrap();
        assert_eq!(&transport.last().param[..], &[0x00, 0x00, 0x00]);
    }

    #[tokio::test]
    async fn state_setters() {
        let transport = MockTransport::new();
        let client = ManagementClient::new(&transport, Controller(1)).await.unwrap();

        client.set_powered(true).await.unwrap();
        client.set_bredr(false).await.unwrap();
        client
            .set_secure_connections(SecureConnectionsMode::Only)
            .await
            .unwrap();
        client.set_bondable(true).await.unwrap();
        client.set_connectable(true).await.unwrap();
        client.set_le(true).await.unwrap();
        client
            .set_advertising(LeAdvertisingMode::Enabled)
            .await
            .unwrap();
        client.set_fast_connectable(false).await.unwrap();
        client.set_link_security(true).await.unwrap();
        client.set_secure_simple_pairing(true).await.unwrap();
        client.set_high_speed(false).await.unwrap();

        let sent: Vec<_> = transport
            .sent()
            .into_iter()
            .map(|r| {
                assert_eq!(r.controller, Controller(1));
                assert_eq!(r.param.len(), 1);
                (r.opcode, r.param[0])
            })
            .collect();

        assert_eq!(
            sent,
            vec![
                (Command::SetPowered, 1),
                (Command::SetBREDR, 0),
                (Command::SetSecureConnections, 2),
                (Command::SetBondable, 1),
                (Command::SetConnectable, 1),
                (Command::SetLowEnergy, 1),
                (Command::SetAdvertising, 2),
                (Command::SetFastConnectable, 0),
                (Command::SetLinkSecurity, 1),
                (Command::SetSecureSimplePairing, 1),
                (Command::SetHighSpeed, 0),
            ]
        );
    }

    #[tokio::test]
    async fn set_state_uses_given_controller() {
        let transport = MockTransport::new();
        let client = ManagementClient::new(&transport, Controller(0)).await.unwrap();

        client
            .set_state(Command::SetPowered, Controller(5), 1)
            .await
            .unwrap();

        let wire = transport.last().to_bytes().unwrap();
        assert_eq!(&wire[..], &[0x05, 0x00, 0x05, 0x00, 0x01, 0x00, 0x01]);
    }

    #[tokio::test]
    async fn failures_are_reported() {
        let transport = MockTransport::failing(CommandStatus::Rejected);
        let client = ManagementClient::new(&transport, Controller(0)).await.unwrap();

        let results = vec![
            client.set_powered(true).await,
            client.set_bredr(true).await,
            client
                .set_secure_connections(SecureConnectionsMode::Enabled)
                .await,
            client.set_bondable(true).await,
            client.set_connectable(true).await,
            client.set_le(true).await,
            client.set_advertising(LeAdvertisingMode::Disabled).await,
            client.set_discoverable(DiscoverableMode::General, 0).await,
            client.set_local_name("name", "short").await,
            client.set_fast_connectable(true).await,
            client.set_link_security(true).await,
            client.set_secure_simple_pairing(true).await,
            client.set_high_speed(true).await,
            client.remove_advertising(1).await,
        ];

        for result in results {
            assert!(matches!(
                result,
                Err(Error::CommandError {
                    status: CommandStatus::Rejected,
                    ..
                })
            ));
        }

        // one attempt per call, no retries
        assert_eq!(transport.sent().len(), 14);
    }
}

use log::info;

use super::*;

/// Complete description of how an adapter should be set up.
///
/// ```no_run
/// # use bluez_mgmt::management::*;
/// let settings = AdapterSettings {
///     name: "Gobbledegook".into(),
///     short_name: "Gobbledegook".into(),
///     advertised_uuid: Some(0x180D),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AdapterSettings {
    pub name: String,
    pub short_name: String,
    pub powered: bool,
    pub bredr: bool,
    pub secure_connections: SecureConnectionsMode,
    pub bondable: bool,
    pub connectable: bool,
    pub le: bool,
    pub advertising: LeAdvertisingMode,
    pub discoverable: DiscoverableMode,
    /// In seconds; required for [`DiscoverableMode::Limited`].
    pub discoverable_timeout: u16,
    /// When set, an advertising instance with this UUID and the short name
    /// is added.
    pub advertised_uuid: Option<u16>,
}

impl Default for AdapterSettings {
    fn default() -> Self {
        AdapterSettings {
            name: String::new(),
            short_name: String::new(),
            powered: true,
            bredr: false,
            secure_connections: SecureConnectionsMode::default(),
            bondable: true,
            connectable: true,
            le: true,
            advertising: LeAdvertisingMode::default(),
            discoverable: DiscoverableMode::default(),
            discoverable_timeout: 0,
            advertised_uuid: None,
        }
    }
}

impl<T: Transport> ManagementClient<T> {
    /// Applies `settings`, stopping at the first command that fails.
    ///
    /// The controller is powered off first because BR/EDR and secure
    /// connections can only be changed while it is off. Discoverable is set
    /// last since a timeout needs a powered controller.
    pub async fn apply(&mut self, settings: &AdapterSettings) -> Result<()> {
        info!("{}: configuring adapter", self.controller);

        self.set_powered(false).await?;
        self.set_bredr(settings.bredr).await?;
        self.set_secure_connections(settings.secure_connections)
            .await?;
        self.set_bondable(settings.bondable).await?;
        self.set_connectable(settings.connectable).await?;
        self.set_le(settings.le).await?;
        self.set_local_name(&settings.name, &settings.short_name)
            .await?;
        self.set_advertising(settings.advertising).await?;

        if let Some(uuid) = settings.advertised_uuid {
            self.add_advertising(&settings.short_name, Some(uuid))
                .await?;
        }

        if settings.powered {
            self.set_powered(true).await?;
            self.set_discoverable(settings.discoverable, settings.discoverable_timeout)
                .await?;
        }

        Ok(())
    }
}

use bytes::*;
use log::debug;

pub use advertising::*;
pub use config::*;
pub use name::*;
pub use params::*;

use crate::management::interface::*;
use crate::management::transport::Transport;
use crate::management::Result;

mod advertising;
mod config;
mod name;
mod params;
mod settings;

/// Encodes adapter settings as management commands for a single controller
/// and submits them through a [`Transport`].
///
/// Apart from the controller index, the only state kept here is the last
/// advertisement added with [`add_advertising`](Self::add_advertising).
#[derive(Debug)]
pub struct ManagementClient<T> {
    transport: T,
    controller: Controller,
    last_advertisement: Option<ShortAdvertisement>,
}

impl<T: Transport> ManagementClient<T> {
    /// Attaches `transport` to `controller`. Fails if the transport cannot
    /// be synchronized with the controller.
    pub async fn new(transport: T, controller: Controller) -> Result<Self> {
        transport.sync(controller).await?;

        Ok(ManagementClient {
            transport,
            controller,
            last_advertisement: None,
        })
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    async fn exec_command(
        &self,
        opcode: Command,
        controller: Controller,
        param: Option<Bytes>,
    ) -> Result<()> {
        let request = Request {
            opcode,
            controller,
            param: param.unwrap_or_default(),
        };
        let param_len = request.param_len()?;

        debug!(
            "{}: sending {} ({} byte parameter)",
            controller, opcode, param_len
        );

        self.transport.send_command(request).await
    }
}

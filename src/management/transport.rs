use std::sync::Arc;

use futures::future::BoxFuture;

use crate::management::interface::{Controller, Request};
use crate::management::Result;

/// The channel that carries requests to the kernel.
///
/// Implementations own the socket, match each request with its Command
/// Complete or Command Status event and decide how long to wait for it. A
/// successful future means the controller acknowledged the command; a
/// rejected command should be reported as [`Error::CommandError`].
///
/// The methods take `&self` so that several clients can share a transport.
/// Serializing concurrent requests is up to the implementation.
///
/// [`Error::CommandError`]: crate::management::Error::CommandError
pub trait Transport {
    /// Prepares the transport for talking to `controller`.
    fn sync(&self, controller: Controller) -> BoxFuture<'_, Result<()>>;

    /// Sends `request` and resolves once the kernel has answered it.
    fn send_command(&self, request: Request) -> BoxFuture<'_, Result<()>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn sync(&self, controller: Controller) -> BoxFuture<'_, Result<()>> {
        (**self).sync(controller)
    }

    fn send_command(&self, request: Request) -> BoxFuture<'_, Result<()>> {
        (**self).send_command(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn sync(&self, controller: Controller) -> BoxFuture<'_, Result<()>> {
        (**self).sync(controller)
    }

    fn send_command(&self, request: Request) -> BoxFuture<'_, Result<()>> {
        (**self).send_command(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn sync(&self, controller: Controller) -> BoxFuture<'_, Result<()>> {
        (**self).sync(controller)
    }

    fn send_command(&self, request: Request) -> BoxFuture<'_, Result<()>> {
        (**self).send_command(request)
    }
}

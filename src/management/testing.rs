use std::sync::Mutex;

use futures::future::{self, BoxFuture, FutureExt};

use crate::management::interface::{CommandStatus, Controller, Request};
use crate::management::transport::Transport;
use crate::management::{Error, Result};

/// Records every request and answers with a configurable status.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    synced: Mutex<Vec<Controller>>,
    sent: Mutex<Vec<Request>>,
    failure: Mutex<Option<CommandStatus>>,
}

impl MockTransport {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self::default()
    }

    pub fn failing(status: CommandStatus) -> Self {
        let transport = Self::new();
        transport.fail_with(Some(status));
        transport
    }

    pub fn fail_with(&self, status: Option<CommandStatus>) {
        *self.failure.lock().unwrap() = status;
    }

    pub fn synced(&self) -> Vec<Controller> {
        self.synced.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<Request> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> Request {
        self.sent().pop().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    fn sync(&self, controller: Controller) -> BoxFuture<'_, Result<()>> {
        self.synced.lock().unwrap().push(controller);
        future::ready(Ok(())).boxed()
    }

    fn send_command(&self, request: Request) -> BoxFuture<'_, Result<()>> {
        let opcode = request.opcode;
        self.sent.lock().unwrap().push(request);

        let result = match *self.failure.lock().unwrap() {
            Some(status) => Err(Error::CommandError { opcode, status }),
            None => Ok(()),
        };

        future::ready(result).boxed()
    }
}

/// Refuses to attach to any controller.
#[derive(Debug, Default)]
pub(crate) struct DetachedTransport;

impl Transport for DetachedTransport {
    fn sync(&self, _controller: Controller) -> BoxFuture<'_, Result<()>> {
        future::ready(Err(Error::TimedOut)).boxed()
    }

    fn send_command(&self, _request: Request) -> BoxFuture<'_, Result<()>> {
        future::ready(Err(Error::TimedOut)).boxed()
    }
}

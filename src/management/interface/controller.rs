use std::fmt::{Display, Formatter};

/// Index of a controller as the kernel numbers them (`hci0` is index 0).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct Controller(pub(crate) u16);

impl Display for Controller {
    fn fmt(&self, f: &mut Formatter) -> Result<(), ::std::fmt::Error> {
        write!(f, "hci{}", self.0)
    }
}

impl From<Controller> for u16 {
    fn from(val: Controller) -> Self {
        val.0
    }
}

impl From<u16> for Controller {
    fn from(index: u16) -> Self {
        Controller(index)
    }
}

impl Controller {
    /// Used for commands that do not target a specific controller.
    pub fn none() -> Controller {
        Controller(0xFFFF)
    }

    pub fn index(&self) -> u16 {
        self.0
    }
}

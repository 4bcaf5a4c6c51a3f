//! # Management
//!
//! Adapter-level settings of a Bluetooth controller (name, power,
//! discoverability, security modes, advertising) are changed through the
//! kernel's management API. This crate encodes those commands; the central
//! type is [`management::ManagementClient`].
//!
//! The socket that carries the commands is not part of this crate. Anything
//! that implements [`management::Transport`] can be plugged in: it receives
//! fully encoded [`management::interface::Request`]s and reports whether the
//! kernel accepted them.
//!
//! # Permissions
//! Commands that change settings, such as
//! [`set_powered`](crate::management::ManagementClient::set_powered),
//! will fail with 'permission denied' errors if your process does not have the
//! `CAP_NET_ADMIN` capability.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate thiserror;

pub mod eir;
pub mod management;

//! Typed Sonos UPnP operations
//!
//! Every UPnP action the remote needs is a [`SonosOperation`] with its own
//! request and response types. [`SonosClient::execute`] sends one to a
//! speaker through the private `soap-client` crate.
//!
//! ```no_run
//! use sonos_api::SonosClient;
//! use sonos_api::operations::rendering_control::{SetVolumeOperation, SetVolumeRequest};
//!
//! let client = SonosClient::new();
//! client.execute::<SetVolumeOperation>("192.168.1.100", &SetVolumeRequest::master(30))?;
//! # Ok::<(), sonos_api::ApiError>(())
//! ```

pub mod client;
pub mod error;
pub mod operation;
pub mod operations;
pub mod service;

pub use client::SonosClient;
pub use error::{ApiError, Result};
pub use operation::SonosOperation;
pub use service::{Service, ServiceInfo};

//! The device catalog: the device model, the record codec, and the owning
//! collection.

#[allow(clippy::module_inception)]
mod catalog;
pub mod codec;
mod device;

pub use catalog::Catalog;
pub use codec::CodecError;
pub use codec::LoadSummary;
pub use device::Device;
pub use device::DeviceKind;
pub use device::DeviceTag;

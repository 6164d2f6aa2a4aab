use super::device::Device;

/// The in-memory ordered collection of all known devices for the running
/// session.
///
/// The catalog exclusively owns its devices. It is created by the codec at
/// load time or empty by the caller, mutated by the installation workflow,
/// and written back through the codec on save. Removal and lookup-by-id are
/// deliberately absent; `contains_id` exists only for duplicate detection.
#[derive(Debug, Default)]
pub struct Catalog {
    devices: Vec<Device>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a device, preserving insertion order.
    pub fn add(&mut self, device: Device) {
        self.devices.push(device);
    }

    /// All devices in insertion order.
    pub fn all(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Whether any device already carries this id.
    pub fn contains_id(&self, id: i32) -> bool {
        self.devices.iter().any(|d| d.id == id)
    }
}

//! # Identificação PCI
//!
//! Descrição de dispositivos descobertos pela enumeração do barramento.
//!
//! A varredura do espaço de configuração pertence ao kernel; o driver
//! recebe um `PciDevice` já preenchido e decide, estruturalmente, se o
//! par vendor/device é dele — sem downcast de tipo em runtime.

/// Vendor ID da Red Hat (VirtIO)
pub const VENDOR_REDHAT: u16 = 0x1AF4;

/// Device ID do VirtIO Net
pub const DEVICE_VIRTIO_NET: u16 = 0x1000;

/// Device ID do VirtIO Block
pub const DEVICE_VIRTIO_BLK: u16 = 0x1001;

/// Device ID do VirtIO RNG
pub const DEVICE_VIRTIO_RNG: u16 = 0x1005;

/// Informações de um dispositivo PCI descoberto
#[derive(Debug, Clone)]
pub struct PciDevice {
    /// Número do barramento
    pub bus: u8,
    /// Número do dispositivo
    pub device: u8,
    /// Número da função
    pub function: u8,
    /// Vendor ID
    pub vendor_id: u16,
    /// Device ID
    pub device_id: u16,
    /// Revision ID
    pub revision: u8,
}

impl PciDevice {
    /// Verifica se o par vendor/device confere
    pub fn id_matches(&self, vendor_id: u16, device_id: u16) -> bool {
        self.vendor_id == vendor_id && self.device_id == device_id
    }

    /// Verifica se é um dispositivo VirtIO
    pub fn is_virtio(&self) -> bool {
        self.vendor_id == VENDOR_REDHAT
    }

    /// Verifica se é um dispositivo VirtIO RNG
    pub fn is_virtio_rng(&self) -> bool {
        self.id_matches(VENDOR_REDHAT, DEVICE_VIRTIO_RNG)
    }
}

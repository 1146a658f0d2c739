//! DevFS - Camada genérica de dispositivos
//!
//! A superfície de registro e despacho que o driver usa para aparecer
//! como um char device.
//!
//! # Módulos
//!
//! - `device` - Trait Device e tipos base
//! - `uio` - Descritor de destino de leitura (estilo uio/uiomove)
//! - `registry` - Registro de dispositivos e tabela de arquivos abertos

pub mod device;
pub mod registry;
pub mod uio;

// Re-exports públicos
pub use device::{Device, DeviceNumber, DeviceType};
pub use registry::DeviceRegistry;
pub use uio::{SliceUio, UioBuffer};

// Constantes de dispositivos (major/minor numbers do Linux)
// Referência: https://www.kernel.org/doc/Documentation/admin-guide/devices.txt

/// /dev/hwrng - hardware random number generator
pub const DEV_HWRNG: DeviceNumber = DeviceNumber::new(10, 183);

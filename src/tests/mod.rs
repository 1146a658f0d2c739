//! Testes do driver virtio-rng
//!
//! # Como Executar os Testes
//!
//! ```bash
//! # Executar todos os testes (no host)
//! cargo test
//!
//! # Executar testes de um módulo específico
//! cargo test tests::rng
//! cargo test tests::devfs
//!
//! # Executar um teste específico
//! cargo test tests::rng::test_device_naming_sequence
//! ```
//!
//! # Estrutura dos Testes
//!
//! - `fakes.rs` - Dublês: FakeQueue instrumentada, FakeTransport, FailingUio
//! - `rng.rs` - Protocolo de requisição, probe, naming, concorrência
//! - `devfs.rs` - Registro de dispositivos, uio, despacho de read
//! - `pci.rs` - Match de identificadores
//! - `virtio.rs` - Feature flags e status
//!
//! # Convenções
//!
//! - Prefixo `test_` para testes unitários
//! - Testes que contam buffers vivos seguram `buffer_probe_guard()` para
//!   não disputar o contador global com testes vizinhos

#![cfg(test)]


mod devfs;
mod pci;
mod virtio;

use alloc::sync::Arc;

use crate::devfs::DeviceRegistry;
use crate::mm::HhdmTranslate;
use crate::pci::{PciDevice, DEVICE_VIRTIO_NET, DEVICE_VIRTIO_RNG, VENDOR_REDHAT};
use self::fakes::{FakeQueue, FakeTransport};

/// Serializa os testes que observam o contador global de buffers de
/// requisição (ver LIVE_REQUEST_BUFFERS).
pub fn buffer_probe_guard() -> std::sync::MutexGuard<'static, ()> {
    static PROBE: std::sync::Mutex<()> = std::sync::Mutex::new(());
    PROBE.lock().unwrap_or_else(|e| e.into_inner())
}

/// Dispositivo PCI com os ids do virtio-rng.
pub fn rng_pci_device() -> PciDevice {
    PciDevice {
        bus: 0,
        device: 4,
        function: 0,
        vendor_id: VENDOR_REDHAT,
        device_id: DEVICE_VIRTIO_RNG,
        revision: 0,
    }
}

/// Dispositivo PCI de outro driver (virtio-net).
pub fn net_pci_device() -> PciDevice {
    PciDevice {
        bus: 0,
        device: 3,
        function: 0,
        vendor_id: VENDOR_REDHAT,
        device_id: DEVICE_VIRTIO_NET,
        revision: 0,
    }
}

/// Monta uma instância pronta sobre a fila dada (tradução identity).
pub fn instance_over(
    queue: Arc<FakeQueue>,
) -> (Arc<FakeTransport>, Arc<DeviceRegistry>, Arc<crate::VirtioRng>) {
    let transport = FakeTransport::new(queue);
    let registry = Arc::new(DeviceRegistry::new());
    let rng = crate::VirtioRng::new(
        0,
        transport.clone(),
        Arc::new(HhdmTranslate::identity()),
        &registry,
    )
    .expect("instancia deve registrar");
    (transport, registry, rng)
}

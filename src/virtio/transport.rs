//! Contrato do transporte VirtIO (por dispositivo)

use alloc::sync::Arc;

use super::features::{DeviceStatus, VirtioFeatures};
use super::queue::VirtQueue;

/// Superfície do transporte que um driver consome.
///
/// Uma implementação por dispositivo descoberto (virtio-pci legacy,
/// virtio-pci moderno ou virtio-mmio). Todas as operações são `&self`;
/// o transporte resolve sua própria exclusão interna.
pub trait Transport: Send + Sync {
    /// Handshake padrão de features: intersecta `supported` com o que o
    /// dispositivo oferece, grava o resultado e o retorna.
    fn setup_features(&self, supported: VirtioFeatures) -> VirtioFeatures;

    /// Acrescenta bits ao registrador de status do dispositivo.
    fn add_status(&self, status: DeviceStatus);

    /// Resolve a fila de índice `index`, se existir.
    fn queue(&self, index: u16) -> Option<Arc<dyn VirtQueue>>;
}

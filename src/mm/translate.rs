//! Tradução Virtual → Físico para buffers DMA
//!
//! O backend VirtIO recebe endereços físicos; o driver aloca buffers no
//! heap do kernel (endereços virtuais). Quem sabe converter é o MM do
//! kernel — o driver só carrega o contrato.

use super::addr::{PhysAddr, VirtAddr};

/// Contrato de tradução de endereços consumido pelo driver.
pub trait AddrTranslate: Send + Sync {
    /// Converte um endereço virtual do kernel para físico.
    fn virt_to_phys(&self, va: VirtAddr) -> PhysAddr;
}

/// Tradução via Higher Half Direct Map.
///
/// Com toda a RAM mapeada em `HHDM_BASE + phys`, a conversão inversa é
/// `virt - offset`. Offset zero equivale a identity mapping (útil em
/// testes e em early boot).
pub struct HhdmTranslate {
    offset: u64,
}

impl HhdmTranslate {
    /// Cria um tradutor com o offset do direct map.
    pub const fn new(offset: u64) -> Self {
        Self { offset }
    }

    /// Tradutor identity (virt == phys).
    pub const fn identity() -> Self {
        Self { offset: 0 }
    }
}

impl AddrTranslate for HhdmTranslate {
    fn virt_to_phys(&self, va: VirtAddr) -> PhysAddr {
        PhysAddr::new(va.as_u64() - self.offset)
    }
}

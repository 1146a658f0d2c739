//! # Memory Interface (MM)
//!
//! A visão que o driver tem da memória do kernel: tipos de endereço
//! type-safe e a tradução Virtual → Físico necessária para descrever
//! buffers DMA ao transporte VirtIO.
//!
//! A tradução real pertence ao kernel (page tables / HHDM); aqui fica
//! apenas o contrato (`AddrTranslate`) e a implementação direct-map
//! (`HhdmTranslate`) usada quando toda a RAM está mapeada com offset fixo.

pub mod addr;
pub mod translate;

pub use addr::{PhysAddr, VirtAddr};
pub use translate::{AddrTranslate, HhdmTranslate};

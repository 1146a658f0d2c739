//! Forge VirtIO RNG Driver.
//!
//! Driver de entropia paravirtualizada (virtio-rng) para o Redstone OS.
//! Expõe o dispositivo como um char device (`/dev/random`) e move bytes
//! do backend do hipervisor através de uma virtqueue de requisições.
//!
//! O crate compila `no_std` para o target do kernel; os testes unitários
//! rodam no host (ver `src/tests/mod.rs`).

#![cfg_attr(not(test), no_std)]

// Habilitar alocação dinâmica (necessário para Vec/Box/Arc)
extern crate alloc;

// --- Interfaces Externas (Barramento, Transporte, Memória) ---
pub mod mm; // Endereços físicos/virtuais e tradução DMA
pub mod pci; // Identificação de dispositivos no barramento
pub mod virtio; // Contratos do transporte VirtIO (fila, features)

// --- Camada Genérica de Dispositivos ---
pub mod devfs; // Char devices, registro e uio

// --- Módulos Centrais ---
pub mod drivers; // O driver virtio-rng propriamente dito
pub mod logging; // Macros de log (kerror!/kinfo!/ktrace!)
pub mod sys; // Códigos de erro POSIX (Errno)

// Re-exportar os tipos principais para acesso fácil no kernel
pub use crate::drivers::virtio_rng::{RngError, VirtioRng, VirtioRngDriver};

#[cfg(test)]
mod tests;

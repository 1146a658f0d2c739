//! # VirtIO Transport Interface
//!
//! Contratos consumidos pelos drivers VirtIO do Redstone OS.
//!
//! A implementação do transporte (anéis de descritores, notificação MMIO,
//! negociação no espaço de configuração PCI) vive no kernel; os drivers
//! enxergam apenas estas traits:
//!
//! ```text
//! ┌──────────────┐   setup_features / add_status   ┌──────────────┐
//! │    Driver    │────────────────────────────────▶│  Transport   │
//! │ (virtio-rng) │   queue(n)                      │ (pci/mmio)   │
//! └──────┬───────┘                                 └──────┬───────┘
//!        │ push_sg / add_buf / kick                       │
//!        ▼                                                ▼
//! ┌──────────────┐      used ring                  ┌──────────────┐
//! │  VirtQueue   │◀────────────────────────────────│   Backend    │
//! └──────────────┘                                 └──────────────┘
//! ```

pub mod features;
pub mod queue;
pub mod transport;

pub use features::{driver_features, DeviceStatus, VirtioFeatures};
pub use queue::{BufferToken, SgDirection, SgElement, VirtQueue};
pub use transport::Transport;

//! # Driver Layer
//!
//! Drivers de dispositivo deste crate. Hoje apenas o virtio-rng; os
//! contratos de transporte e de char device que ele consome vivem em
//! `crate::virtio` e `crate::devfs`.

pub mod virtio_rng;

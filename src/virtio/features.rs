//! Feature flags e status de dispositivo VirtIO
//!
//! Bits definidos pela especificação VirtIO. A negociação é o handshake
//! padrão: o transporte lê os bits do dispositivo, intersecta com os bits
//! suportados pelo driver e grava o resultado.

use bitflags::bitflags;

bitflags! {
    /// Feature bits negociáveis com o dispositivo.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct VirtioFeatures: u64 {
        /// Notificar mesmo com available ring vazio
        const NOTIFY_ON_EMPTY = 1 << 24;
        /// Layout arbitrário de descritores
        const ANY_LAYOUT = 1 << 27;
        /// Descritores indiretos
        const RING_INDIRECT_DESC = 1 << 28;
        /// Supressão de interrupções via event index
        const RING_EVENT_IDX = 1 << 29;
        /// Dispositivo moderno (VirtIO 1.0+)
        const VERSION_1 = 1 << 32;
    }
}

bitflags! {
    /// Bits do registrador de status do dispositivo.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DeviceStatus: u8 {
        /// Guest reconheceu o dispositivo
        const ACKNOWLEDGE = 1;
        /// Guest sabe dirigir o dispositivo
        const DRIVER = 2;
        /// Driver pronto - dispositivo pode operar
        const DRIVER_OK = 4;
        /// Negociação de features concluída
        const FEATURES_OK = 8;
        /// Dispositivo precisa de reset
        const DEVICE_NEEDS_RESET = 64;
        /// Guest desistiu do dispositivo
        const FAILED = 128;
    }
}

/// Features que o driver virtio-rng anuncia ao dispositivo.
///
/// O rng não define feature bits próprios; apenas os bits genéricos de
/// transporte entram na negociação.
pub fn driver_features() -> VirtioFeatures {
    VirtioFeatures::VERSION_1 | VirtioFeatures::ANY_LAYOUT
}

//! Contrato da virtqueue de requisições
//!
//! O anel de descritores (descriptor table, available ring, used ring)
//! pertence ao transporte. O driver enxerga a fila por esta trait: monta
//! elementos scatter/gather, submete com um token de correlação, notifica
//! e espera o backend consumir.

use crate::mm::PhysAddr;

/// Token que correlaciona um buffer submetido com sua entrada no used
/// ring. Por convenção é o endereço do buffer, como o cookie de
/// `add_buf` no transporte.
pub type BufferToken = usize;

/// Direção de um buffer do ponto de vista do dispositivo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgDirection {
    /// Dispositivo lê do buffer (driver → device)
    DeviceRead,
    /// Dispositivo escreve no buffer (device → driver)
    DeviceWrite,
}

/// Um elemento scatter/gather: endereço físico, tamanho e direção.
#[derive(Debug, Clone, Copy)]
pub struct SgElement {
    pub addr: PhysAddr,
    pub len: u32,
    pub dir: SgDirection,
}

impl SgElement {
    pub fn new(addr: PhysAddr, len: u32, dir: SgDirection) -> Self {
        Self { addr, len, dir }
    }
}

/// Operações da fila de requisições.
///
/// Implementações carregam locking interno; o serializador real é o lock
/// da instância do driver — a fila nunca vê dois submitters concorrentes
/// da mesma instância.
pub trait VirtQueue: Send + Sync {
    /// Descarta estado scatter/gather pendente de montagens anteriores.
    fn clear_sg(&self);

    /// Acrescenta um elemento à montagem scatter/gather corrente.
    fn push_sg(&self, elem: SgElement);

    /// Submete a montagem corrente ao available ring, correlacionada ao
    /// token. Retorna `false` se não há slot livre.
    fn add_buf(&self, token: BufferToken) -> bool;

    /// Notifica o backend (doorbell).
    fn kick(&self);

    /// Bloqueia o contexto chamador até o used ring ter ao menos uma
    /// entrada. Único ponto de suspensão do protocolo; espera
    /// cooperativa, sem timeout.
    fn wait_used(&self);

    /// Converte a próxima entrada do used ring no token do buffer
    /// consumido.
    fn get_buf_finalize(&self) -> Option<BufferToken>;

    /// Recolhe a contabilidade do slot consumido, liberando-o para a
    /// próxima requisição.
    fn get_buf_gc(&self);
}

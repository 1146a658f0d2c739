//! # Driver VirtIO RNG
//!
//! Fonte de entropia paravirtualizada (QEMU/KVM `virtio-rng-pci`).
//!
//! ## Referências
//!
//! - [Especificação VirtIO 1.1](https://docs.oasis-open.org/virtio/virtio/v1.1/virtio-v1.1.html)
//! - Dispositivo virtio-rng do QEMU (vendor=0x1AF4, device=0x1005)
//!
//! ## Funcionamento
//!
//! Cada leitura vira uma requisição síncrona: o driver aloca um buffer do
//! tamanho pedido, descreve-o como um elemento scatter/gather write-only
//! (o backend escreve nele), submete na fila de requisições, notifica o
//! hipervisor e bloqueia até o used ring sinalizar a conclusão. Depois
//! recolhe o slot e copia os bytes para o destino do chamador.
//!
//! Uma requisição em voo por instância: o mutex da instância cobre a
//! sequência inteira, inclusive a espera. A fila não tem isolamento
//! interno por requisição, então a serialização é o que impede o backend
//! de escrever num buffer que já não pertence a quem espera.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use spin::Mutex;

use crate::devfs::{Device, DeviceNumber, DeviceRegistry, DeviceType, UioBuffer, DEV_HWRNG};
use crate::mm::{AddrTranslate, VirtAddr};
use crate::pci::{PciDevice, DEVICE_VIRTIO_RNG, VENDOR_REDHAT};
use crate::sys::Errno;
use crate::virtio::{
    driver_features, BufferToken, DeviceStatus, SgDirection, SgElement, Transport, VirtioFeatures,
};

/// Nome do driver
const DRIVER_NAME: &str = "virtio_rng";

/// Nome base do device node (primeira instância sem sufixo)
const RANDOM_DEVICE_NAME: &str = "random";

/// Índice da fila de requisições
const REQUEST_QUEUE: u16 = 0;

/// Erros do protocolo de requisição.
///
/// Nenhum é recuperado ou retentado internamente; todos sobem síncronos
/// para o chamador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngError {
    /// Tamanho zero ou destino vazio
    InvalidArgument,
    /// Instância sem fila de requisições resolvida
    QueueUnavailable,
    /// Submissão rejeitada: nenhum slot livre no ring
    QueueFull,
    /// O destino recusou a cópia final
    CopyFailure(Errno),
}

impl RngError {
    /// Código POSIX visto pela camada de char device.
    pub fn errno(self) -> Errno {
        match self {
            RngError::InvalidArgument => Errno::EINVAL,
            RngError::QueueUnavailable => Errno::ENXIO,
            RngError::QueueFull => Errno::EBUSY,
            RngError::CopyFailure(e) => e,
        }
    }
}

/// Contador de buffers vivos, usado pelos testes para provar que nenhum
/// caminho de erro vaza o buffer de requisição.
#[cfg(test)]
pub(crate) static LIVE_REQUEST_BUFFERS: core::sync::atomic::AtomicUsize =
    core::sync::atomic::AtomicUsize::new(0);

/// Buffer transitório de uma requisição.
///
/// Alocado no heap para que o endereço fique estável entre a submissão e
/// a cópia final — o backend guarda o endereço físico e escreve nele
/// depois que o driver já saiu de `push_sg`.
struct RequestBuffer {
    data: Vec<u8>,
}

impl RequestBuffer {
    fn new(len: usize) -> Self {
        #[cfg(test)]
        LIVE_REQUEST_BUFFERS.fetch_add(1, core::sync::atomic::Ordering::SeqCst);
        Self {
            data: vec![0u8; len],
        }
    }

    /// Endereço virtual da base do buffer (para tradução DMA).
    fn base(&mut self) -> VirtAddr {
        VirtAddr::from_mut_ptr(self.data.as_mut_ptr())
    }

    /// Token de correlação: o endereço do buffer.
    fn token(&self) -> BufferToken {
        self.data.as_ptr() as usize
    }

    fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
impl Drop for RequestBuffer {
    fn drop(&mut self) {
        LIVE_REQUEST_BUFFERS.fetch_sub(1, core::sync::atomic::Ordering::SeqCst);
    }
}

/// Uma instância do dispositivo virtio-rng.
pub struct VirtioRng {
    /// Índice da instância (0 = primeira)
    id: usize,
    /// Nome do device node ("random", "random0", ...)
    name: String,
    /// Device number registrado
    dev: DeviceNumber,
    /// Features negociadas no probe
    features: VirtioFeatures,
    /// Transporte deste dispositivo
    transport: Arc<dyn Transport>,
    /// Tradução Virtual → Físico para o buffer DMA
    translate: Arc<dyn AddrTranslate>,
    /// Serializa requisições: no máximo uma em voo por instância
    lock: Mutex<()>,
}

impl core::fmt::Debug for VirtioRng {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtioRng")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("dev", &self.dev)
            .field("features", &self.features)
            .finish_non_exhaustive()
    }
}

impl VirtioRng {
    /// Constrói uma instância e a registra como char device.
    ///
    /// Negocia features, marca DRIVER_OK e calcula o nome: a primeira
    /// instância é `random`, a de índice i (i >= 1) é `random{i-1}`.
    /// Falha de registro é fatal — a instância nunca fica utilizável.
    pub fn new(
        id: usize,
        transport: Arc<dyn Transport>,
        translate: Arc<dyn AddrTranslate>,
        registry: &DeviceRegistry,
    ) -> Result<Arc<Self>, Errno> {
        crate::kinfo!("(VirtIO-RNG) Nova instancia:", id as u64);

        let features = transport.setup_features(driver_features());
        transport.add_status(DeviceStatus::DRIVER_OK);

        let name = if id > 0 {
            alloc::format!("{}{}", RANDOM_DEVICE_NAME, id - 1)
        } else {
            String::from(RANDOM_DEVICE_NAME)
        };

        let drv = Arc::new(Self {
            id,
            name,
            dev: DeviceNumber::new(DEV_HWRNG.major, DEV_HWRNG.minor + id as u32),
            features,
            transport,
            translate,
            lock: Mutex::new(()),
        });

        registry.register(drv.clone())?;
        Ok(drv)
    }

    /// Índice desta instância.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Features negociadas com o dispositivo.
    pub fn features(&self) -> VirtioFeatures {
        self.features
    }

    /// Nome do driver.
    pub fn driver_name(&self) -> &'static str {
        DRIVER_NAME
    }

    /// Executa uma requisição síncrona de entropia.
    ///
    /// Preenche o destino descrito por `uio` com exatamente `resid`
    /// bytes vindos do backend, ou falha sem transferir nada. O lock da
    /// instância cobre a sequência inteira, inclusive a espera pelo
    /// used ring.
    pub fn make_request(&self, uio: &mut dyn UioBuffer) -> Result<usize, RngError> {
        let _guard = self.lock.lock();

        let size = uio.resid();
        if size < 1 {
            crate::kerror!("(VirtIO-RNG) Tamanho de leitura invalido.");
            return Err(RngError::InvalidArgument);
        }

        let queue = match self.transport.queue(REQUEST_QUEUE) {
            Some(q) => q,
            None => {
                crate::kerror!("(VirtIO-RNG) Fila de requisicoes invalida.");
                return Err(RngError::QueueUnavailable);
            }
        };

        let mut req_buf = RequestBuffer::new(size);

        // Montagens anteriores já foram recolhidas; limpar é defensivo.
        queue.clear_sg();
        queue.push_sg(SgElement::new(
            self.translate.virt_to_phys(req_buf.base()),
            size as u32,
            SgDirection::DeviceWrite,
        ));

        // Com uma requisição em voo por instância sempre deve haver slot;
        // o caminho de erro continua vivo mesmo assim.
        if !queue.add_buf(req_buf.token()) {
            crate::kerror!("(VirtIO-RNG) Sem buffers disponiveis no ring.");
            return Err(RngError::QueueFull);
        }

        crate::ktrace!("(VirtIO-RNG) Kick.");
        queue.kick();

        crate::ktrace!("(VirtIO-RNG) Esperando used ring.");
        queue.wait_used();

        crate::ktrace!("(VirtIO-RNG) Recolhendo slot.");
        queue.get_buf_finalize();
        queue.get_buf_gc();

        if let Err(e) = uio.copy_out(req_buf.as_slice()) {
            crate::kerror!("(VirtIO-RNG) Falha na copia para o destino.");
            return Err(RngError::CopyFailure(e));
        }

        Ok(size)
    }
}

impl Device for VirtioRng {
    fn name(&self) -> &str {
        &self.name
    }

    fn device_type(&self) -> DeviceType {
        DeviceType::Character
    }

    fn device_number(&self) -> DeviceNumber {
        self.dev
    }

    fn read(&self, uio: &mut dyn UioBuffer) -> Result<usize, Errno> {
        self.make_request(uio).map_err(|e| e.errno())
    }

    // write e ioctl ficam nos defaults da trait (ENOSYS)
}

/// Driver de barramento: match de ids e numeração de instâncias.
///
/// O contador de instâncias é estado explícito do driver (não um global
/// do processo): ids crescem monotonicamente e nunca são reaproveitados,
/// mesmo quando uma construção falha depois da reserva.
pub struct VirtioRngDriver {
    instances: Mutex<usize>,
}

impl VirtioRngDriver {
    pub const fn new() -> Self {
        Self {
            instances: Mutex::new(0),
        }
    }

    /// Nome do driver.
    pub fn name(&self) -> &'static str {
        DRIVER_NAME
    }

    /// Tenta reivindicar um dispositivo descoberto pelo barramento.
    ///
    /// Match estrutural pelo par vendor/device — `Ok(None)` quando os
    /// ids não conferem; construção só acontece com match exato.
    pub fn probe(
        &self,
        dev: &PciDevice,
        transport: Arc<dyn Transport>,
        translate: Arc<dyn AddrTranslate>,
        registry: &DeviceRegistry,
    ) -> Result<Option<Arc<VirtioRng>>, Errno> {
        if !dev.id_matches(VENDOR_REDHAT, DEVICE_VIRTIO_RNG) {
            return Ok(None);
        }

        let id = {
            let mut instances = self.instances.lock();
            let id = *instances;
            *instances += 1;
            id
        };

        VirtioRng::new(id, transport, translate, registry).map(Some)
    }
}

impl Default for VirtioRngDriver {
    fn default() -> Self {
        Self::new()
    }
}

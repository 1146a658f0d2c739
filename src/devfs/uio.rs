//! Uio - Descritor do destino de uma leitura
//!
//! Modela o par `struct uio` + `uiomove`: o handler de leitura recebe um
//! descritor do buffer do chamador e copia bytes para ele. A cópia pode
//! falhar (EFAULT) se o destino foi invalidado — por isso a operação
//! retorna `Result`, diferente de um simples `&mut [u8]`.

use crate::sys::Errno;

/// Destino de uma leitura de dispositivo.
pub trait UioBuffer {
    /// Bytes que o chamador ainda quer receber.
    fn resid(&self) -> usize;

    /// Copia `src` para o destino, avançando o offset interno.
    fn copy_out(&mut self, src: &[u8]) -> Result<(), Errno>;
}

/// Implementação padrão sobre um slice do kernel.
pub struct SliceUio<'a> {
    dest: &'a mut [u8],
    offset: usize,
}

impl<'a> SliceUio<'a> {
    pub fn new(dest: &'a mut [u8]) -> Self {
        Self { dest, offset: 0 }
    }

    /// Bytes já copiados para o destino.
    pub fn transferred(&self) -> usize {
        self.offset
    }
}

impl UioBuffer for SliceUio<'_> {
    fn resid(&self) -> usize {
        self.dest.len() - self.offset
    }

    fn copy_out(&mut self, src: &[u8]) -> Result<(), Errno> {
        if src.len() > self.resid() {
            return Err(Errno::EFAULT);
        }
        self.dest[self.offset..self.offset + src.len()].copy_from_slice(src);
        self.offset += src.len();
        Ok(())
    }
}

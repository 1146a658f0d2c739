//! Device Registry - Registro de dispositivos
//!
//! Guarda os dispositivos registrados pelos drivers e a tabela de
//! arquivos abertos que encaminha read/write para o dispositivo certo.

use alloc::sync::Arc;
use alloc::vec::Vec;
use spin::Mutex;

use super::device::Device;
use super::uio::UioBuffer;
use crate::sys::Errno;

/// Número máximo de dispositivos
const MAX_DEVICES: usize = 256;

/// Número máximo de arquivos abertos simultâneos
const MAX_OPEN_FILES: usize = 64;

/// Registro de dispositivos
pub struct DeviceRegistry {
    /// Dispositivos registrados
    devices: Mutex<Vec<Arc<dyn Device>>>,
    /// Tabela de arquivos abertos (índice = fd)
    open_files: Mutex<Vec<Option<Arc<dyn Device>>>>,
}

impl DeviceRegistry {
    /// Cria um novo registro
    pub fn new() -> Self {
        Self {
            devices: Mutex::new(Vec::new()),
            open_files: Mutex::new(Vec::new()),
        }
    }

    /// Registra um dispositivo.
    ///
    /// Nomes são únicos: um segundo registro com o mesmo nome é rejeitado
    /// com EEXIST.
    pub fn register(&self, device: Arc<dyn Device>) -> Result<(), Errno> {
        let mut devices = self.devices.lock();

        if devices.len() >= MAX_DEVICES {
            crate::kerror!("(DevFS) Registro de dispositivos cheio.");
            return Err(Errno::ENFILE);
        }
        if devices.iter().any(|d| d.name() == device.name()) {
            return Err(Errno::EEXIST);
        }

        devices.push(device);
        Ok(())
    }

    /// Remove um dispositivo pelo nome
    pub fn unregister(&self, name: &str) -> Result<(), Errno> {
        let mut devices = self.devices.lock();
        let pos = devices
            .iter()
            .position(|d| d.name() == name)
            .ok_or(Errno::ENOENT)?;
        devices.remove(pos);
        Ok(())
    }

    /// Busca um dispositivo por nome
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Device>> {
        self.devices
            .lock()
            .iter()
            .find(|d| d.name() == name)
            .cloned()
    }

    /// Abre um dispositivo, retornando um fd
    pub fn open(&self, name: &str) -> Result<usize, Errno> {
        let device = self.lookup(name).ok_or(Errno::ENOENT)?;
        device.open()?;

        let mut open_files = self.open_files.lock();

        // Reusar slot livre se houver
        if let Some(fd) = open_files.iter().position(|f| f.is_none()) {
            open_files[fd] = Some(device);
            return Ok(fd);
        }

        if open_files.len() >= MAX_OPEN_FILES {
            return Err(Errno::EMFILE);
        }

        open_files.push(Some(device));
        Ok(open_files.len() - 1)
    }

    /// Fecha um fd
    pub fn close(&self, fd: usize) -> Result<(), Errno> {
        let device = {
            let mut open_files = self.open_files.lock();
            open_files
                .get_mut(fd)
                .and_then(|f| f.take())
                .ok_or(Errno::EBADF)?
        };
        device.close()
    }

    /// Lê de um fd para o destino descrito por `uio`
    pub fn read(&self, fd: usize, uio: &mut dyn UioBuffer) -> Result<usize, Errno> {
        self.file(fd)?.read(uio)
    }

    /// Escreve em um fd
    pub fn write(&self, fd: usize, buf: &[u8]) -> Result<usize, Errno> {
        self.file(fd)?.write(buf)
    }

    fn file(&self, fd: usize) -> Result<Arc<dyn Device>, Errno> {
        self.open_files
            .lock()
            .get(fd)
            .and_then(|f| f.clone())
            .ok_or(Errno::EBADF)
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

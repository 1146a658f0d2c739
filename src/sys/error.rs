//! # Standard Error Codes (Errno)
//!
//! Define os códigos de erro retornados ao kernel pela camada de char device.
//! Baseado no padrão POSIX para compatibilidade com o resto do sistema.
//!
//! Valores negativos são usados em retornos de syscalls (isize).

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errno {
    Success = 0,
    EPERM = 1,   // Operation not permitted
    ENOENT = 2,  // No such file or directory
    EINTR = 4,   // Interrupted system call
    EIO = 5,     // I/O error
    ENXIO = 6,   // No such device or address
    EBADF = 9,   // Bad file number
    EAGAIN = 11, // Try again
    ENOMEM = 12, // Out of memory
    EFAULT = 14, // Bad address
    EBUSY = 16,  // Device or resource busy
    EEXIST = 17, // File exists
    ENODEV = 19, // No such device
    EINVAL = 22, // Invalid argument
    ENFILE = 23, // File table overflow
    EMFILE = 24, // Too many open files
    ENOSPC = 28, // No space left on device
    ENOSYS = 38, // Function not implemented
}

impl Errno {
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn as_isize(self) -> isize {
        -(self as i32) as isize
    }
}

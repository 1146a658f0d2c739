//! System Definitions (ABI).
//!
//! Contém as constantes e tipos que definem a interface entre o driver e o Kernel.

pub mod error;

pub use error::Errno;

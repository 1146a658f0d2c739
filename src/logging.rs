// =============================================================================
// DRIVER LOGGING SYSTEM - ZERO OVERHEAD
// =============================================================================
//
// Sistema de logging do driver com custo ZERO em release.
//
// ARQUITETURA:
// Este sistema foi projetado para ser completamente removível em release:
// - Usa features do Cargo para compile-time filtering
// - Com feature "no_logs", TODOS os macros viram expressões vazias
// - SEM core::fmt - Evita geração de código SSE/AVX
// - SEM alocação - Apenas strings literais e buffer de pilha
//
// Um driver não é dono da porta serial. O kernel instala um sink com
// `set_sink()` durante o boot; sem sink instalado as linhas são descartadas.
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Erros fatais ou críticos
// - WARN:  Situações suspeitas mas recuperáveis
// - INFO:  Fluxo normal de execução
// - DEBUG: Informações de debugging
// - TRACE: Detalhes extremos (cada kick/wait/reclaim)
//
// COMO USAR:
//   kinfo!("(VirtIO-RNG) Nova instancia:");      // Apenas string
//   kinfo!("(VirtIO-RNG) Id=", 0x1);             // String + hex
//
// =============================================================================

use spin::Mutex;

/// Função de saída instalada pelo kernel (normalmente a serial).
pub type SinkFn = fn(&str);

static SINK: Mutex<Option<SinkFn>> = Mutex::new(None);

/// Instala o sink de log. Chamado uma vez pelo kernel durante o boot.
pub fn set_sink(sink: SinkFn) {
    *SINK.lock() = Some(sink);
}

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================
//
// Cores ANSI para terminais que suportam (como o QEMU serial console).
// Formato: \x1b[<código>m  (1;31 = Bold Red, 1;33 = Bold Yellow,
// 32 = Green, 36 = Cyan, 35 = Magenta, 0 = Reset)
//

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";

// =============================================================================
// CAMADA DE EMISSÃO
// =============================================================================

/// Emite uma string pelo sink instalado.
pub fn emit_str(s: &str) {
    if let Some(sink) = *SINK.lock() {
        sink(s);
    }
}

/// Emite newline.
pub fn emit_nl() {
    emit_str("\n");
}

fn nibble_to_ascii(nibble: u8) -> u8 {
    match nibble {
        0..=9 => b'0' + nibble,
        _ => b'a' + (nibble - 10),
    }
}

/// Emite um valor como hexadecimal (0x + 16 nibbles), sem core::fmt.
pub fn emit_hex(value: u64) {
    let mut buf = [0u8; 18];
    buf[0] = b'0';
    buf[1] = b'x';
    for i in 0..16 {
        let shift = 60 - (i * 4);
        buf[2 + i] = nibble_to_ascii(((value >> shift) & 0xF) as u8);
    }
    // SAFETY: buf contém apenas ASCII gerado acima
    emit_str(unsafe { core::str::from_utf8_unchecked(&buf) });
}

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR
// =============================================================================
//
// kerror! - Sempre ativo (exceto com no_logs)
// Usado para erros críticos que podem causar falha da requisição.
//

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    // Apenas string literal
    ($msg:expr) => {{
        $crate::logging::emit_str($crate::logging::P_ERROR);
        $crate::logging::emit_str($msg);
        $crate::logging::emit_nl();
    }};
    // String + valor hex
    ($msg:expr, $val:expr) => {{
        $crate::logging::emit_str($crate::logging::P_ERROR);
        $crate::logging::emit_str($msg);
        $crate::logging::emit_hex($val as u64);
        $crate::logging::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL WARN
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    ($msg:expr) => {{
        $crate::logging::emit_str($crate::logging::P_WARN);
        $crate::logging::emit_str($msg);
        $crate::logging::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::logging::emit_str($crate::logging::P_WARN);
        $crate::logging::emit_str($msg);
        $crate::logging::emit_hex($val as u64);
        $crate::logging::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================

#[cfg(any(feature = "log_info", feature = "log_debug", feature = "log_trace"))]
#[macro_export]
macro_rules! kinfo {
    ($msg:expr) => {{
        $crate::logging::emit_str($crate::logging::P_INFO);
        $crate::logging::emit_str($msg);
        $crate::logging::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::logging::emit_str($crate::logging::P_INFO);
        $crate::logging::emit_str($msg);
        $crate::logging::emit_hex($val as u64);
        $crate::logging::emit_nl();
    }};
}

#[cfg(not(any(feature = "log_info", feature = "log_debug", feature = "log_trace")))]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================

#[cfg(any(feature = "log_debug", feature = "log_trace"))]
#[macro_export]
macro_rules! kdebug {
    ($msg:expr) => {{
        $crate::logging::emit_str($crate::logging::P_DEBUG);
        $crate::logging::emit_str($msg);
        $crate::logging::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::logging::emit_str($crate::logging::P_DEBUG);
        $crate::logging::emit_str($msg);
        $crate::logging::emit_hex($val as u64);
        $crate::logging::emit_nl();
    }};
}

#[cfg(not(any(feature = "log_debug", feature = "log_trace")))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL TRACE
// =============================================================================

#[cfg(feature = "log_trace")]
#[macro_export]
macro_rules! ktrace {
    ($msg:expr) => {{
        $crate::logging::emit_str($crate::logging::P_TRACE);
        $crate::logging::emit_str($msg);
        $crate::logging::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::logging::emit_str($crate::logging::P_TRACE);
        $crate::logging::emit_str($msg);
        $crate::logging::emit_hex($val as u64);
        $crate::logging::emit_nl();
    }};
}

#[cfg(not(feature = "log_trace"))]
#[macro_export]
macro_rules! ktrace {
    ($($t:tt)*) => {{}};
}

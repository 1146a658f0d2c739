//! Testes da camada de dispositivos (registro, uio, despacho)

#![cfg(test)]

use alloc::sync::Arc;
use alloc::vec;

use super::fakes::StubDevice;
use crate::devfs::{DeviceNumber, DeviceRegistry, SliceUio, UioBuffer};
use crate::sys::Errno;

#[test]
fn test_device_number_creation() {
    let dev = DeviceNumber::new(10, 183);
    assert_eq!(dev.major, 10);
    assert_eq!(dev.minor, 183);
}

#[test]
fn test_device_number_u64_roundtrip() {
    let dev = DeviceNumber::new(10, 183);
    // Formato Linux: major << 20 | minor
    let expected = (10u64 << 20) | 183;
    assert_eq!(dev.as_u64(), expected);
    assert_eq!(DeviceNumber::from_u64(expected), dev);
}

#[test]
fn test_register_and_lookup() {
    let registry = DeviceRegistry::new();
    registry
        .register(Arc::new(StubDevice::named("null")))
        .unwrap();

    assert!(registry.lookup("null").is_some());
    assert!(registry.lookup("zero").is_none());
}

#[test]
fn test_register_duplicate_name_rejected() {
    let registry = DeviceRegistry::new();
    registry
        .register(Arc::new(StubDevice::named("null")))
        .unwrap();

    let err = registry
        .register(Arc::new(StubDevice::named("null")))
        .unwrap_err();
    assert_eq!(err, Errno::EEXIST);
}

#[test]
fn test_unregister() {
    let registry = DeviceRegistry::new();
    registry
        .register(Arc::new(StubDevice::named("null")))
        .unwrap();

    registry.unregister("null").unwrap();
    assert!(registry.lookup("null").is_none());
    assert_eq!(registry.unregister("null"), Err(Errno::ENOENT));
}

#[test]
fn test_open_unknown_device() {
    let registry = DeviceRegistry::new();
    assert_eq!(registry.open("nope"), Err(Errno::ENOENT));
}

#[test]
fn test_open_read_close() {
    let registry = DeviceRegistry::new();
    registry
        .register(Arc::new(StubDevice::with_payload("stub", vec![7, 8, 9])))
        .unwrap();

    let fd = registry.open("stub").unwrap();
    let mut dest = [0u8; 3];
    let mut uio = SliceUio::new(&mut dest);
    assert_eq!(registry.read(fd, &mut uio).unwrap(), 3);
    drop(uio);
    assert_eq!(dest, [7, 8, 9]);

    registry.close(fd).unwrap();
    // fd fechado não despacha mais
    let mut dest = [0u8; 3];
    let mut uio = SliceUio::new(&mut dest);
    assert_eq!(registry.read(fd, &mut uio), Err(Errno::EBADF));
    assert_eq!(registry.close(fd), Err(Errno::EBADF));
}

#[test]
fn test_fd_slot_reuse() {
    let registry = DeviceRegistry::new();
    registry
        .register(Arc::new(StubDevice::named("stub")))
        .unwrap();

    let fd1 = registry.open("stub").unwrap();
    registry.close(fd1).unwrap();
    let fd2 = registry.open("stub").unwrap();
    assert_eq!(fd1, fd2);
}

#[test]
fn test_write_is_rejected_by_default() {
    let registry = DeviceRegistry::new();
    registry
        .register(Arc::new(StubDevice::named("stub")))
        .unwrap();

    let fd = registry.open("stub").unwrap();
    assert_eq!(registry.write(fd, b"abc"), Err(Errno::ENOSYS));
}

#[test]
fn test_slice_uio_tracks_offset() {
    let mut dest = [0u8; 8];
    let mut uio = SliceUio::new(&mut dest);

    assert_eq!(uio.resid(), 8);
    uio.copy_out(&[1, 2, 3]).unwrap();
    assert_eq!(uio.resid(), 5);
    assert_eq!(uio.transferred(), 3);

    uio.copy_out(&[4, 5, 6, 7, 8]).unwrap();
    assert_eq!(uio.resid(), 0);
    drop(uio);
    assert_eq!(dest, [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_slice_uio_overflow_faults() {
    let mut dest = [0u8; 2];
    let mut uio = SliceUio::new(&mut dest);
    assert_eq!(uio.copy_out(&[1, 2, 3]), Err(Errno::EFAULT));
    // Nada parcial foi transferido
    assert_eq!(uio.transferred(), 0);
}

//! Testes de identificação PCI

#![cfg(test)]

use super::{net_pci_device, rng_pci_device};
use crate::pci::{DEVICE_VIRTIO_RNG, VENDOR_REDHAT};

#[test]
fn test_id_constants() {
    assert_eq!(VENDOR_REDHAT, 0x1AF4);
    assert_eq!(DEVICE_VIRTIO_RNG, 0x1005);
}

#[test]
fn test_id_matches() {
    let dev = rng_pci_device();
    assert!(dev.id_matches(VENDOR_REDHAT, DEVICE_VIRTIO_RNG));
    assert!(!dev.id_matches(VENDOR_REDHAT, 0x1001));
    assert!(!dev.id_matches(0x8086, DEVICE_VIRTIO_RNG));
}

#[test]
fn test_virtio_predicates() {
    let rng = rng_pci_device();
    assert!(rng.is_virtio());
    assert!(rng.is_virtio_rng());

    // virtio-net é VirtIO, mas não é o nosso dispositivo
    let net = net_pci_device();
    assert!(net.is_virtio());
    assert!(!net.is_virtio_rng());
}

//! Testes dos contratos VirtIO (features, status, scatter/gather)

#![cfg(test)]

use crate::mm::PhysAddr;
use crate::virtio::{driver_features, DeviceStatus, SgDirection, SgElement, VirtioFeatures};

#[test]
fn test_driver_features() {
    let features = driver_features();
    assert!(features.contains(VirtioFeatures::VERSION_1));
    assert!(features.contains(VirtioFeatures::ANY_LAYOUT));
    // O rng não pede supressão por event index
    assert!(!features.contains(VirtioFeatures::RING_EVENT_IDX));
}

#[test]
fn test_device_status_bits() {
    // Valores fixados pela especificação VirtIO
    assert_eq!(DeviceStatus::ACKNOWLEDGE.bits(), 1);
    assert_eq!(DeviceStatus::DRIVER.bits(), 2);
    assert_eq!(DeviceStatus::DRIVER_OK.bits(), 4);
    assert_eq!(DeviceStatus::FEATURES_OK.bits(), 8);
    assert_eq!(DeviceStatus::FAILED.bits(), 128);
}

#[test]
fn test_feature_bit_positions() {
    assert_eq!(VirtioFeatures::ANY_LAYOUT.bits(), 1 << 27);
    assert_eq!(VirtioFeatures::RING_INDIRECT_DESC.bits(), 1 << 28);
    assert_eq!(VirtioFeatures::RING_EVENT_IDX.bits(), 1 << 29);
    assert_eq!(VirtioFeatures::VERSION_1.bits(), 1 << 32);
}

#[test]
fn test_sg_element() {
    let elem = SgElement::new(PhysAddr::new(0x1000), 64, SgDirection::DeviceWrite);
    assert_eq!(elem.addr.as_u64(), 0x1000);
    assert_eq!(elem.len, 64);
    assert_eq!(elem.dir, SgDirection::DeviceWrite);
}

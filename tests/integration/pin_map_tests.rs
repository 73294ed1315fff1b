//! Pin map consistency across both board variants.

use std::collections::HashSet;

use samplerboard::pins::{self, ATMEGA328P, ATTINY841, Role, Variant};

#[test]
fn roles_in_range_unique_and_unreserved() {
    for variant in Variant::ALL {
        let map = variant.pin_map();
        let mut seen = HashSet::new();
        for (role, pin) in map.roles() {
            assert!(pin < map.pin_count(), "{variant:?}: {} out of range", role.name());
            assert!(!map.is_reserved(pin), "{variant:?}: {} on reserved pin", role.name());
            assert!(seen.insert(pin), "{variant:?}: pin {pin} bound twice");
        }
    }
}

#[test]
fn every_port_bit_is_distinct() {
    for variant in Variant::ALL {
        let map = variant.pin_map();
        let bits: HashSet<_> = map.port_bits.iter().map(|pb| (pb.port, pb.bit)).collect();
        assert_eq!(bits.len(), map.port_bits.len(), "{variant:?}");
    }
}

#[test]
fn warnled_only_on_standard_part() {
    assert_eq!(ATTINY841.pin(Role::WarnLed), None);
    assert_eq!(ATMEGA328P.pin(Role::WarnLed), Some(4));
}

#[test]
fn tables_share_no_binding_slice() {
    assert_ne!(ATTINY841.bindings, ATMEGA328P.bindings);
    assert_ne!(ATTINY841.variant, ATMEGA328P.variant);
}

#[test]
fn active_constants_name_the_active_table() {
    let map = &pins::ACTIVE;
    assert_eq!(map.role_at(pins::XBEE_ENABLE), Some(Role::XbeeEnable));
    assert_eq!(map.role_at(pins::MOTOR), Some(Role::Motor));
    assert_eq!(map.role_at(pins::PRESSURE), Some(Role::Pressure));
    assert_eq!(map.role_at(pins::RTC_ALARM_PIN), Some(Role::RtcAlarm));
    assert_eq!(map.role_at(pins::RTC_SS_PIN), Some(Role::RtcSs));
}

#[cfg(not(feature = "attiny841"))]
#[test]
fn default_build_is_atmega328p() {
    assert_eq!(pins::ACTIVE_VARIANT, Variant::Atmega328p);
    assert_eq!(pins::WARNLED, 4);
    assert_eq!(pins::XBEE_ENABLE, 5);
}

#[cfg(feature = "attiny841")]
#[test]
fn attiny841_build_selects_reduced_table() {
    assert_eq!(pins::ACTIVE_VARIANT, Variant::Attiny841);
    assert_eq!(pins::XBEE_ENABLE, 2);
    assert_eq!(pins::RTC_SS_PIN, 10);
}

#[test]
fn pin_map_serialises_with_schematic_role_names() {
    let json = serde_json::to_value(ATTINY841).unwrap();
    assert_eq!(json["variant"], "Attiny841");
    assert_eq!(json["bindings"][0][0], "XBEE_ENABLE");
    assert_eq!(json["bindings"][4], serde_json::json!(["RTC_SS_PIN", 10]));
    assert_eq!(json["dedicated"], serde_json::json!([0, 1, 11]));
}

use structinit::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusType {
    Available,
    Rented,
}

#[struct_init]
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    id: String,
    mileage: i64,
    owner: Option<String>,
    status: StatusType,
}

#[test]
fn test_car_initializer_assigns_every_field() {
    let car = Car::new(
        "VIN-1".to_string(),
        42_000,
        Some("ada".to_string()),
        StatusType::Rented,
    );

    assert_eq!(car.id, "VIN-1");
    assert_eq!(car.mileage, 42_000);
    assert_eq!(car.owner.as_deref(), Some("ada"));
    assert_eq!(car.status, StatusType::Rented);
}

#[test]
fn test_optional_field_accepts_none() {
    let car = Car::new("VIN-2".to_string(), 0, None, StatusType::Available);
    assert!(car.owner.is_none());
}

mod garage {
    use structinit::prelude::*;

    // Not `pub`, so the initializer is private to this module.
    #[struct_init]
    #[derive(Debug)]
    pub(crate) struct Bay {
        pub number: u16,
        pub covered: bool,
    }

    pub fn open_bay(number: u16) -> Bay {
        Bay::new(number, false)
    }

    #[struct_init(name = with_capacity)]
    pub struct Lot {
        pub name: &'static str,
        pub capacity: usize,
    }
}

#[test]
fn test_restricted_struct_initializer_usable_in_module() {
    let bay = garage::open_bay(7);
    assert_eq!(bay.number, 7);
    assert!(!bay.covered);
}

#[test]
fn test_custom_initializer_name() {
    let lot = garage::Lot::with_capacity("north", 120);
    assert_eq!(lot.name, "north");
    assert_eq!(lot.capacity, 120);
}

#[struct_init]
pub struct Tagged<'a, T: Clone>
where
    T: Default,
{
    label: &'a str,
    value: T,
}

#[test]
fn test_generic_struct() {
    let tagged = Tagged::new("speed", 88u32);
    assert_eq!(tagged.label, "speed");
    assert_eq!(tagged.value, 88);
}

#[struct_init]
pub struct Marker;

#[test]
fn test_unit_struct() {
    let _marker: Marker = Marker::new();
}

#[derive(StructInit, Debug, PartialEq)]
#[init(name = assemble)]
pub struct Engine {
    cylinders: u8,
    displacement: f32,
}

#[derive(StructInit)]
pub struct Wheel {
    size: u8,
    r#type: &'static str,
}

#[test]
fn test_derive_initializer() {
    let engine = Engine::assemble(8, 5.7);
    assert_eq!(
        engine,
        Engine {
            cylinders: 8,
            displacement: 5.7
        }
    );

    let wheel = Wheel::new(17, "alloy");
    assert_eq!(wheel.size, 17);
    assert_eq!(wheel.r#type, "alloy");
}

#[struct_init]
#[derive(Debug, PartialEq)]
pub struct Sensor {
    reading: u16,
    #[cfg(any())]
    calibration: f32,
    #[cfg(all())]
    channel: u8,
}

#[derive(StructInit)]
pub struct Gauge {
    #[cfg(any())]
    serial: String,
    depth: u32,
}

#[test]
fn test_cfg_disabled_fields_are_left_out() {
    let sensor = Sensor::new(512, 3);
    assert_eq!(
        sensor,
        Sensor {
            reading: 512,
            channel: 3
        }
    );

    let gauge = Gauge::new(40);
    assert_eq!(gauge.depth, 40);
}

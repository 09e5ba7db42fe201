use structinit_macros::struct_init;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusType {
    Available,
}

#[struct_init]
pub struct Car {
    id: String,
    mileage: i64,
    owner: Option<String>,
    status: StatusType,
}

fn main() {
    let car = Car::new("VIN-1".to_string(), 12_000, None, StatusType::Available);
    assert_eq!(car.id, "VIN-1");
    assert_eq!(car.mileage, 12_000);
    assert!(car.owner.is_none());
    assert_eq!(car.status, StatusType::Available);
}

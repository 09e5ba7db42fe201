use structinit_macros::StructInit;

#[derive(StructInit)]
#[init(name = from_parts)]
pub struct Reading<T>
where
    T: Copy,
{
    sensor: &'static str,
    value: T,
}

fn main() {
    let reading = Reading::from_parts("oil_temp", 98.5f32);
    assert_eq!(reading.sensor, "oil_temp");
    assert_eq!(reading.value, 98.5);
}

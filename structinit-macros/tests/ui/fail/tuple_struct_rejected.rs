use structinit_macros::StructInit;

#[derive(StructInit)]
pub struct Meters(f64);

fn main() {
    let _ = Meters(1.0).0;
}

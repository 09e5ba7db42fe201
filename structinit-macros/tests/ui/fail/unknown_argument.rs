use structinit_macros::struct_init;

#[struct_init(label = fresh)]
pub struct Wheel {
    size: u8,
}

fn main() {
    let _ = Wheel { size: 17 }.size;
}

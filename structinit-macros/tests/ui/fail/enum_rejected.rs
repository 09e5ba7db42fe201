use structinit_macros::struct_init;

#[struct_init]
pub enum Status {
    Active,
}

fn main() {
    let _ = Status::Active;
}

use typeseq::prelude::*;

struct Meters(#[allow(dead_code)] f32);
struct Seconds(#[allow(dead_code)] f64);

element! {
    Meters => 64, 4;
    Seconds => 64, 8;
}

fn main() {
    let _ = typeseq::find::<tlist![u8, Meters, Seconds], Seconds>();
}

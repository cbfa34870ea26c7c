use typeseq::prelude::*;

struct Opaque;

fn main() {
    let _ = typeseq::find::<tlist![u8, Opaque], Opaque>();
}

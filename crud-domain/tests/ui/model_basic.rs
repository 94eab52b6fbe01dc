use crud_domain::entity::{Identified, Model};
use crud_domain::model;

#[model(id = u32)]
struct ColorModel {
    name: String,
}

fn main() {
    let m = ColorModel {
        id: Some(3),
        name: "teal".into(),
    };
    assert_eq!(m.id(), Some(&3));
    let () = Model::stamp(&m);
}

use crud_domain::entity;
use crud_domain::entity::Identified;
use crud_domain::value_object::Version;

// 已声明的 id/version 字段被复用并移动到最前
#[entity(id = i64, versioned, debug = false)]
#[derive(PartialEq)]
struct Invoice {
    number: String,
    version: Version,
    id: Option<i64>,
}

impl std::fmt::Debug for Invoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invoice({})", self.number)
    }
}

fn main() {
    let invoice = Invoice {
        id: Some(1),
        version: Version::from_value(2),
        number: "INV-1".into(),
    };
    assert_eq!(invoice.id(), Some(&1));
    assert_eq!(format!("{invoice:?}"), "Invoice(INV-1)");
    assert_eq!(invoice.clone(), invoice);
}

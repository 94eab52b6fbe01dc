use crud_domain::entity;
use crud_domain::entity::{Entity, Identified};

#[entity]
struct Account {
    name: String,
}

fn main() {
    let mut account = Account::default();
    account.assign_id("acc-1".to_string());
    assert_eq!(account.id().map(String::as_str), Some("acc-1"));
    assert_eq!(Account::TYPE, "account");
    let _ = account.name;
}

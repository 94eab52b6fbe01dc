use crud_domain::entity_id;
use uuid::Uuid;

#[entity_id]
struct UserId(Uuid);

#[entity_id(debug = false)]
struct ProfileId(Uuid);

impl std::fmt::Debug for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProfileId(..)")
    }
}

fn main() {
    let id = UserId::new(Uuid::new_v4());
    let _ = format!("{:?}", id);

    let pid = ProfileId::new(Uuid::new_v4());
    assert_eq!(format!("{:?}", pid), "ProfileId(..)");
}

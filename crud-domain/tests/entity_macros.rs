use chrono::Utc;
use crud_domain::audit::Auditable;
use crud_domain::concurrency::{ConcurrencyMode, Optimistic, Unversioned};
use crud_domain::entity::{Entity, Identified, Model, Versioned};
use crud_domain::value_object::Version;
use crud_domain::{entity, entity_id, model};

#[entity_id]
struct OrderId(u64);

#[entity(id = OrderId, versioned, auditable)]
struct PurchaseOrder {
    customer: String,
    total_cents: i64,
}

#[model(id = OrderId, versioned)]
struct PurchaseOrderModel {
    customer: String,
    total_cents: i64,
}

#[entity(id = uuid::Uuid, name = "tag")]
struct Label {
    text: String,
}

fn is_optimistic<E: Entity<Concurrency = Optimistic>>() {}
fn is_unversioned<E: Entity<Concurrency = Unversioned>>() {}

#[test]
fn entity_id_newtype_conversions() {
    let id: OrderId = "42".parse().unwrap();
    assert_eq!(id, OrderId::new(42));
    assert_eq!(id.to_string(), "42");
    assert_eq!(*id.as_ref(), 42);
    assert_eq!(u64::from(id.clone()), 42);
    assert_eq!(OrderId::from(42u64).into_inner(), 42);
}

#[test]
fn versioned_auditable_entity() {
    is_optimistic::<PurchaseOrder>();
    assert!(<<PurchaseOrder as Entity>::Concurrency as ConcurrencyMode>::VERSIONED);
    assert_eq!(PurchaseOrder::TYPE, "purchase_order");

    let mut order = PurchaseOrder {
        customer: "acme".into(),
        total_cents: 1_000,
        ..Default::default()
    };
    assert!(order.id().is_none());
    assert!(order.version().is_new());

    order.assign_id(OrderId::new(7));
    order.set_version(Version::from_value(3));
    order.audit_mut().record_creation("alice", Utc::now());

    assert_eq!(order.id(), Some(&OrderId::new(7)));
    assert_eq!(Entity::stamp(&order), Version::from_value(3));
    assert_eq!(order.audit().created_by(), Some("alice"));
}

#[test]
fn audit_fields_flatten_into_the_entity_row() -> anyhow::Result<()> {
    let mut order = PurchaseOrder {
        id: Some(OrderId::new(1)),
        customer: "acme".into(),
        ..Default::default()
    };
    order.audit_mut().record_modification("bob", Utc::now());

    let json = serde_json::to_value(&order)?;
    assert_eq!(json["id"], 1);
    assert_eq!(json["version"], 0);
    assert_eq!(json["modified_by"], "bob");
    assert!(json.get("audit").is_none());

    let back: PurchaseOrder = serde_json::from_value(json)?;
    assert_eq!(back.audit().modified_by(), Some("bob"));
    Ok(())
}

#[test]
fn model_carries_caller_version() {
    let model = PurchaseOrderModel {
        id: Some(OrderId::new(7)),
        version: Version::from_value(2),
        customer: "acme".into(),
        total_cents: 5,
    };
    assert_eq!(Model::stamp(&model), Version::from_value(2));
    assert_eq!(model.clone(), model);
}

#[test]
fn unversioned_entity_with_uuid_id() {
    is_unversioned::<Label>();
    assert_eq!(Label::TYPE, "tag");

    let mut label = Label {
        text: "urgent".into(),
        ..Default::default()
    };
    let id = uuid::Uuid::new_v4();
    label.assign_id(id);
    assert_eq!(label.id(), Some(&id));
    assert_eq!(label.text, "urgent");
}

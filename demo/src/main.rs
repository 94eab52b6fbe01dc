use chrono::Utc;
use crud_application::hooks::{FnHooks, HookFn};
use crud_application::mapper::EntityMapper;
use crud_application::{CrudOperations, CrudService, InMemoryRepository, VersionedDelete};
use crud_domain::audit::Auditable;
use crud_domain::error::CrudResult;
use crud_domain::value_object::Version;
use crud_domain::{entity, entity_id, model};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[entity_id]
struct ProductId(u64);

#[entity(id = ProductId, versioned, auditable, name = "product")]
struct ProductRow {
    name: String,
    price_cents: i64,
}

#[model(id = ProductId, versioned)]
struct Product {
    name: String,
    price_cents: i64,
}

struct ProductMapper;

impl EntityMapper<ProductRow, Product> for ProductMapper {
    fn new_entity(&self) -> ProductRow {
        ProductRow::default()
    }

    fn to_entity(&self, model: &Product, mut row: ProductRow) -> ProductRow {
        row.name = model.name.clone();
        row.price_cents = model.price_cents;
        row
    }

    fn to_model(&self, row: &ProductRow) -> Product {
        Product {
            id: row.id.clone(),
            version: row.version,
            name: row.name.clone(),
            price_cents: row.price_cents,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

// 演示用：创建/更新时记录审计信息
fn audited(actor: &'static str) -> HookFn<ProductRow> {
    Box::new(move |mut row: ProductRow| -> CrudResult<ProductRow> {
        if row.id.is_none() {
            row.audit_mut().record_creation(actor, Utc::now());
        } else {
            row.audit_mut().record_modification(actor, Utc::now());
        }
        Ok(row)
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let hooks = FnHooks::builder()
        .before_create(audited("demo"))
        .before_update(audited("demo"))
        .build();
    let service: CrudService<ProductRow, Product, _, _, _> =
        CrudService::new(InMemoryRepository::new(), ProductMapper).with_hooks(hooks);

    // 创建
    let lamp = service
        .create(&Product {
            name: "lamp".into(),
            price_cents: 2_500,
            ..Default::default()
        })
        .await?;
    let id = lamp.id.clone().ok_or_else(|| anyhow::anyhow!("id not assigned"))?;
    println!("created: id={}, version={}", id, lamp.version);

    // 更新三次，版本推进到 v3
    let mut current = lamp;
    for price in [2_400, 2_300, 2_200] {
        current.price_cents = price;
        current = service.update(&current).await?;
    }
    println!(
        "updated: price={}, version={}",
        current.price_cents, current.version
    );

    // 以过期版本删除：冲突，记录保留
    match service.delete_versioned(&id, Version::from_value(2)).await {
        Err(err) if err.is_conflict() => info!(%err, "stale delete rejected"),
        other => anyhow::bail!("expected a version conflict, got {other:?}"),
    }
    println!("still present: {}", service.find_by_id(&id).await?.is_some());

    // 以当前版本删除：成功
    service.delete_versioned(&id, current.version).await?;
    println!("present after delete: {}", service.find_by_id(&id).await?.is_some());

    // 运行时传入不符合能力的期望版本
    let err = service.delete_with(&id, None).await;
    println!("delete without version: {:?}", err.err());

    Ok(())
}

use pg_json_wire::{
    AttrLen, ColumnDescriptor, EncoderOptions, EncoderSession, FixedCatalog, MemoryTransport,
    RelationRef, StartupPhase,
};

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("pg_json_wire=trace")
        .try_init()
        .ok();
}

/// A catalog with one explicit-membership publication `outbox` (id 7) and
/// one all-tables publication `firehose` (id 8). Relation 100 lives in
/// `public` and is a member of `outbox`.
pub fn catalog() -> FixedCatalog {
    let mut catalog = FixedCatalog::new();
    catalog.add_publication("outbox", 7, false);
    catalog.add_publication("firehose", 8, true);
    catalog.add_namespace(100, "public");
    catalog.add_namespace(200, "audit");
    catalog.add_member(100, 7);
    catalog
}

pub fn orders_relation() -> RelationRef {
    RelationRef {
        id: 100,
        name: "orders".to_string(),
        columns: vec![
            ColumnDescriptor::new("id", 1, 23, AttrLen::Fixed(4)),
            ColumnDescriptor::new("total", 2, 1700, AttrLen::Variable),
        ],
    }
}

pub fn session<'a>(
    catalog: &'a FixedCatalog,
    publication: &str,
) -> EncoderSession<&'a FixedCatalog, MemoryTransport> {
    EncoderSession::startup(
        catalog,
        MemoryTransport::new(),
        EncoderOptions {
            publication: Some(publication.to_string()),
        },
        StartupPhase::Stream,
    )
    .unwrap()
}

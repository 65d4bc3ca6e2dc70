//! The generic CRUD service.
//!
//! [`DynamoService`] forwards each call to a [`Store`], translating `$select`
//! into projection expressions on the way in and applying the service
//! conventions (id defaulting, post-selection, events) on the way out.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use dynoserv_core::projection::{ProjectionTranslator, ReservedWordSet};
use dynoserv_core::record::{ensure_id, pick, with_key, Id, Key, KeySchema, Record};
use dynoserv_core::service::{
    effective_limit, paginate, EventKind, FindResult, Params, Result, Service, ServiceError,
    ServiceEvent, ServiceOptions,
};
use dynoserv_core::storage::{GetOptions, ScanOptions, Store};

use crate::events::EventBus;

/// CRUD service over a single table.
pub struct DynamoService<S> {
    store: Arc<S>,
    options: ServiceOptions,
    schema: KeySchema,
    translator: ProjectionTranslator,
    path: String,
    events: EventBus,
}

impl<S: Store> DynamoService<S> {
    /// Creates a service escaping the DynamoDB reserved words.
    ///
    /// Fails with [`ServiceError::InvalidConfiguration`] if the id field or
    /// the range key is empty, or if they differ from the store's key schema.
    pub fn new(store: S, options: ServiceOptions) -> Result<Self> {
        Self::with_reserved_words(store, options, Arc::new(ReservedWordSet::dynamodb()))
    }

    /// Creates a service with a custom reserved-word set.
    pub fn with_reserved_words(
        store: S,
        options: ServiceOptions,
        reserved: Arc<ReservedWordSet>,
    ) -> Result<Self> {
        if options.range_key.as_deref() == Some("") {
            return Err(ServiceError::InvalidConfiguration(
                "range key field must not be empty".to_string(),
            ));
        }
        let translator = ProjectionTranslator::new(&options.id, reserved)?;
        let schema = KeySchema::new(&options.id, options.range_key.clone());
        if store.key_schema() != &schema {
            let table = store.key_schema();
            return Err(ServiceError::InvalidConfiguration(format!(
                "service key ({}, {:?}) does not match the store key ({}, {:?})",
                schema.hash_key, schema.range_key, table.hash_key, table.range_key
            )));
        }

        Ok(Self {
            store: Arc::new(store),
            options,
            schema,
            translator,
            path: String::new(),
            events: EventBus::new(),
        })
    }

    /// Publishes this service's events on `events` under `path`.
    pub fn with_event_bus(mut self, path: impl Into<String>, events: EventBus) -> Self {
        self.path = path.into();
        self.events = events;
        self
    }

    pub fn options(&self) -> &ServiceOptions {
        &self.options
    }

    pub fn id_field(&self) -> &str {
        &self.options.id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Builds the projection options for a read from `params`.
    pub fn get_options(&self, params: &Params) -> GetOptions {
        let selection = params.selection();
        let options = GetOptions::new(
            self.translator.translate(selection),
            self.translator.projected_fields(selection),
        );
        tracing::debug!(
            path = %self.path,
            projection = ?options.projection.projection_expression,
            names = ?options.projection.expression_attribute_names,
            "Translated read params"
        );
        options
    }

    /// Reduces `record` to the selected attributes plus the key.
    ///
    /// Returns the record untouched when no `$select` is present.
    pub fn post_select(&self, record: Record, params: &Params) -> Record {
        match params.selection() {
            Some(selection) => {
                let mut out = pick(&record, selection, &self.options.id);
                if let Some(range_key) = &self.options.range_key {
                    if let Some(value) = record.get(range_key) {
                        out.insert(range_key.clone(), value.clone());
                    }
                }
                out
            }
            None => record,
        }
    }

    fn publish(&self, kind: EventKind, data: Record) {
        self.events.publish(ServiceEvent {
            path: self.path.clone(),
            kind,
            data,
        });
    }

    fn key_for(&self, id: &Id) -> Result<Key> {
        self.schema.key_for(id).ok_or_else(|| {
            ServiceError::BadRequest(match &self.options.range_key {
                Some(range_key) => format!(
                    "Id must provide both '{}' and '{}'",
                    self.options.id, range_key
                ),
                None => format!("Id must be a single '{}' value", self.options.id),
            })
        })
    }

    fn prepare_create(&self, mut data: Record) -> Result<Record> {
        ensure_id(&mut data, &self.options.id, || Uuid::new_v4().to_string());
        if let Some(range_key) = &self.options.range_key {
            if data.get(range_key).is_none_or(|v| v.is_null()) {
                return Err(ServiceError::BadRequest(format!(
                    "Missing range key '{}'",
                    range_key
                )));
            }
        }
        Ok(data)
    }

    async fn write(&self, id: &Id, data: Record, kind: EventKind) -> Result<Option<Record>> {
        let key = self.key_for(id)?;
        let changes = with_key(&data, &key);
        let updated = self.store.update(&key, changes).await?;

        if let Some(record) = &updated {
            self.publish(kind, record.clone());
        }
        Ok(updated)
    }
}

#[async_trait]
impl<S: Store> Service for DynamoService<S> {
    async fn find(&self, params: &Params) -> Result<FindResult> {
        let query = params.query.clone().unwrap_or_default();

        if let Some(operator) = query.filters.keys().find(|k| k.starts_with('$')) {
            return Err(ServiceError::BadRequest(format!(
                "Unsupported query operator '{}'",
                operator
            )));
        }

        let read = self.get_options(params);
        let options = ScanOptions {
            projection: read.projection,
            attributes: read.attributes,
            filters: query.filters,
        };
        let records = self.store.scan_all(&options).await?;
        let skip = query.skip.unwrap_or(0);

        if self.options.paginate.default.is_some() {
            let limit = effective_limit(query.limit, &self.options.paginate).unwrap_or(usize::MAX);
            return Ok(FindResult::Page(paginate(records, skip, limit)));
        }

        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(FindResult::All(
            records.into_iter().skip(skip).take(limit).collect(),
        ))
    }

    async fn get(&self, id: &Id, params: &Params) -> Result<Option<Record>> {
        let key = self.key_for(id)?;
        let options = self.get_options(params);
        Ok(self.store.get(&key, &options).await?)
    }

    async fn create(&self, data: Record, _params: &Params) -> Result<Record> {
        let record = self.prepare_create(data)?;
        let created = self.store.put(record).await?;
        self.publish(EventKind::Created, created.clone());
        Ok(created)
    }

    async fn create_many(&self, data: Vec<Record>, params: &Params) -> Result<Vec<Record>> {
        let mut created = Vec::with_capacity(data.len());
        for record in data {
            created.push(self.create(record, params).await?);
        }
        Ok(created)
    }

    async fn update(&self, id: &Id, data: Record, _params: &Params) -> Result<Option<Record>> {
        self.write(id, data, EventKind::Updated).await
    }

    async fn patch(&self, id: &Id, data: Record, _params: &Params) -> Result<Option<Record>> {
        self.write(id, data, EventKind::Patched).await
    }

    async fn remove(&self, id: Option<&Id>, params: &Params) -> Result<Option<Record>> {
        let Some(id) = id else {
            return Err(ServiceError::MethodNotAllowed(
                "Bulk remove operation not supported".to_string(),
            ));
        };
        let key = self.key_for(id)?;

        let removed = self
            .store
            .delete(&key)
            .await?
            .map(|record| self.post_select(record, params));

        if let Some(record) = &removed {
            self.publish(EventKind::Removed, record.clone());
        }
        Ok(removed)
    }

    fn emit(&self, name: &str, data: Record) -> Result<()> {
        if !self.options.events.iter().any(|e| e == name) {
            return Err(ServiceError::BadRequest(format!(
                "Event '{}' is not registered on this service",
                name
            )));
        }
        self.publish(EventKind::Custom(name.to_string()), data);
        Ok(())
    }
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;
    use crate::storage::inmemory::InMemoryStore;
    use dynoserv_core::service::{Paginate, Query};
    use dynoserv_core::storage::StoreError;
    use serde_json::{json, Value};

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    fn people() -> DynamoService<InMemoryStore> {
        DynamoService::new(
            InMemoryStore::new(KeySchema::new("id", None)),
            ServiceOptions::default().with_events(["testing"]),
        )
        .unwrap()
    }

    fn no_params() -> Params {
        Params::default()
    }

    fn select(fields: &[&str]) -> Params {
        Params::with_query(Query::select(fields.iter().copied()))
    }

    async fn create_doug(service: &DynamoService<InMemoryStore>) -> Record {
        service
            .create(
                record(json!({ "name": "Doug", "age": 32, "time": 10, "created": true })),
                &no_params(),
            )
            .await
            .unwrap()
    }

    fn id_of(record: &Record) -> Id {
        Id::from(record.get("id").cloned().unwrap())
    }

    // ==================== Construction ====================

    #[test]
    fn test_empty_id_field_is_invalid_configuration() {
        let result = DynamoService::new(
            InMemoryStore::new(KeySchema::new("id", None)),
            ServiceOptions::default().with_id(""),
        );
        assert!(matches!(
            result,
            Err(ServiceError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_empty_range_key_is_invalid_configuration() {
        let result = DynamoService::new(
            InMemoryStore::new(KeySchema::new("id", None)),
            ServiceOptions::default().with_range_key(""),
        );
        assert!(matches!(
            result,
            Err(ServiceError::InvalidConfiguration(_))
        ));
    }

    #[tokio::test]
    async fn test_id_field_must_match_store_key() {
        let result = DynamoService::new(
            InMemoryStore::new(KeySchema::new("id", None)),
            ServiceOptions::default().with_id("_id"),
        );
        assert!(matches!(
            result,
            Err(ServiceError::InvalidConfiguration(_))
        ));

        let service = DynamoService::new(
            InMemoryStore::new(KeySchema::new("_id", None)),
            ServiceOptions::default().with_id("_id"),
        )
        .unwrap();
        let created = service
            .create(record(json!({ "name": "Doug" })), &no_params())
            .await
            .unwrap();
        assert!(created.get("_id").is_some_and(Value::is_string));
        assert!(created.get("id").is_none());
    }

    #[test]
    fn test_range_key_must_match_store_key() {
        let result = DynamoService::new(
            InMemoryStore::new(KeySchema::new("id", Some("sk".to_string()))),
            ServiceOptions::default(),
        );
        assert!(matches!(
            result,
            Err(ServiceError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_get_options_translate_select() {
        let service = people();

        let options = service.get_options(&select(&["name", "time"]));

        assert_eq!(
            options.projection.projection_expression.as_deref(),
            Some("#name, #time, id")
        );
        assert_eq!(
            service.get_options(&no_params()),
            GetOptions::default()
        );
    }

    // ==================== Create ====================

    #[tokio::test]
    async fn test_create_assigns_uuid_id() {
        let service = people();

        let created = create_doug(&service).await;

        let id = created.get("id").and_then(Value::as_str).unwrap();
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(created.get("name"), Some(&json!("Doug")));
    }

    #[tokio::test]
    async fn test_create_keeps_given_id() {
        let service = people();

        let created = service
            .create(record(json!({ "id": "doug", "name": "Doug" })), &no_params())
            .await
            .unwrap();

        assert_eq!(created.get("id"), Some(&json!("doug")));
    }

    #[tokio::test]
    async fn test_create_many_returns_records_in_order() {
        let service = people();

        let created = service
            .create_many(
                vec![
                    record(json!({ "name": "Gerald" })),
                    record(json!({ "name": "Herald" })),
                ],
                &no_params(),
            )
            .await
            .unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(created[0].get("name"), Some(&json!("Gerald")));
        assert_eq!(created[1].get("name"), Some(&json!("Herald")));
        assert_ne!(created[0].get("id"), created[1].get("id"));
    }

    #[tokio::test]
    async fn test_create_requires_range_key_when_configured() {
        let service = DynamoService::new(
            InMemoryStore::new(KeySchema::new("id", Some("sk".to_string()))),
            ServiceOptions::default().with_range_key("sk"),
        )
        .unwrap();

        let result = service
            .create(record(json!({ "name": "Doug" })), &no_params())
            .await;

        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
    }

    // ==================== Get ====================

    #[tokio::test]
    async fn test_get_returns_record() {
        let service = people();
        let doug = create_doug(&service).await;

        let found = service.get(&id_of(&doug), &no_params()).await.unwrap();

        assert_eq!(found, Some(doug));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let service = people();

        let found = service.get(&Id::from("nope"), &no_params()).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_get_with_select_returns_selected_fields_and_id() {
        let service = people();
        let doug = create_doug(&service).await;

        let found = service
            .get(&id_of(&doug), &select(&["name", "time"]))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            found,
            record(json!({ "id": doug["id"], "name": "Doug", "time": 10 }))
        );
    }

    #[tokio::test]
    async fn test_select_field_containing_separator() {
        let service = people();
        let created = service
            .create(
                record(json!({ "first, last": "Doug D", "first": "Doug" })),
                &no_params(),
            )
            .await
            .unwrap();

        let found = service
            .get(&id_of(&created), &select(&["first, last"]))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            found,
            record(json!({ "id": created["id"], "first, last": "Doug D" }))
        );
    }

    #[tokio::test]
    async fn test_get_rejects_composite_id_for_hash_table() {
        let service = people();
        let id = Id::Composite {
            hash: json!("1"),
            range: json!("2"),
        };

        let result = service.get(&id, &no_params()).await;

        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
    }

    // ==================== Patch / Update ====================

    #[tokio::test]
    async fn test_patch_merges_attributes() {
        let service = people();
        let doug = create_doug(&service).await;

        let patched = service
            .patch(&id_of(&doug), record(json!({ "name": "PatchDoug" })), &no_params())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(patched.get("name"), Some(&json!("PatchDoug")));
        assert_eq!(patched.get("age"), Some(&json!(32)));
        assert_eq!(patched.get("id"), doug.get("id"));
    }

    #[tokio::test]
    async fn test_patch_ignores_id_in_data() {
        let service = people();
        let doug = create_doug(&service).await;

        let patched = service
            .patch(
                &id_of(&doug),
                record(json!({ "id": "other", "age": 33 })),
                &no_params(),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(patched.get("id"), doug.get("id"));
        assert!(service
            .get(&Id::from("other"), &no_params())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_patch_missing_is_none() {
        let service = people();

        let patched = service
            .patch(&Id::from("nope"), record(json!({ "age": 1 })), &no_params())
            .await
            .unwrap();

        assert!(patched.is_none());
        assert!(service.find(&no_params()).await.unwrap().data().is_empty());
    }

    #[tokio::test]
    async fn test_update_behaves_like_patch() {
        let service = people();
        let doug = create_doug(&service).await;

        let updated = service
            .update(&id_of(&doug), record(json!({ "name": "Dougler" })), &no_params())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.get("name"), Some(&json!("Dougler")));
        assert_eq!(updated.get("created"), Some(&json!(true)));
    }

    // ==================== Remove ====================

    #[tokio::test]
    async fn test_remove_returns_old_record() {
        let service = people();
        let doug = create_doug(&service).await;

        let removed = service
            .remove(Some(&id_of(&doug)), &no_params())
            .await
            .unwrap();

        assert_eq!(removed, Some(doug.clone()));
        assert!(service
            .get(&id_of(&doug), &no_params())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_remove_with_select() {
        let service = people();
        let doug = create_doug(&service).await;

        let removed = service
            .remove(Some(&id_of(&doug)), &select(&["name"]))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(removed, record(json!({ "id": doug["id"], "name": "Doug" })));
    }

    #[tokio::test]
    async fn test_remove_missing_is_none() {
        let service = people();

        let removed = service
            .remove(Some(&Id::from("nope")), &no_params())
            .await
            .unwrap();

        assert!(removed.is_none());
    }

    #[tokio::test]
    async fn test_bulk_remove_not_supported() {
        let service = people();

        let result = service.remove(None, &no_params()).await;

        assert_eq!(
            result,
            Err(ServiceError::MethodNotAllowed(
                "Bulk remove operation not supported".to_string()
            ))
        );
    }

    // ==================== Find ====================

    #[tokio::test]
    async fn test_find_without_query_returns_everything() {
        let service = people();
        create_doug(&service).await;
        service
            .create(record(json!({ "name": "Bob", "age": 25 })), &no_params())
            .await
            .unwrap();

        let found = service.find(&no_params()).await.unwrap();

        assert!(matches!(found, FindResult::All(_)));
        assert_eq!(found.data().len(), 2);
    }

    #[tokio::test]
    async fn test_find_with_filter_and_select() {
        let service = people();
        let doug = create_doug(&service).await;
        service
            .create(record(json!({ "name": "Bob", "age": 25 })), &no_params())
            .await
            .unwrap();

        let query: Query =
            serde_json::from_value(json!({ "name": "Doug", "$select": ["age"] })).unwrap();
        let found = service
            .find(&Params::with_query(query))
            .await
            .unwrap()
            .into_data();

        assert_eq!(found, vec![record(json!({ "id": doug["id"], "age": 32 }))]);
    }

    #[tokio::test]
    async fn test_find_with_limit_and_skip() {
        let service = people();
        for i in 0..5 {
            service
                .create(record(json!({ "id": format!("p{i}") })), &no_params())
                .await
                .unwrap();
        }

        let query: Query = serde_json::from_value(json!({ "$limit": 2, "$skip": 1 })).unwrap();
        let found = service
            .find(&Params::with_query(query))
            .await
            .unwrap()
            .into_data();

        let ids: Vec<&Value> = found.iter().map(|r| &r["id"]).collect();
        assert_eq!(ids, vec![&json!("p1"), &json!("p2")]);
    }

    #[tokio::test]
    async fn test_find_paginates_when_configured() {
        let service = DynamoService::new(
            InMemoryStore::new(KeySchema::new("id", None)),
            ServiceOptions::default().with_paginate(Paginate {
                default: Some(2),
                max: Some(3),
            }),
        )
        .unwrap();
        for i in 0..5 {
            service
                .create(record(json!({ "id": format!("p{i}") })), &no_params())
                .await
                .unwrap();
        }

        let FindResult::Page(page) = service.find(&no_params()).await.unwrap() else {
            panic!("expected a page");
        };
        assert_eq!(page.total, 5);
        assert_eq!(page.limit, 2);
        assert_eq!(page.data.len(), 2);

        let query: Query = serde_json::from_value(json!({ "$limit": 10 })).unwrap();
        let FindResult::Page(page) = service.find(&Params::with_query(query)).await.unwrap()
        else {
            panic!("expected a page");
        };
        assert_eq!(page.limit, 3);
        assert_eq!(page.data.len(), 3);
    }

    #[tokio::test]
    async fn test_find_rejects_unknown_operator() {
        let service = people();
        let query: Query = serde_json::from_value(json!({ "$sort": { "name": 1 } })).unwrap();

        let result = service.find(&Params::with_query(query)).await;

        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
    }

    // ==================== Range keys ====================

    #[tokio::test]
    async fn test_composite_key_round_trip() {
        let service = DynamoService::new(
            InMemoryStore::new(KeySchema::new("id", Some("sk".to_string()))),
            ServiceOptions::default().with_range_key("sk"),
        )
        .unwrap();
        service
            .create(record(json!({ "id": "a", "sk": 1, "v": "one" })), &no_params())
            .await
            .unwrap();
        service
            .create(record(json!({ "id": "a", "sk": 2, "v": "two" })), &no_params())
            .await
            .unwrap();

        let id = Id::Composite {
            hash: json!("a"),
            range: json!(2),
        };
        let found = service.get(&id, &no_params()).await.unwrap().unwrap();
        assert_eq!(found.get("v"), Some(&json!("two")));

        let removed = service.remove(Some(&id), &select(&["v"])).await.unwrap();
        assert_eq!(removed, Some(record(json!({ "id": "a", "sk": 2, "v": "two" }))));
        assert_eq!(service.find(&no_params()).await.unwrap().data().len(), 1);

        let result = service.get(&Id::from("a"), &no_params()).await;
        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
    }

    // ==================== Events ====================

    #[tokio::test]
    async fn test_mutations_publish_events() {
        let service = people();
        let mut events = service.events().subscribe();

        let doug = create_doug(&service).await;
        service
            .patch(&id_of(&doug), record(json!({ "age": 33 })), &no_params())
            .await
            .unwrap();
        service
            .update(&id_of(&doug), record(json!({ "age": 34 })), &no_params())
            .await
            .unwrap();
        service
            .remove(Some(&id_of(&doug)), &no_params())
            .await
            .unwrap();

        let kinds: Vec<EventKind> = vec![
            events.recv().await.unwrap().kind,
            events.recv().await.unwrap().kind,
            events.recv().await.unwrap().kind,
            events.recv().await.unwrap().kind,
        ];
        assert_eq!(
            kinds,
            vec![
                EventKind::Created,
                EventKind::Patched,
                EventKind::Updated,
                EventKind::Removed
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_records_publish_nothing() {
        let service = people();
        let mut events = service.events().subscribe();

        service
            .patch(&Id::from("nope"), record(json!({ "age": 1 })), &no_params())
            .await
            .unwrap();
        service
            .remove(Some(&Id::from("nope")), &no_params())
            .await
            .unwrap();

        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_custom_events_must_be_registered() {
        let service = people();
        let mut events = service.events().subscribe();

        service.emit("testing", Record::new()).unwrap();
        assert_eq!(
            events.recv().await.unwrap().kind,
            EventKind::Custom("testing".to_string())
        );

        let result = service.emit("unknown", Record::new());
        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
    }

    // ==================== Store errors ====================

    struct FailingStore {
        schema: KeySchema,
    }

    impl FailingStore {
        fn new() -> Self {
            Self {
                schema: KeySchema::new("id", None),
            }
        }
    }

    #[async_trait]
    impl Store for FailingStore {
        fn key_schema(&self) -> &KeySchema {
            &self.schema
        }
        async fn get(&self, _: &Key, _: &GetOptions) -> dynoserv_core::storage::Result<Option<Record>> {
            Err(StoreError::QueryFailed("Throughput exceeded, please retry".into()))
        }
        async fn put(&self, _: Record) -> dynoserv_core::storage::Result<Record> {
            Err(StoreError::ConnectionFailed("refused".into()))
        }
        async fn update(&self, _: &Key, _: Record) -> dynoserv_core::storage::Result<Option<Record>> {
            Err(StoreError::ConnectionFailed("refused".into()))
        }
        async fn delete(&self, _: &Key) -> dynoserv_core::storage::Result<Option<Record>> {
            Err(StoreError::ConnectionFailed("refused".into()))
        }
        async fn scan_all(&self, _: &ScanOptions) -> dynoserv_core::storage::Result<Vec<Record>> {
            Err(StoreError::QueryFailed("Table not found".into()))
        }
    }

    #[tokio::test]
    async fn test_store_errors_propagate_unchanged() {
        let service = DynamoService::new(FailingStore::new(), ServiceOptions::default()).unwrap();

        assert_eq!(
            service.get(&Id::from("1"), &no_params()).await,
            Err(ServiceError::Store(StoreError::QueryFailed(
                "Throughput exceeded, please retry".into()
            )))
        );
        assert_eq!(
            service.find(&no_params()).await,
            Err(ServiceError::Store(StoreError::QueryFailed(
                "Table not found".into()
            )))
        );
        assert!(matches!(
            service.create(Record::new(), &no_params()).await,
            Err(ServiceError::Store(StoreError::ConnectionFailed(_)))
        ));
    }
}

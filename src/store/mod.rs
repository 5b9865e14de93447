/// Record store facade
///
/// Collection-agnostic create/read over a single flat `documents` table.
/// Every document is a JSONB payload keyed by a server-assigned UUID, with
/// a sequence column preserving insertion order. The facade is generically
/// typed over JSON mappings only at this boundary; callers hand in already
/// validated entity payloads.
use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store query failed: {0}")]
    Backend(#[from] sqlx::Error),
    #[error("invalid document: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("document payload must be a JSON object")]
    NotAnObject,
}

#[derive(Debug, Clone, Copy)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Sort on a top-level document field. Date fields are stored as ISO
/// strings, so lexicographic order equals chronological order.
#[derive(Debug, Clone)]
pub struct Sort {
    pub field: String,
    pub order: SortOrder,
}

impl Sort {
    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            order: SortOrder::Desc,
        }
    }
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    data: Value,
}

/// Convert an entity payload into the store's boundary shape
pub fn to_document<T: Serialize>(entity: &T) -> Result<Map<String, Value>, StoreError> {
    match serde_json::to_value(entity)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject),
    }
}

pub struct DocumentStore {
    pool: PgPool,
}

impl DocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one document; returns the newly assigned opaque id
    pub async fn create(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> Result<String, StoreError> {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, data)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id)
        .bind(collection)
        .bind(Value::Object(fields))
        .execute(&self.pool)
        .await?;

        Ok(id.to_string())
    }

    /// Fetch up to `limit` documents in transport-safe shape.
    ///
    /// Default ordering is insertion order; a `Sort` orders on the named
    /// top-level field instead.
    pub async fn list(
        &self,
        collection: &str,
        limit: i64,
        sort: Option<Sort>,
    ) -> Result<Vec<Map<String, Value>>, StoreError> {
        let rows = match sort {
            None => {
                sqlx::query_as::<_, DocumentRow>(
                    r#"
                    SELECT id, data FROM documents
                    WHERE collection = $1
                    ORDER BY seq ASC
                    LIMIT $2
                    "#,
                )
                .bind(collection)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            Some(sort) => {
                let order = match sort.order {
                    SortOrder::Asc => "ASC",
                    SortOrder::Desc => "DESC",
                };
                sqlx::query_as::<_, DocumentRow>(&format!(
                    r#"
                    SELECT id, data FROM documents
                    WHERE collection = $1
                    ORDER BY data->>$2 {} NULLS LAST
                    LIMIT $3
                    "#,
                    order
                ))
                .bind(collection)
                .bind(sort.field)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(to_transport).collect())
    }

    /// Number of documents in a collection; drives the seed-if-empty guard
    pub async fn count(&self, collection: &str) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM documents WHERE collection = $1
            "#,
        )
        .bind(collection)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Distinct collection names, for connectivity diagnostics
    pub async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT collection FROM documents ORDER BY collection
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }
}

/// Idempotent schema setup, run at startup when enabled in config
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id UUID PRIMARY KEY,
            collection TEXT NOT NULL,
            seq BIGSERIAL NOT NULL,
            data JSONB NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS documents_collection_seq_idx
        ON documents (collection, seq)
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Transport-safe shape: the opaque id joins the payload as a string field.
/// Date values inside the payload are already ISO strings.
fn to_transport(row: DocumentRow) -> Map<String, Value> {
    let mut doc = match row.data {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    };
    doc.insert("id".to_string(), Value::String(row.id.to_string()));
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn to_document_flattens_entity_fields() {
        let account = crate::models::default_cash_account();
        let doc = to_document(&account).unwrap();
        assert_eq!(doc["name"], "Cash");
        assert_eq!(doc["type"], "cash");
        assert_eq!(doc["currency"], "USD");
        assert_eq!(doc["note"], Value::Null);
    }

    #[test]
    fn to_document_rejects_non_objects() {
        let result = to_document(&42);
        assert!(matches!(result, Err(StoreError::NotAnObject)));
    }

    #[test]
    fn transport_shape_injects_id_as_string() {
        let id = Uuid::new_v4();
        let row = DocumentRow {
            id,
            data: serde_json::json!({"name": "Groceries", "date": "2025-01-31"}),
        };
        let doc = to_transport(row);
        assert_eq!(doc["id"], Value::String(id.to_string()));
        assert_eq!(doc["name"], "Groceries");
        assert_eq!(doc["date"], "2025-01-31");
    }

    #[test]
    fn transaction_fields_survive_the_document_round_trip() {
        let tx: crate::models::NewTransaction = serde_json::from_value(serde_json::json!({
            "date": "2025-03-15",
            "amount": 1500.0,
            "direction": "income",
            "description": "Salary deposit",
            "merchant": "Acme Corp",
        }))
        .unwrap();

        // What create() persists is what list() hands back, plus the id
        let stored = to_document(&tx).unwrap();
        let row = DocumentRow {
            id: Uuid::new_v4(),
            data: Value::Object(stored.clone()),
        };
        let doc = to_transport(row);

        for (key, value) in &stored {
            assert_eq!(&doc[key], value, "field: {key}");
        }
        assert_eq!(doc["date"], "2025-03-15");
        assert_eq!(doc["direction"], "income");
        assert!(doc["id"].is_string());
    }
}

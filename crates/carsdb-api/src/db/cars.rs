//! # Car Record Model
//!
//! The `cars` collection schema and the store operations consumed by the
//! request handlers. [`CarStore`] is the injection seam: the production
//! implementation talks to MongoDB, integration tests substitute an
//! in-memory store with the same contract.

use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use super::{StoreError, COLLECTION_NAME, DB_NAME};

/// A car record as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Store-assigned identifier, rendered in its hex form.
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// Writable car fields, shared by the create and update payloads.
///
/// `year` must arrive as a JSON number; a non-numeric value is rejected
/// at deserialization before any store call.
#[derive(Debug, Clone, Deserialize)]
pub struct CarFields {
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// Store operations over the `cars` collection.
///
/// Implementations must treat a syntactically malformed identifier
/// exactly like an unknown one: not-found, never an error.
#[axum::async_trait]
pub trait CarStore: Send + Sync {
    /// All car records, store-default order.
    async fn find_all(&self) -> Result<Vec<Car>, StoreError>;

    /// The car with the given identifier, if any.
    async fn find_by_id(&self, id: &str) -> Result<Option<Car>, StoreError>;

    /// Insert a new record; the store assigns the identifier.
    async fn insert(&self, fields: CarFields) -> Result<Car, StoreError>;

    /// Delete by identifier, returning the number of records removed (0 or 1).
    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError>;

    /// Replace make/model/year wholesale, returning the post-update record.
    async fn replace_by_id(&self, id: &str, fields: CarFields)
        -> Result<Option<Car>, StoreError>;
}

/// Internal document shape for the `cars` collection.
#[derive(Debug, Serialize, Deserialize)]
struct CarDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    make: String,
    model: String,
    year: i32,
}

impl CarDocument {
    fn from_fields(id: Option<ObjectId>, fields: CarFields) -> Self {
        Self {
            id,
            make: fields.make,
            model: fields.model,
            year: fields.year,
        }
    }

    fn into_car(self) -> Car {
        Car {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            make: self.make,
            model: self.model,
            year: self.year,
        }
    }
}

/// Parse a path identifier into an `ObjectId`.
///
/// `None` means the identifier cannot address any stored record; the
/// store surfaces that as not-found rather than a server failure.
fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

/// MongoDB-backed [`CarStore`].
#[derive(Debug, Clone)]
pub struct MongoCarStore {
    collection: Collection<CarDocument>,
}

impl MongoCarStore {
    /// Bind to the fixed `carsdb.cars` collection on the given client.
    pub fn new(client: &Client) -> Self {
        Self {
            collection: client.database(DB_NAME).collection(COLLECTION_NAME),
        }
    }
}

#[axum::async_trait]
impl CarStore for MongoCarStore {
    async fn find_all(&self) -> Result<Vec<Car>, StoreError> {
        let mut cursor = self.collection.find(doc! {}).await?;
        let mut cars = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            cars.push(document.into_car());
        }
        Ok(cars)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Car>, StoreError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };
        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(CarDocument::into_car))
    }

    async fn insert(&self, fields: CarFields) -> Result<Car, StoreError> {
        let document = CarDocument::from_fields(None, fields);
        let result = self.collection.insert_one(&document).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_default();
        Ok(Car {
            id,
            make: document.make,
            model: document.model,
            year: document.year,
        })
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(0);
        };
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count)
    }

    async fn replace_by_id(
        &self,
        id: &str,
        fields: CarFields,
    ) -> Result<Option<Car>, StoreError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };
        let replacement = CarDocument::from_fields(Some(oid), fields);
        let document = self
            .collection
            .find_one_and_replace(doc! { "_id": oid }, &replacement)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(document.map(CarDocument::into_car))
    }
}

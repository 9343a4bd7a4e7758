use super::{ObjectStore, StoreError, StoreResult, StoredObject};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockObjectStore {
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    failure: Arc<Mutex<Option<StoreError>>>,
    get_count: Arc<Mutex<usize>>,
    requested_keys: Arc<Mutex<Vec<String>>>,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self {
            objects: Arc::new(Mutex::new(HashMap::new())),
            failure: Arc::new(Mutex::new(None)),
            get_count: Arc::new(Mutex::new(0)),
            requested_keys: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_object(self, key: impl Into<String>, content: Vec<u8>) -> Self {
        self.objects.lock().unwrap().insert(key.into(), content);
        self
    }

    /// Make every subsequent `get` fail with `error`.
    pub fn with_failure(self, error: StoreError) -> Self {
        *self.failure.lock().unwrap() = Some(error);
        self
    }

    pub fn get_count(&self) -> usize {
        *self.get_count.lock().unwrap()
    }

    pub fn requested_keys(&self) -> Vec<String> {
        self.requested_keys.lock().unwrap().clone()
    }
}

impl Default for MockObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn get(&self, key: &str) -> StoreResult<StoredObject> {
        *self.get_count.lock().unwrap() += 1;
        self.requested_keys.lock().unwrap().push(key.to_string());

        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }

        let objects = self.objects.lock().unwrap();
        match objects.get(key) {
            Some(data) => Ok(StoredObject::new(ByteStream::from(data.clone()))),
            None => Err(StoreError::not_found(key)),
        }
    }
}

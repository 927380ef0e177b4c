use std::sync::{Arc, Mutex};

use content_loader::{FetchError, LoadRequest, PageLoader};

#[derive(Clone)]
pub struct MockPageLoader {
    pub blocks: Vec<String>,
    pub calls: Arc<Mutex<Vec<LoadRequest>>>,
    pub fail: bool,
}

impl MockPageLoader {
    pub fn new(blocks: &[&str]) -> Self {
        Self {
            blocks: blocks.iter().map(|b| b.to_string()).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(&[])
        }
    }
}

impl PageLoader for MockPageLoader {
    async fn load(&self, request: &LoadRequest) -> Result<Vec<String>, FetchError> {
        self.calls.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(FetchError::EmptyDocument(request.url.to_string()));
        }
        Ok(self.blocks.clone())
    }
}

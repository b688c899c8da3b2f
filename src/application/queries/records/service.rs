use std::sync::Arc;

use crate::domain::record::RecordReadRepository;

pub struct RecordQueryService {
    pub(super) read_repo: Arc<dyn RecordReadRepository>,
}

impl RecordQueryService {
    pub fn new(read_repo: Arc<dyn RecordReadRepository>) -> Self {
        Self { read_repo }
    }
}

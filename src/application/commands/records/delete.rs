use super::RecordCommandService;
use crate::{application::error::ApplicationResult, domain::record::RecordId};

pub struct DeleteRecordCommand {
    pub id: i64,
}

impl RecordCommandService {
    pub async fn delete_record(&self, command: DeleteRecordCommand) -> ApplicationResult<()> {
        let id = RecordId::new(command.id)?;
        self.write_repo.delete(id).await?;
        Ok(())
    }
}

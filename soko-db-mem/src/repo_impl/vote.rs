use soko_core::entities::Vote;

use super::*;

impl VoteRepo for MemoryBackend {
    fn replace_vote(&self, vote: Vote) -> Result<Option<Vote>> {
        let mut tables = self.tables.write();
        let key = (vote.user_id.clone(), vote.target.clone());
        Ok(tables.votes.insert(key, vote))
    }
}

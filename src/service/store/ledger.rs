use std::collections::HashMap;

use crate::model::Timestamp;

/// Last accepted impression time per user, for a single campaign.
#[derive(Debug, Clone, Default)]
pub struct ImpressionLedger {
    timetable: HashMap<String, Timestamp>,
}

impl ImpressionLedger {
    pub fn last_seen(&self, user_id: &str) -> Option<Timestamp> {
        self.timetable.get(user_id).copied()
    }

    /// Records `time` as the user's last accepted impression and returns the previous one.
    pub fn refresh(&mut self, user_id: &str, time: Timestamp) -> Option<Timestamp> {
        match self.timetable.get_mut(user_id) {
            Some(last_seen) => Some(std::mem::replace(last_seen, time)),
            None => self.timetable.insert(user_id.to_owned(), time),
        }
    }

    pub fn len(&self) -> usize {
        self.timetable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timetable.is_empty()
    }
}

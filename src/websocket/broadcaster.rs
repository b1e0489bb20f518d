use actix::Addr;
use serde::Serialize;
use serde_json::{json, Map, Value};

use super::hub::BroadcastHub;
use super::messages::{match_room, Broadcast};
use crate::models::sport_match::{MatchEventDetail, MatchStatus, ScoreUpdateRequest};

/// Handle the mutation handlers use to fan updates out to match rooms.
///
/// Every method is fire-and-forget: emission happens only after the
/// corresponding row is committed, and no failure on this path is ever
/// surfaced to the HTTP caller.
#[derive(Clone)]
pub struct LiveBroadcaster {
    hub: Addr<BroadcastHub>,
}

impl LiveBroadcaster {
    pub fn new(hub: Addr<BroadcastHub>) -> Self {
        Self { hub }
    }

    pub fn broadcast_score_update(&self, match_id: i32, score: &ScoreUpdateRequest) {
        self.emit(match_id, "score_update", score);
    }

    pub fn broadcast_match_event(&self, match_id: i32, event: &MatchEventDetail) {
        self.emit(match_id, "match_event", event);
    }

    pub fn broadcast_match_status(&self, match_id: i32, status: MatchStatus, extra: Option<Value>) {
        let mut payload = match extra {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        payload.insert("status".to_string(), json!(status));
        self.send(match_id, "match_status", payload);
    }

    fn emit<T: Serialize>(&self, match_id: i32, event: &str, payload: &T) {
        let payload = match serde_json::to_value(payload) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::error!("Broadcast payload for {} was not a JSON object", event);
                return;
            }
        };
        self.send(match_id, event, payload);
    }

    fn send(&self, match_id: i32, event: &str, mut payload: Map<String, Value>) {
        payload.insert("type".to_string(), json!(event));
        payload.insert("match_id".to_string(), json!(match_id));
        self.hub.do_send(Broadcast {
            room: match_room(match_id),
            message: Value::Object(payload).to_string(),
        });
    }
}

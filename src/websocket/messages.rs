use actix::prelude::*;
use serde::Deserialize;
use uuid::Uuid;

/// A text frame pushed to one connected client.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub struct WsMessage(pub String);

#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub session_id: Uuid,
    pub addr: Recipient<WsMessage>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub session_id: Uuid,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Join {
    pub session_id: Uuid,
    pub room: String,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Leave {
    pub session_id: Uuid,
    pub room: String,
}

/// Fan one prebuilt frame out to every member of a room.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub struct Broadcast {
    pub room: String,
    pub message: String,
}

/// Control messages a client may send after connecting.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    JoinMatch { match_id: i32 },
    LeaveMatch { match_id: i32 },
    JoinCompetition { competition_id: i32 },
    LeaveCompetition { competition_id: i32 },
}

pub fn match_room(match_id: i32) -> String {
    format!("match_{}", match_id)
}

pub fn competition_room(competition_id: i32) -> String {
    format!("competition_{}", competition_id)
}

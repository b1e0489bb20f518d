//! Central room registry. All membership state lives in this one actor,
//! so joins, leaves and fan-out are serialized through its mailbox and
//! need no locking.

use std::collections::{HashMap, HashSet};

use actix::prelude::*;
use uuid::Uuid;

use super::messages::{Broadcast, Connect, Disconnect, Join, Leave, WsMessage};

#[derive(Default)]
pub struct BroadcastHub {
    sessions: HashMap<Uuid, Recipient<WsMessage>>,
    rooms: HashMap<String, HashSet<Uuid>>,
}

impl BroadcastHub {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Actor for BroadcastHub {
    type Context = Context<Self>;
}

impl Handler<Connect> for BroadcastHub {
    type Result = ();

    fn handle(&mut self, msg: Connect, _: &mut Self::Context) {
        tracing::info!("Client connected: {}", msg.session_id);
        self.sessions.insert(msg.session_id, msg.addr);
    }
}

impl Handler<Disconnect> for BroadcastHub {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _: &mut Self::Context) {
        tracing::info!("Client disconnected: {}", msg.session_id);
        self.sessions.remove(&msg.session_id);
        self.rooms.retain(|_, members| {
            members.remove(&msg.session_id);
            !members.is_empty()
        });
    }
}

impl Handler<Join> for BroadcastHub {
    type Result = ();

    // Idempotent: joining a room twice is a single membership
    fn handle(&mut self, msg: Join, _: &mut Self::Context) {
        tracing::info!("Client {} joined room: {}", msg.session_id, msg.room);
        self.rooms.entry(msg.room).or_default().insert(msg.session_id);
    }
}

impl Handler<Leave> for BroadcastHub {
    type Result = ();

    fn handle(&mut self, msg: Leave, _: &mut Self::Context) {
        if let Some(members) = self.rooms.get_mut(&msg.room) {
            members.remove(&msg.session_id);
            if members.is_empty() {
                self.rooms.remove(&msg.room);
            }
        }
        tracing::info!("Client {} left room: {}", msg.session_id, msg.room);
    }
}

impl Handler<Broadcast> for BroadcastHub {
    type Result = ();

    // At-most-once: a session that disconnected mid-flight just misses
    // the frame, nothing is queued or retried
    fn handle(&mut self, msg: Broadcast, _: &mut Self::Context) {
        let Some(members) = self.rooms.get(&msg.room) else {
            tracing::debug!("Broadcast to empty room: {}", msg.room);
            return;
        };
        tracing::debug!("Broadcasting to {} members of {}", members.len(), msg.room);
        for session_id in members {
            if let Some(addr) = self.sessions.get(session_id) {
                addr.do_send(WsMessage(msg.message.clone()));
            }
        }
    }
}

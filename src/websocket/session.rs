use std::time::{Duration, Instant};

use actix::{Actor, ActorContext, Addr, AsyncContext, Handler, Running, StreamHandler};
use actix_web_actors::ws;
use uuid::Uuid;

use super::hub::BroadcastHub;
use super::messages::{
    competition_room, match_room, ClientMessage, Connect, Disconnect, Join, Leave, WsMessage,
};

// How often heartbeat pings are sent
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);
// How long before lack of client response causes a timeout
const CLIENT_TIMEOUT: Duration = Duration::from_secs(120);

/// One WebSocket connection. Relays room control messages to the hub and
/// pushes broadcast frames back to the peer.
pub struct LiveSession {
    session_id: Uuid,
    heartbeat: Instant,
    hub: Addr<BroadcastHub>,
}

impl LiveSession {
    pub fn new(hub: Addr<BroadcastHub>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            heartbeat: Instant::now(),
            hub,
        }
    }

    fn heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
            if Instant::now().duration_since(act.heartbeat) > CLIENT_TIMEOUT {
                tracing::warn!(
                    "Client heartbeat missed, disconnecting session: {}",
                    act.session_id
                );
                ctx.stop();
                return;
            }
            ctx.ping(b"ping");
        });
    }

    fn handle_client_message(&self, text: &str) {
        match serde_json::from_str::<ClientMessage>(text) {
            Ok(ClientMessage::JoinMatch { match_id }) => {
                self.hub.do_send(Join {
                    session_id: self.session_id,
                    room: match_room(match_id),
                });
            }
            Ok(ClientMessage::LeaveMatch { match_id }) => {
                self.hub.do_send(Leave {
                    session_id: self.session_id,
                    room: match_room(match_id),
                });
            }
            Ok(ClientMessage::JoinCompetition { competition_id }) => {
                self.hub.do_send(Join {
                    session_id: self.session_id,
                    room: competition_room(competition_id),
                });
            }
            Ok(ClientMessage::LeaveCompetition { competition_id }) => {
                self.hub.do_send(Leave {
                    session_id: self.session_id,
                    room: competition_room(competition_id),
                });
            }
            Err(e) => {
                tracing::warn!(
                    "Unparseable control message from {}: {}",
                    self.session_id,
                    e
                );
            }
        }
    }
}

impl Actor for LiveSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        tracing::info!("LiveSession started: {}", self.session_id);
        self.heartbeat(ctx);
        self.hub.do_send(Connect {
            session_id: self.session_id,
            addr: ctx.address().recipient(),
        });
    }

    fn stopping(&mut self, _ctx: &mut Self::Context) -> Running {
        self.hub.do_send(Disconnect {
            session_id: self.session_id,
        });
        Running::Stop
    }
}

impl Handler<WsMessage> for LiveSession {
    type Result = ();

    fn handle(&mut self, msg: WsMessage, ctx: &mut Self::Context) {
        ctx.text(msg.0);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for LiveSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.heartbeat = Instant::now();
                self.handle_client_message(&text);
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Binary(_)) => {
                tracing::warn!("Unexpected binary frame from {}", self.session_id);
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {}
            Err(e) => {
                tracing::warn!("WebSocket protocol error from {}: {}", self.session_id, e);
                ctx.stop();
            }
        }
    }
}

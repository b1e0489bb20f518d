use actix::Addr;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;

use crate::websocket::{BroadcastHub, LiveSession};

/// Upgrade to a WebSocket and start a session bound to the broadcast hub.
/// Room membership is controlled by `join_*`/`leave_*` messages the client
/// sends afterwards.
pub async fn live_ws_route(
    req: HttpRequest,
    stream: web::Payload,
    hub: web::Data<Addr<BroadcastHub>>,
) -> Result<HttpResponse, Error> {
    tracing::info!("New live WebSocket connection request");
    ws::start(LiveSession::new(hub.get_ref().clone()), &req, stream)
}

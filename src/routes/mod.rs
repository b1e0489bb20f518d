use actix_web::web;

pub mod competitions;
pub mod favorites;
pub mod health;
pub mod home;
pub mod live;
pub mod matches;
pub mod teams;
pub mod track;
pub mod websocket;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health);

    cfg.service(
        web::scope("/api")
            .service(home::home_data)
            .service(
                web::scope("/competitions")
                    .service(competitions::list_competitions)
                    .service(competitions::get_competition)
                    .service(competitions::create_competition),
            )
            .service(
                web::scope("/teams")
                    .service(teams::list_teams)
                    .service(teams::get_team)
                    .service(teams::create_team),
            )
            .service(
                web::scope("/track")
                    .service(track::get_fixtures)
                    .service(track::create_track_event)
                    .service(track::update_track_event_status),
            )
            .service(
                web::scope("/favorites")
                    .service(favorites::get_favorites)
                    .service(favorites::add_favorite)
                    .service(favorites::remove_favorite),
            )
            .service(
                web::scope("/live")
                    .service(live::get_live_matches)
                    .service(live::update_live_score)
                    .service(live::add_match_event),
            )
            .service(
                web::scope("/matches")
                    .service(matches::list_matches)
                    .service(matches::create_match)
                    .service(matches::get_match_or_sport),
            ),
    );

    // WebSocket endpoint for live rooms
    cfg.service(web::resource("/ws").route(web::get().to(websocket::live_ws_route)));
}

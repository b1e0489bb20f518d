pub mod competition;
pub mod favorite;
pub mod player;
pub mod sport_match;
pub mod team;
pub mod track;

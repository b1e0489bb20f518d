pub mod competitions;
pub mod favorites;
pub mod filter;
pub mod live;
pub mod matches;
pub mod schema;
pub mod seed;
pub mod teams;
pub mod track;

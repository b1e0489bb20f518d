pub mod competitions;
pub mod favorites;
pub mod health;
pub mod home;
pub mod live;
pub mod matches;
pub mod teams;
pub mod track;

pub mod events;
pub mod feed_costs;
pub mod health;
pub mod home;
pub mod navigation;
pub mod production;

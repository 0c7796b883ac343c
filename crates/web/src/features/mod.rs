pub mod health;
pub mod movies;
pub mod producers;

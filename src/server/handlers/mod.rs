pub mod health;
pub mod importances;
pub mod pages;

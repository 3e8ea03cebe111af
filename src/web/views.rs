pub mod health;
pub mod info;
pub mod predict;
pub mod root;

mod common;
mod repository;
mod views;

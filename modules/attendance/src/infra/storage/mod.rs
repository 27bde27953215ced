//! Storage layer - SeaORM entities, mappers, repositories and migrations

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

// src/filmes/mod.rs

pub mod filmes_router;
pub mod filmes_structs;

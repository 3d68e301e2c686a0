// src/categorias/mod.rs

pub mod categoria_router;
pub mod categoria_structs;

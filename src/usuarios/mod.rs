// src/usuarios/mod.rs

// Declara o submódulo que contém as definições das structs de usuários
pub mod usuario_structs;
// Acesso à tabela de usuários
pub mod usuario_repository;
// Hash e verificação de senhas
pub mod senha;
// Declara o submódulo que contém as funções de rota relacionadas a usuários
pub mod usuario_router;
// Emissão de tokens e extrator de perfil administrativo
pub mod auth_middleware;

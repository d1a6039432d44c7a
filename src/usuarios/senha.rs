// src/usuarios/senha.rs

//! Hash de mão única das senhas. O resto do sistema só conhece estas duas funções.

use bcrypt::BcryptError;

pub fn gerar_hash(senha: &str, custo: u32) -> Result<String, BcryptError> {
    bcrypt::hash(senha, custo)
}

pub fn confere(senha: &str, hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(senha, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_confere_apenas_com_a_senha_certa() {
        let hash = gerar_hash("admin", 4).unwrap();
        assert_ne!(hash, "admin");
        assert!(confere("admin", &hash).unwrap());
        assert!(!confere("Admin", &hash).unwrap());
    }
}

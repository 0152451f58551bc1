//! Hash-password command - prints a hash for seeding a user store

use clap::Args;

use crate::config::AppConfig;
use crate::infrastructure::user::PasswordScheme;

/// Arguments for the hash-password command
#[derive(Args, Clone, Debug)]
pub struct HashPasswordArgs {
    /// Plaintext password to hash
    pub password: String,
}

/// Print the hash of the given password using the configured scheme
pub fn run(args: HashPasswordArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
    println!("{}", hash_with_config(&config, &args.password)?);

    Ok(())
}

fn hash_with_config(config: &AppConfig, password: &str) -> anyhow::Result<String> {
    let scheme = PasswordScheme::from_str(&config.auth.password_scheme).ok_or_else(|| {
        anyhow::anyhow!("Unknown password scheme '{}'", config.auth.password_scheme)
    })?;

    Ok(scheme.hasher(config.auth.bcrypt_cost).hash(password)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies_with_configured_scheme() {
        let mut config = AppConfig::default();
        config.auth.bcrypt_cost = 4;

        let hash = hash_with_config(&config, "justincase-pw123").unwrap();
        assert!(hash.starts_with("$2"));

        let hasher = PasswordScheme::Bcrypt.hasher(4);
        assert!(hasher.verify("justincase-pw123", &hash));
    }

    #[test]
    fn test_argon2_scheme() {
        let mut config = AppConfig::default();
        config.auth.password_scheme = "argon2".to_string();

        let hash = hash_with_config(&config, "justincase-pw123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_unknown_scheme() {
        let mut config = AppConfig::default();
        config.auth.password_scheme = "md5".to_string();

        assert!(hash_with_config(&config, "pw").is_err());
    }
}

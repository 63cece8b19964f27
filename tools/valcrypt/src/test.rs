#[cfg(test)]
mod tests {
    use super::super::{
        decrypt_file, encrypt_file, inspect_file, load_manager,
        options::{DecryptOptions, EncryptOptions, InspectOptions},
        Error,
    };
    use std::{fs, path::Path};
    use value_crypt::{keys::SchemeKey, EncryptionManager};
    use value_crypt_test_util::{arrays_eq, random_bytes, random_passphrase};

    const TEST_FILE_SIZE: usize = 8192;

    fn write_settings(json: &str) -> Result<mktemp::Temp, Error> {
        let settings = mktemp::Temp::new_file()?;
        fs::write(settings.as_path(), json)?;
        Ok(settings)
    }

    fn encrypt_decrypt(manager: &EncryptionManager) -> Result<Vec<u8>, Error> {
        let plain_file = mktemp::Temp::new_file()?;
        fs::write(plain_file.as_path(), random_bytes(TEST_FILE_SIZE))?;

        let cipher_file = mktemp::Temp::new_file()?;
        let opt = EncryptOptions {
            file: plain_file.as_path().to_path_buf(),
            output: cipher_file.as_path().to_path_buf(),
        };
        encrypt_file(manager, &opt)?;

        let final_file = mktemp::Temp::new_file()?;
        let opt2 = DecryptOptions {
            file: cipher_file.as_path().to_path_buf(),
            output: final_file.as_path().to_path_buf(),
        };
        decrypt_file(manager, &opt2)?;

        let buf1 = fs::read(plain_file.as_path())?;
        let buf2 = fs::read(final_file.as_path())?;
        assert_eq!(buf1.len(), TEST_FILE_SIZE);
        assert!(
            arrays_eq(&buf1, &buf2),
            "encrypt->decrypt->final should be same as original"
        );
        Ok(fs::read(cipher_file.as_path())?)
    }

    fn inspect(manager: &EncryptionManager, data: &[u8]) -> Result<String, Error> {
        let file = mktemp::Temp::new_file()?;
        fs::write(file.as_path(), data)?;
        inspect_file(
            manager,
            &InspectOptions {
                file: file.as_path().to_path_buf(),
            },
        )
    }

    #[test]
    fn encrypt_literal_key() -> Result<(), Error> {
        let key = SchemeKey::generate()?.to_uri()?;
        let settings = write_settings(&format!(
            r#"[ {{ "name": "aes", "kind": "aes", "key": "{}" }} ]"#,
            key
        ))?;
        let manager = load_manager(Some(settings.as_path()))?;

        let stored = encrypt_decrypt(&manager)?;
        assert!(stored.starts_with(b"\x00aes$"));
        Ok(())
    }

    #[test]
    fn encrypt_env_xchacha20() -> Result<(), Error> {
        let passphrase = random_passphrase(40);

        // unique environment variable name will use part of that
        let env_var = format!("TEST_PASS_{}", &passphrase[..10]);
        std::env::set_var(&env_var, &passphrase);
        let settings = write_settings(&format!(
            r#"{{ "schemes": [ {{ "name": "xc", "kind": "xchacha20", "key": "env:{}" }} ] }}"#,
            env_var
        ))?;
        let manager = load_manager(Some(settings.as_path()))?;

        let stored = encrypt_decrypt(&manager)?;
        assert!(stored.starts_with(b"\x00xc$"));
        assert!(inspect(&manager, &stored)?.starts_with("encrypted with scheme \"xc\","));
        Ok(())
    }

    #[test]
    fn no_schemes_copies() -> Result<(), Error> {
        let settings = write_settings("[]")?;
        let manager = load_manager(Some(settings.as_path()))?;
        assert!(manager.is_empty());

        let stored = encrypt_decrypt(&manager)?;
        assert_eq!(stored.len(), TEST_FILE_SIZE, "stored unencrypted");
        Ok(())
    }

    #[test]
    fn inspect_values() -> Result<(), Error> {
        let settings = write_settings(r#"[ { "name": "plain", "kind": "identity" } ]"#)?;
        let manager = load_manager(Some(settings.as_path()))?;

        assert_eq!(inspect(&manager, b"hello")?, "not encrypted (5 bytes)");
        assert_eq!(
            inspect(&manager, b"\x00hello")?,
            "malformed envelope, read as plaintext (6 bytes)"
        );
        assert_eq!(
            inspect(&manager, b"\x00plain$hi")?,
            "encrypted with scheme \"plain\", 2 bytes of ciphertext"
        );
        assert_eq!(
            inspect(&manager, b"\x00gone$hi")?,
            "encrypted with scheme \"gone\" (not registered), 2 bytes of ciphertext"
        );
        Ok(())
    }

    #[test]
    fn unknown_scheme_fails() -> Result<(), Error> {
        let settings = write_settings(r#"[ { "name": "plain", "kind": "identity" } ]"#)?;
        let manager = load_manager(Some(settings.as_path()))?;

        let input = mktemp::Temp::new_file()?;
        fs::write(input.as_path(), b"\x00retired$ct")?;
        let output = mktemp::Temp::new_file()?;
        let res = decrypt_file(
            &manager,
            &DecryptOptions {
                file: input.as_path().to_path_buf(),
                output: output.as_path().to_path_buf(),
            },
        );
        assert!(matches!(
            res,
            Err(Error::LibError(value_crypt::error::Error::UnknownScheme(ref n))) if n == "retired"
        ));
        Ok(())
    }

    #[test]
    fn bad_settings() {
        assert!(load_manager(Some(Path::new("/nonexistent/valcrypt.json"))).is_err());

        let settings = write_settings(r#"[ { "name": "aes", "kind": "aes" } ]"#).expect("settings");
        assert!(matches!(
            load_manager(Some(settings.as_path())),
            Err(Error::LibError(value_crypt::error::Error::Configuration(_)))
        ));
    }
}

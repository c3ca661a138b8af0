use std::collections::BTreeMap;
use percent_encoding::utf8_percent_encode;
use url::form_urlencoded;
use crate::config::structs::scoped_config::ScopedConfig;
use crate::connector::enums::driver_error::DriverError;
use crate::mongo::mongo::{KEY_AUTH_MECHANISM, KEY_DB, KEY_HOST, KEY_PASSWORD, KEY_PORT, KEY_READ_PREFERENCE, KEY_SSL_MODE, KEY_USER, REDACTED_PASSWORD, URI_SCHEME, USERINFO_ENCODE_SET};
use crate::mongo::structs::mongodb_options::MongoDbOptions;

impl MongoDbOptions {
    pub fn resolve(config: &ScopedConfig) -> MongoDbOptions {
        MongoDbOptions {
            host: config.get_string(KEY_HOST),
            port: config.get_int(KEY_PORT),
            db: config.get_string(KEY_DB),
            user: config.get_string(KEY_USER),
            password: config.get_string(KEY_PASSWORD),
            auth_mechanism: config.get_string(KEY_AUTH_MECHANISM),
            read_preference: config.get_string(KEY_READ_PREFERENCE),
            ssl_mode: config.get_bool(KEY_SSL_MODE),
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.user.is_empty() && !self.password.is_empty()
    }

    pub fn query_parameters(&self) -> BTreeMap<&'static str, String> {
        let mut parameters = BTreeMap::new();
        parameters.insert("tls", self.ssl_mode.to_string());
        if !self.auth_mechanism.is_empty() {
            parameters.insert("authMechanism", self.auth_mechanism.clone());
        }
        if !self.db.is_empty() {
            parameters.insert("authSource", self.db.clone());
        }
        if !self.read_preference.is_empty() {
            parameters.insert("readPreference", self.read_preference.clone());
        }
        parameters
    }

    /// The URI handed to the driver.
    pub fn connection_uri(&self) -> Result<String, DriverError> {
        self.build_uri(false)
    }

    /// Same as `connection_uri` with the password masked, for logging.
    pub fn redacted_uri(&self) -> Result<String, DriverError> {
        self.build_uri(true)
    }

    fn build_uri(&self, redact: bool) -> Result<String, DriverError> {
        let port = u16::try_from(self.port)
            .map_err(|_| DriverError::InvalidTarget(format!("port {} is outside 0..=65535", self.port)))?;
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_parameters())
            .finish();

        let mut uri = String::from(URI_SCHEME);
        if self.has_credentials() {
            let password = match redact {
                true => REDACTED_PASSWORD.to_string(),
                false => utf8_percent_encode(&self.password, USERINFO_ENCODE_SET).to_string(),
            };
            uri.push_str(&format!("{}:{}@", utf8_percent_encode(&self.user, USERINFO_ENCODE_SET), password));
        }
        uri.push_str(&format!("{}:{}/?{}", self.host, port, query));
        Ok(uri)
    }
}

use crate::config::structs::scoped_config::ScopedConfig;
use crate::sqlite::sqlite::KEY_DATA_SOURCE;
use crate::sqlite::structs::sqlite_options::SqliteOptions;

impl SqliteOptions {
    pub fn resolve(config: &ScopedConfig) -> SqliteOptions {
        SqliteOptions {
            data_source: config.get_string(KEY_DATA_SOURCE),
        }
    }
}

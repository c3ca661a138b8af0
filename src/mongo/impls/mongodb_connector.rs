use mongodb::Client;
use crate::connector::structs::connector::Connector;
use crate::mongo::structs::mongodb_backend::MongoDbBackend;

impl Connector<MongoDbBackend> {
    pub fn get_client(&self) -> Option<Client> {
        self.get_handle()
    }
}

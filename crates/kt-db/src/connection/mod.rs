pub mod database_connector;

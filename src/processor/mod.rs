pub mod csv_parser;
pub mod timezone;
pub mod trip_builder;
pub mod upload;

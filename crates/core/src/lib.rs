pub mod catalog;
pub mod config;
pub mod order;

pub use catalog::{load_catalog, Catalog, CatalogData, CatalogError, CatalogItem, CatalogStats};
pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, CatalogConfig,
    Config, ConfigError, OutputConfig,
};
pub use order::{
    parse_order_text, to_csv, validate_csv, CsvValidation, MappedItem, MappingIssue, OrderLine,
    OrderMapper,
};

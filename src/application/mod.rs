pub mod use_cases;

pub use use_cases::catalog_import::CatalogImport;

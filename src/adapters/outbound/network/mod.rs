/// Network adapters for remote document stores
mod http_product_lookup;

pub use http_product_lookup::HttpProductLookup;

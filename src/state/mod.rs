mod catalog;
mod persistence;

pub use catalog::{FoodCatalog, FUZZY_MATCH_THRESHOLD};
pub use persistence::{
    bundled_catalog, decode_profile, decode_profile_bytes, encode_profile, load_catalog,
    parse_catalog_json, ProfileStore,
};

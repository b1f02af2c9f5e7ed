pub mod module_id;
pub mod module_type;
pub mod output_asset;
pub mod raw_idx;
